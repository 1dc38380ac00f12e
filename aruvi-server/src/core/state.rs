//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::{BackgroundTasks, Config, Result, StoreBackend, TaskKind};
use crate::manager::StateManager;
use crate::store::{LocalStore, RemoteStore, StateStore};

/// Server state shared by every request handler
///
/// Cloning is shallow; the manager lives behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub manager: Arc<StateManager>,
}

impl ServerState {
    /// Build the state for the configured store backend and load the
    /// working set into memory
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn StateStore> = match config.store_backend {
            StoreBackend::Local => {
                let dir = std::path::Path::new(&config.work_dir).join("data");
                Arc::new(LocalStore::new(&dir)?)
            }
            StoreBackend::Remote => Arc::new(RemoteStore::new(&config.remote_base_url)),
        };

        tracing::info!(backend = store.kind(), "loading state");
        let manager = StateManager::load(store, config.table_count).await?;

        Ok(Self {
            config: config.clone(),
            manager: Arc::new(manager),
        })
    }

    /// Register the periodic soft refresh on the task set
    ///
    /// Re-reads the backing store on an interval so a console pointed at
    /// a shared remote picks up changes made elsewhere. Failures are
    /// logged and the previous in-memory state stays live.
    pub fn spawn_refresh(&self, tasks: &mut BackgroundTasks, cancel: CancellationToken) {
        let manager = self.manager.clone();
        let interval = Duration::from_secs(self.config.refresh_interval_secs);
        tasks.spawn("state-refresh", TaskKind::Periodic, async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            ticker.tick().await; // first tick fires immediately, skip it
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if let Err(e) = manager.refresh().await {
                            tracing::warn!("state refresh failed: {}", e);
                        }
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::{PosState, StateManager};

    #[tokio::test]
    async fn refresh_task_registers_and_shuts_down() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LocalStore::new(dir.path()).unwrap());
        let state = ServerState {
            config: Config::with_overrides(dir.path().display().to_string(), 0),
            manager: Arc::new(StateManager::with_state(PosState::default(), store, 8)),
        };

        let mut tasks = BackgroundTasks::new();
        let shutdown = tasks.shutdown_token();
        state.spawn_refresh(&mut tasks, shutdown);
        tasks.shutdown().await;
    }
}
