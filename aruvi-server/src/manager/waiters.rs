//! Waiter roster operations

use super::StateManager;
use crate::store::{Mutation, StoreResult};
use crate::utils::time::local_date;
use chrono::NaiveDate;
use shared::models::{
    Waiter, WaiterCreate, WaiterCredentials, WaiterIssue, WaiterStats, WaiterUpdate,
};
use shared::util::{fresh_id, now_millis};

impl StateManager {
    pub async fn list_waiters(&self) -> Vec<Waiter> {
        self.state.read().await.waiters.clone()
    }

    pub async fn get_waiter(&self, id: &str) -> Option<Waiter> {
        self.state
            .read()
            .await
            .waiters
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub async fn create_waiter(&self, payload: WaiterCreate) -> StoreResult<Waiter> {
        let credentials = match (payload.username, payload.password) {
            (Some(username), Some(password)) => Some(WaiterCredentials { username, password }),
            _ => None,
        };
        let waiter = Waiter {
            id: fresh_id(),
            credentials,
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            join_date: now_millis(),
            status: payload.status.unwrap_or_default(),
            orders_completed: 0,
            issues: Vec::new(),
        };
        let mut state = self.state.write().await;
        state.waiters.push(waiter.clone());
        self.store
            .apply(&state, Mutation::WaiterCreated { waiter: &waiter })
            .await?;
        Ok(waiter)
    }

    /// Profile fields only; the completed-order counter and issue log are
    /// never writable from outside
    pub async fn update_waiter(
        &self,
        id: &str,
        payload: WaiterUpdate,
    ) -> StoreResult<Option<Waiter>> {
        let mut state = self.state.write().await;
        let Some(waiter) = state.waiters.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        if let Some(name) = payload.name {
            waiter.name = name;
        }
        if let Some(phone) = payload.phone {
            waiter.phone = phone;
        }
        if let Some(email) = payload.email {
            waiter.email = email;
        }
        if let Some(status) = payload.status {
            waiter.status = status;
        }
        let waiter = waiter.clone();
        self.store
            .apply(&state, Mutation::WaiterUpdated { waiter: &waiter })
            .await?;
        Ok(Some(waiter))
    }

    pub async fn delete_waiter(&self, id: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.waiters.len();
        state.waiters.retain(|w| w.id != id);
        if state.waiters.len() == before {
            return Ok(false);
        }
        self.store
            .apply(&state, Mutation::WaiterDeleted { id })
            .await?;
        Ok(true)
    }

    /// Append a timestamped issue note. `None` when the waiter is unknown.
    pub async fn add_waiter_issue(
        &self,
        waiter_id: &str,
        description: String,
    ) -> StoreResult<Option<Waiter>> {
        let issue = WaiterIssue {
            id: fresh_id(),
            date: now_millis(),
            description,
        };
        let mut state = self.state.write().await;
        let Some(waiter) = state.waiters.iter_mut().find(|w| w.id == waiter_id) else {
            return Ok(None);
        };
        waiter.issues.push(issue.clone());
        let waiter = waiter.clone();
        self.store
            .apply(
                &state,
                Mutation::IssueAdded {
                    waiter_id,
                    issue: &issue,
                },
            )
            .await?;
        Ok(Some(waiter))
    }

    pub async fn update_credentials(
        &self,
        waiter_id: &str,
        credentials: WaiterCredentials,
    ) -> StoreResult<Option<Waiter>> {
        let mut state = self.state.write().await;
        let Some(waiter) = state.waiters.iter_mut().find(|w| w.id == waiter_id) else {
            return Ok(None);
        };
        waiter.credentials = Some(credentials.clone());
        let waiter = waiter.clone();
        self.store
            .apply(
                &state,
                Mutation::CredentialsUpdated {
                    waiter_id,
                    credentials: &credentials,
                },
            )
            .await?;
        Ok(Some(waiter))
    }

    /// Completed-order count for one local calendar date, derived from the
    /// bill history (the lifetime counter on the waiter is separate).
    /// `None` when the waiter is unknown.
    pub async fn waiter_stats(&self, waiter_id: &str, date: NaiveDate) -> Option<WaiterStats> {
        let state = self.state.read().await;
        state.waiters.iter().find(|w| w.id == waiter_id)?;
        let orders_completed = state
            .history
            .iter()
            .filter(|e| e.waiter_id.as_deref() == Some(waiter_id))
            .filter(|e| local_date(e.timestamp) == date)
            .count() as u64;
        Some(WaiterStats {
            waiter_id: waiter_id.to_string(),
            date: date.to_string(),
            orders_completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::PosState;
    use crate::store::LocalStore;
    use crate::utils::time::today;
    use shared::models::{OrderItem, WaiterStatus};
    use std::sync::Arc;

    fn manager_in(dir: &std::path::Path) -> StateManager {
        let store = Arc::new(LocalStore::new(dir).unwrap());
        StateManager::with_state(PosState::default(), store, 8)
    }

    fn create_payload(name: &str) -> WaiterCreate {
        WaiterCreate {
            username: Some(name.to_lowercase()),
            password: Some("secret".into()),
            name: name.into(),
            phone: "9876543210".into(),
            email: format!("{}@aruvi.com", name.to_lowercase()),
            status: None,
        }
    }

    #[tokio::test]
    async fn create_initializes_counters_and_issues() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let waiter = mgr.create_waiter(create_payload("Ravi")).await.unwrap();
        assert_eq!(waiter.orders_completed, 0);
        assert!(waiter.issues.is_empty());
        assert_eq!(waiter.status, WaiterStatus::Active);
        assert_eq!(waiter.credentials.unwrap().username, "ravi");
    }

    #[tokio::test]
    async fn issues_get_ids_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let waiter = mgr.create_waiter(create_payload("Priya")).await.unwrap();
        let updated = mgr
            .add_waiter_issue(&waiter.id, "late for evening shift".into())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.issues.len(), 1);
        assert!(!updated.issues[0].id.is_empty());
        assert!(updated.issues[0].date > 0);

        // unknown waiter is reported, not ignored
        assert!(mgr.add_waiter_issue("ghost", "x".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stats_count_todays_bills_only() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());
        let waiter = mgr.create_waiter(create_payload("Ravi")).await.unwrap();

        mgr.add_item(
            "table1",
            OrderItem {
                product_id: "p1".into(),
                product_name: "Biryani".into(),
                quantity: 1,
                price: 220.0,
            },
        )
        .await
        .unwrap();
        mgr.print_bill("table1", Some(&waiter.id)).await.unwrap();

        let stats = mgr.waiter_stats(&waiter.id, today()).await.unwrap();
        assert_eq!(stats.orders_completed, 1);

        let yesterday = today().pred_opt().unwrap();
        let stats = mgr.waiter_stats(&waiter.id, yesterday).await.unwrap();
        assert_eq!(stats.orders_completed, 0);

        assert!(mgr.waiter_stats("ghost", today()).await.is_none());
    }
}
