//! Fixed-width ticket layout
//!
//! Builds the customer receipt as plain text, 42 columns wide to match
//! an 80mm thermal roll. The output is served as `text/plain`; any
//! actual printer driver sits outside this service.

use crate::utils::time::format_local;
use shared::models::{HistoryEntry, Hotel};

/// Default paper width in characters (80mm roll)
pub const TICKET_WIDTH: usize = 42;

/// Fixed-width text ticket builder
pub struct TicketBuilder {
    width: usize,
    out: String,
}

impl TicketBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            out: String::new(),
        }
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Write text centered in the ticket width
    pub fn center(&mut self, s: &str) -> &mut Self {
        let len = s.chars().count();
        if len >= self.width {
            return self.line(s);
        }
        let pad = (self.width - len) / 2;
        self.out.push_str(&" ".repeat(pad));
        self.line(s)
    }

    /// Left and right text on the same line, spaces filling the gap
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();
        if lw + rw >= self.width {
            self.out.push_str(left);
            self.out.push(' ');
            self.line(right)
        } else {
            self.out.push_str(left);
            self.out.push_str(&" ".repeat(self.width - lw - rw));
            self.line(right)
        }
    }

    /// Line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.line(&sep)
    }

    /// Line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    pub fn build(self) -> String {
        self.out
    }
}

/// Render one bill as a customer receipt
///
/// Shop header comes from the first hotel profile when one exists.
pub fn render_receipt(entry: &HistoryEntry, hotel: Option<&Hotel>) -> String {
    let mut t = TicketBuilder::new(TICKET_WIDTH);

    match hotel {
        Some(h) => {
            t.center(&h.shop_name);
            if !h.shop_address.is_empty() {
                t.center(&h.shop_address);
            }
        }
        None => {
            t.center("Aruvi");
        }
    }
    t.sep_double();
    t.line_lr(&format!("Table: {}", entry.table_id), &format_local(entry.timestamp));
    t.line(&format!("Bill:  {}", entry.id));
    t.sep_single();

    for item in &entry.items {
        t.line_lr(
            &format!("{} x{}", item.product_name, item.quantity),
            &format!("{:.2}", item.line_total()),
        );
    }

    t.sep_single();
    t.line_lr("TOTAL", &format!("{:.2}", entry.total));
    t.sep_double();
    t.newline();
    t.center("Thank you, visit again!");

    t.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderItem;

    fn sample_entry() -> HistoryEntry {
        HistoryEntry {
            id: "b100".into(),
            table_id: "table3".into(),
            items: vec![
                OrderItem {
                    product_id: "3".into(),
                    product_name: "Biryani".into(),
                    quantity: 2,
                    price: 220.0,
                },
                OrderItem {
                    product_id: "7".into(),
                    product_name: "Mango Lassi".into(),
                    quantity: 1,
                    price: 80.0,
                },
            ],
            total: 520.0,
            timestamp: 1_750_000_000_000,
            waiter_id: None,
        }
    }

    #[test]
    fn line_lr_pads_to_width() {
        let mut t = TicketBuilder::new(20);
        t.line_lr("left", "right");
        let line = t.build();
        assert_eq!(line.trim_end_matches('\n').chars().count(), 20);
        assert!(line.starts_with("left"));
        assert!(line.trim_end().ends_with("right"));
    }

    #[test]
    fn receipt_carries_lines_and_total() {
        let hotel = Hotel {
            id: "h1".into(),
            shop_name: "Aruvi".into(),
            shop_address: "12 Beach Road, Chennai".into(),
            shop_description: String::new(),
            no_of_tables: 8,
        };
        let text = render_receipt(&sample_entry(), Some(&hotel));
        assert!(text.contains("Aruvi"));
        assert!(text.contains("Table: table3"));
        assert!(text.contains("Biryani x2"));
        assert!(text.contains("440.00"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("520.00"));
    }

    #[test]
    fn receipt_without_profile_uses_fallback_header() {
        let text = render_receipt(&sample_entry(), None);
        assert!(text.starts_with(&" ".repeat((TICKET_WIDTH - 5) / 2)));
        assert!(text.contains("Aruvi"));
    }
}
