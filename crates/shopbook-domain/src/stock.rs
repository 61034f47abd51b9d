//! Domain model for stock items.

use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, NamedEntity, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub id: RecordId,
    pub name: String,
    /// On-hand quantity. Maintained by the stock ledger; can go negative
    /// under repeated manual overrides (accepted gap, surfaced as a warning).
    pub quantity: i64,
    /// Unit price used to compute a sale's total at creation time.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl StockItem {
    /// Creates a draft item; the owning book assigns the id on insert.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity,
            price,
            category: None,
            color: None,
            size: None,
        }
    }

    pub fn with_details(
        mut self,
        category: Option<String>,
        color: Option<String>,
        size: Option<String>,
    ) -> Self {
        self.category = category;
        self.color = color;
        self.size = size;
        self
    }
}

impl Identifiable for StockItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for StockItem {
    fn name(&self) -> &str {
        &self.name
    }
}
