//! Domain model for sale records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: RecordId,
    pub customer_name: String,
    /// Back-reference to the stock item sold. Lookup only; the item does
    /// not track its sales, and the reference may dangle after the item
    /// is deleted.
    pub item_id: RecordId,
    pub quantity: i64,
    /// Unit price at creation time times quantity; only recomputed on an
    /// explicit quantity update.
    pub total_price: f64,
    pub date: NaiveDate,
}

impl Sale {
    pub fn new(
        customer_name: impl Into<String>,
        item_id: RecordId,
        quantity: i64,
        total_price: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            customer_name: customer_name.into(),
            item_id,
            quantity,
            total_price,
            date,
        }
    }
}

impl Identifiable for Sale {
    fn id(&self) -> RecordId {
        self.id
    }
}
