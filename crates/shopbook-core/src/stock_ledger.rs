//! Maintains each stock item's on-hand quantity.

use shopbook_domain::{Book, RecordId};
use tracing::warn;

use crate::{CoreError, CoreResult};

/// Applies signed quantity deltas to stock items.
///
/// The ledger never clamps: a sequence of manual overrides or oversells can
/// drive a quantity below zero. That matches the system this replaces; the
/// condition is logged and reported by [`crate::storage::book_warnings`]
/// instead of being rejected.
pub struct StockLedger;

impl StockLedger {
    /// Adds `delta` (positive or negative) to the item's quantity and
    /// returns the new value. Fails with `ItemNotFound` when no such item
    /// exists; touches nothing else.
    pub fn adjust(book: &mut Book, item_id: RecordId, delta: i64) -> CoreResult<i64> {
        let item = book
            .stock_item_mut(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        item.quantity += delta;
        let quantity = item.quantity;
        if quantity < 0 {
            warn!(item_id, quantity, "stock quantity fell below zero");
        }
        book.touch();
        Ok(quantity)
    }
}
