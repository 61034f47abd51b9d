//! Validated direct CRUD for stock items.
//!
//! No cross-entity invariants: removal is unconditional even when existing
//! sales reference the item, and an edit may manually override the
//! quantity the ledger maintains. Both hazards are logged, not rejected.

use shopbook_domain::{Book, RecordId, StockItem};
use tracing::warn;

use crate::{CoreError, CoreResult};

pub struct StockService;

impl StockService {
    /// Adds a new stock item after validating its fields.
    pub fn add(book: &mut Book, item: StockItem) -> CoreResult<RecordId> {
        Self::validate(&item)?;
        if item.quantity < 0 {
            return Err(CoreError::InvalidInput(
                "initial quantity cannot be negative".into(),
            ));
        }
        let id = book.add_stock_item(item);
        book.touch();
        Ok(id)
    }

    /// Replaces an existing item's fields with the provided changeset.
    /// A manual quantity override is permitted and may leave the ledger
    /// inconsistent with outstanding sales.
    pub fn edit(book: &mut Book, id: RecordId, changes: StockItem) -> CoreResult<()> {
        Self::validate(&changes)?;
        if changes.quantity < 0 {
            warn!(item_id = id, quantity = changes.quantity, "manual override to negative quantity");
        }
        let item = book
            .stock_item_mut(id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.name = changes.name;
        item.quantity = changes.quantity;
        item.price = changes.price;
        item.category = changes.category;
        item.color = changes.color;
        item.size = changes.size;
        book.touch();
        Ok(())
    }

    /// Removes an item unconditionally. Sales that still reference it are
    /// left dangling by design.
    pub fn remove(book: &mut Book, id: RecordId) -> CoreResult<()> {
        let referencing = book.sales.iter().filter(|sale| sale.item_id == id).count();
        if !book.remove_stock_item(id) {
            return Err(CoreError::ItemNotFound(id));
        }
        if referencing > 0 {
            warn!(item_id = id, sales = referencing, "deleted stock item still referenced by sales");
        }
        book.touch();
        Ok(())
    }

    /// Returns a snapshot of the items currently tracked in the book.
    pub fn list(book: &Book) -> Vec<&StockItem> {
        book.stock.iter().collect()
    }

    fn validate(item: &StockItem) -> CoreResult<()> {
        if item.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("item name cannot be empty".into()));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(CoreError::InvalidInput(
                "item price must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
