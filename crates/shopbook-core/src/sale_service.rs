//! Sale lifecycle orchestration: create, amend, remove, each paired with
//! the matching stock-ledger adjustment.

use chrono::NaiveDate;
use shopbook_domain::{Book, RecordId, Sale};

use crate::{CoreError, CoreResult, StockLedger};

/// How `total_price` is recomputed when a sale's quantity changes.
///
/// The system this replaces multiplied the *old* quantity by the *new* one,
/// which reads like an accidental coupling rather than pricing policy. The
/// choice is therefore explicit and configurable instead of silently fixed;
/// `LegacyOldTimesNew` reproduces the old arithmetic verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaleRepricing {
    /// Current item price times the new quantity.
    #[default]
    UnitTimesNew,
    /// Current item price times the quantity the sale had before the update.
    UnitTimesOld,
    /// Old quantity times new quantity, as the replaced system computed it.
    LegacyOldTimesNew,
}

impl SaleRepricing {
    /// Parses the policy from its configuration string.
    pub fn from_config_value(value: &str) -> CoreResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unit-times-new" => Ok(SaleRepricing::UnitTimesNew),
            "unit-times-old" => Ok(SaleRepricing::UnitTimesOld),
            "legacy-old-times-new" => Ok(SaleRepricing::LegacyOldTimesNew),
            other => Err(CoreError::InvalidInput(format!(
                "unknown sale repricing policy `{other}`"
            ))),
        }
    }

    pub fn config_value(self) -> &'static str {
        match self {
            SaleRepricing::UnitTimesNew => "unit-times-new",
            SaleRepricing::UnitTimesOld => "unit-times-old",
            SaleRepricing::LegacyOldTimesNew => "legacy-old-times-new",
        }
    }
}

/// Orchestrates the create/update/delete lifecycle of a sale together with
/// the corresponding stock adjustment. Callers are expected to run each
/// method inside a single store transaction so a failure mid-sequence
/// leaves no partial state.
pub struct SaleService;

impl SaleService {
    /// Records a sale of `quantity` units of `item_id` and reserves that
    /// quantity from stock. `total_price` is the item's current unit price
    /// times the quantity.
    pub fn create(
        book: &mut Book,
        customer_name: &str,
        item_id: RecordId,
        quantity: i64,
        date: NaiveDate,
    ) -> CoreResult<RecordId> {
        if quantity <= 0 {
            return Err(CoreError::InvalidInput(
                "sale quantity must be positive".into(),
            ));
        }
        let customer = customer_name.trim();
        if customer.is_empty() {
            return Err(CoreError::InvalidInput(
                "customer name cannot be empty".into(),
            ));
        }
        let item = book
            .stock_item(item_id)
            .ok_or(CoreError::ItemNotFound(item_id))?;
        let total_price = item.price * quantity as f64;

        let sale_id = book.add_sale(Sale::new(customer, item_id, quantity, total_price, date));
        StockLedger::adjust(book, item_id, -quantity)?;
        Ok(sale_id)
    }

    /// Changes a sale's quantity to `new_quantity` (zero is allowed),
    /// recomputes `total_price` per `policy`, and returns the difference to
    /// stock: the ledger moves by `old_quantity - new_quantity`.
    ///
    /// Under the unit-price policies the referenced item is read at update
    /// time, so amending a sale whose item was deleted fails with
    /// `ItemNotFound` — as does the ledger adjustment under every policy.
    pub fn update_quantity(
        book: &mut Book,
        sale_id: RecordId,
        new_quantity: i64,
        policy: SaleRepricing,
    ) -> CoreResult<()> {
        if new_quantity < 0 {
            return Err(CoreError::InvalidInput(
                "sale quantity cannot be negative".into(),
            ));
        }
        let sale = book.sale(sale_id).ok_or(CoreError::SaleNotFound(sale_id))?;
        let item_id = sale.item_id;
        let old_quantity = sale.quantity;

        let total_price = match policy {
            SaleRepricing::LegacyOldTimesNew => old_quantity as f64 * new_quantity as f64,
            SaleRepricing::UnitTimesNew | SaleRepricing::UnitTimesOld => {
                let price = book
                    .stock_item(item_id)
                    .ok_or(CoreError::ItemNotFound(item_id))?
                    .price;
                match policy {
                    SaleRepricing::UnitTimesNew => price * new_quantity as f64,
                    _ => price * old_quantity as f64,
                }
            }
        };

        let sale = book
            .sale_mut(sale_id)
            .ok_or(CoreError::SaleNotFound(sale_id))?;
        sale.quantity = new_quantity;
        sale.total_price = total_price;

        StockLedger::adjust(book, item_id, old_quantity - new_quantity)?;
        Ok(())
    }

    /// Deletes a sale and returns its full quantity to stock.
    pub fn remove(book: &mut Book, sale_id: RecordId) -> CoreResult<()> {
        let sale = book.sale(sale_id).ok_or(CoreError::SaleNotFound(sale_id))?;
        let item_id = sale.item_id;
        let quantity = sale.quantity;

        book.remove_sale(sale_id);
        StockLedger::adjust(book, item_id, quantity)?;
        Ok(())
    }
}
