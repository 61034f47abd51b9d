#![doc(test(attr(deny(warnings))))]

//! Shopbook keeps a small business's records consistent: stock items,
//! finance entries, sales, and personnel, with an inventory-consistency
//! engine ensuring stock quantities always reflect outstanding sales.

pub mod errors;
pub mod utils;

use std::sync::Once;

pub use shopbook_config::{Config, ConfigManager};
pub use shopbook_core::{
    book_warnings, BookStore, CoreError, EmployeeService, FinanceService, ImportService,
    ReportService, SaleRepricing, SaleService, StockLedger, StockService,
};
pub use shopbook_domain::{Book, Employee, EntryKind, FinanceEntry, RecordId, Sale, StockItem};
pub use shopbook_storage_json::JsonBookStorage;

pub use errors::ShopbookError;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shopbook tracing initialized.");
    });
}

/// Opens the configured book on a JSON-backed store under the configured
/// data directory.
pub fn open_store(config: &Config) -> Result<BookStore, ShopbookError> {
    let storage = JsonBookStorage::with_retention(
        config.books_dir(),
        config.backups_dir(),
        config.backup_retention,
    )?;
    Ok(BookStore::open(Box::new(storage), &config.default_book)?)
}

/// Resolves the configured sale repricing policy.
pub fn repricing_policy(config: &Config) -> Result<SaleRepricing, ShopbookError> {
    Ok(SaleRepricing::from_config_value(&config.sale_repricing)?)
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
