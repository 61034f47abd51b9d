//! shopbook-core
//!
//! The inventory-consistency engine and its collaborators: the storage
//! abstraction, the long-lived store handle with per-operation
//! transactions, the stock ledger, sale orchestration, direct CRUD
//! services, read-only reports, and the raw bulk-import adapter.

pub mod employee_service;
pub mod error;
pub mod finance_service;
pub mod import_service;
pub mod report_service;
pub mod sale_service;
pub mod stock_ledger;
pub mod stock_service;
pub mod storage;
pub mod store;

pub use employee_service::EmployeeService;
pub use error::{CoreError, CoreResult};
pub use finance_service::FinanceService;
pub use import_service::{EmployeeRow, FinanceRow, ImportService, SaleRow, StockRow};
pub use report_service::{FinanceTotals, ReportService};
pub use sale_service::{SaleRepricing, SaleService};
pub use stock_ledger::StockLedger;
pub use stock_service::StockService;
pub use storage::{book_warnings, BookBackupInfo, BookStorage, MemoryBookStorage};
pub use store::BookStore;
