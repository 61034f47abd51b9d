//! shopbook-domain
//!
//! Pure domain models (StockItem, FinanceEntry, Sale, Employee, Book).
//! No I/O, no storage, no reporting. Only data types and core enums.

pub mod book;
pub mod common;
pub mod employee;
pub mod finance;
pub mod sale;
pub mod stock;

pub use book::*;
pub use common::*;
pub use employee::*;
pub use finance::*;
pub use sale::*;
pub use stock::*;
