//! The long-lived store handle.
//!
//! `BookStore` replaces the reference system's open/read/close-per-call
//! pattern: one handle owns the backend plus the current in-memory book,
//! and every mutating operation runs inside [`BookStore::transact`]. The
//! operation works on a staged copy; only when it succeeds is the copy
//! persisted and swapped in, so a failure mid-sequence can never leave the
//! stock and sale collections inconsistent, in memory or on disk.

use chrono::NaiveDate;
use shopbook_domain::{Book, Employee, FinanceEntry, RecordId, StockItem};
use tracing::debug;

use crate::{
    import_service::{EmployeeRow, FinanceRow, SaleRow, StockRow},
    BookStorage, CoreError, CoreResult, EmployeeService, FinanceService, ImportService,
    SaleRepricing, SaleService, StockLedger, StockService,
};

pub struct BookStore {
    storage: Box<dyn BookStorage>,
    name: String,
    book: Book,
}

impl BookStore {
    /// Opens the named book, creating and persisting an empty one when the
    /// backend has no record of it.
    pub fn open(storage: Box<dyn BookStorage>, name: &str) -> CoreResult<Self> {
        let book = match storage.load_book(name) {
            Ok(book) => book,
            Err(CoreError::BookNotFound(_)) => {
                let book = Book::new(name);
                storage.save_book(name, &book)?;
                book
            }
            Err(err) => return Err(err),
        };
        Ok(Self {
            storage,
            name: name.to_string(),
            book,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the current state; reports run against this.
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Runs `op` against a staged copy of the book. On success the copy is
    /// persisted and becomes current; on any error the copy is dropped and
    /// neither memory nor the backend changes.
    pub fn transact<T>(&mut self, op: impl FnOnce(&mut Book) -> CoreResult<T>) -> CoreResult<T> {
        let mut staged = self.book.clone();
        match op(&mut staged) {
            Ok(value) => {
                self.storage.save_book(&self.name, &staged)?;
                self.book = staged;
                Ok(value)
            }
            Err(err) => {
                debug!(book = %self.name, %err, "transaction rolled back");
                Err(err)
            }
        }
    }

    /// Takes a backup snapshot of the current book.
    pub fn backup(&self, note: Option<&str>) -> CoreResult<crate::BookBackupInfo> {
        self.storage.backup_book(&self.name, &self.book, note)
    }

    // Sales

    pub fn create_sale(
        &mut self,
        customer_name: &str,
        item_id: RecordId,
        quantity: i64,
        date: NaiveDate,
    ) -> CoreResult<RecordId> {
        self.transact(|book| SaleService::create(book, customer_name, item_id, quantity, date))
    }

    pub fn update_sale_quantity(
        &mut self,
        sale_id: RecordId,
        new_quantity: i64,
        policy: SaleRepricing,
    ) -> CoreResult<()> {
        self.transact(|book| SaleService::update_quantity(book, sale_id, new_quantity, policy))
    }

    pub fn remove_sale(&mut self, sale_id: RecordId) -> CoreResult<()> {
        self.transact(|book| SaleService::remove(book, sale_id))
    }

    // Stock

    pub fn add_stock_item(&mut self, item: StockItem) -> CoreResult<RecordId> {
        self.transact(|book| StockService::add(book, item))
    }

    pub fn edit_stock_item(&mut self, id: RecordId, changes: StockItem) -> CoreResult<()> {
        self.transact(|book| StockService::edit(book, id, changes))
    }

    pub fn remove_stock_item(&mut self, id: RecordId) -> CoreResult<()> {
        self.transact(|book| StockService::remove(book, id))
    }

    pub fn adjust_stock(&mut self, item_id: RecordId, delta: i64) -> CoreResult<i64> {
        self.transact(|book| StockLedger::adjust(book, item_id, delta))
    }

    // Finance

    pub fn add_finance_entry(&mut self, entry: FinanceEntry) -> CoreResult<RecordId> {
        self.transact(|book| FinanceService::add(book, entry))
    }

    pub fn edit_finance_entry(&mut self, id: RecordId, changes: FinanceEntry) -> CoreResult<()> {
        self.transact(|book| FinanceService::edit(book, id, changes))
    }

    pub fn remove_finance_entry(&mut self, id: RecordId) -> CoreResult<()> {
        self.transact(|book| FinanceService::remove(book, id))
    }

    // Employees

    pub fn add_employee(&mut self, employee: Employee) -> CoreResult<RecordId> {
        self.transact(|book| EmployeeService::add(book, employee))
    }

    pub fn edit_employee(&mut self, id: RecordId, changes: Employee) -> CoreResult<()> {
        self.transact(|book| EmployeeService::edit(book, id, changes))
    }

    pub fn remove_employee(&mut self, id: RecordId) -> CoreResult<()> {
        self.transact(|book| EmployeeService::remove(book, id))
    }

    // Bulk import (raw append, one transaction per call)

    pub fn import_stock(&mut self, rows: Vec<StockRow>) -> CoreResult<usize> {
        self.transact(|book| ImportService::append_stock(book, rows))
    }

    pub fn import_finance(&mut self, rows: Vec<FinanceRow>) -> CoreResult<usize> {
        self.transact(|book| ImportService::append_finance(book, rows))
    }

    pub fn import_sales(&mut self, rows: Vec<SaleRow>) -> CoreResult<usize> {
        self.transact(|book| ImportService::append_sales(book, rows))
    }

    pub fn import_employees(&mut self, rows: Vec<EmployeeRow>) -> CoreResult<usize> {
        self.transact(|book| ImportService::append_employees(book, rows))
    }
}
