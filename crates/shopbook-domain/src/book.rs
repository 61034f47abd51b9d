//! The book: the whole persisted record set for one business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Identifiable, RecordId},
    employee::Employee,
    finance::FinanceEntry,
    sale::Sale,
    stock::StockItem,
};

fn first_id() -> RecordId {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Owns every record collection plus the id allocators for each one.
///
/// Mutations go through the typed accessors below; services layer their
/// validation on top and call [`Book::touch`] after a successful change.
pub struct Book {
    pub name: String,
    pub stock: Vec<StockItem>,
    pub finance: Vec<FinanceEntry>,
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default = "first_id")]
    next_stock_id: RecordId,
    #[serde(default = "first_id")]
    next_finance_id: RecordId,
    #[serde(default = "first_id")]
    next_sale_id: RecordId,
    #[serde(default = "first_id")]
    next_employee_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            stock: Vec::new(),
            finance: Vec::new(),
            sales: Vec::new(),
            employees: Vec::new(),
            next_stock_id: first_id(),
            next_finance_id: first_id(),
            next_sale_id: first_id(),
            next_employee_id: first_id(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes the modification stamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // Stock items

    /// Inserts a stock item. Drafts (id 0) get the next free id; records
    /// arriving with an explicit id keep it verbatim and the allocator is
    /// advanced past it. Returns the id actually stored.
    pub fn add_stock_item(&mut self, mut item: StockItem) -> RecordId {
        item.id = claim(&mut self.next_stock_id, item.id);
        let id = item.id;
        self.stock.push(item);
        id
    }

    pub fn stock_item(&self, id: RecordId) -> Option<&StockItem> {
        find(&self.stock, id)
    }

    pub fn stock_item_mut(&mut self, id: RecordId) -> Option<&mut StockItem> {
        find_mut(&mut self.stock, id)
    }

    /// Removes a stock item unconditionally; sales referencing it are left
    /// dangling. Returns whether a row was removed.
    pub fn remove_stock_item(&mut self, id: RecordId) -> bool {
        let before = self.stock.len();
        self.stock.retain(|item| item.id != id);
        self.stock.len() != before
    }

    // Finance entries

    pub fn add_finance_entry(&mut self, mut entry: FinanceEntry) -> RecordId {
        entry.id = claim(&mut self.next_finance_id, entry.id);
        let id = entry.id;
        self.finance.push(entry);
        id
    }

    pub fn finance_entry(&self, id: RecordId) -> Option<&FinanceEntry> {
        find(&self.finance, id)
    }

    pub fn finance_entry_mut(&mut self, id: RecordId) -> Option<&mut FinanceEntry> {
        find_mut(&mut self.finance, id)
    }

    pub fn remove_finance_entry(&mut self, id: RecordId) -> bool {
        let before = self.finance.len();
        self.finance.retain(|entry| entry.id != id);
        self.finance.len() != before
    }

    // Sales

    pub fn add_sale(&mut self, mut sale: Sale) -> RecordId {
        sale.id = claim(&mut self.next_sale_id, sale.id);
        let id = sale.id;
        self.sales.push(sale);
        id
    }

    pub fn sale(&self, id: RecordId) -> Option<&Sale> {
        find(&self.sales, id)
    }

    pub fn sale_mut(&mut self, id: RecordId) -> Option<&mut Sale> {
        find_mut(&mut self.sales, id)
    }

    pub fn remove_sale(&mut self, id: RecordId) -> bool {
        let before = self.sales.len();
        self.sales.retain(|sale| sale.id != id);
        self.sales.len() != before
    }

    // Employees

    pub fn add_employee(&mut self, mut employee: Employee) -> RecordId {
        employee.id = claim(&mut self.next_employee_id, employee.id);
        let id = employee.id;
        self.employees.push(employee);
        id
    }

    pub fn employee(&self, id: RecordId) -> Option<&Employee> {
        find(&self.employees, id)
    }

    pub fn employee_mut(&mut self, id: RecordId) -> Option<&mut Employee> {
        find_mut(&mut self.employees, id)
    }

    pub fn remove_employee(&mut self, id: RecordId) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        self.employees.len() != before
    }
}

fn find<T: Identifiable>(records: &[T], id: RecordId) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

fn find_mut<T: Identifiable>(records: &mut [T], id: RecordId) -> Option<&mut T> {
    records.iter_mut().find(|record| record.id() == id)
}

/// Resolves the id for an incoming record and keeps the allocator ahead of
/// every id ever stored.
fn claim(next: &mut RecordId, requested: RecordId) -> RecordId {
    if requested == 0 {
        let id = *next;
        *next += 1;
        id
    } else {
        if requested >= *next {
            *next = requested + 1;
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_receive_sequential_ids() {
        let mut book = Book::new("Test");
        let a = book.add_stock_item(StockItem::new("Widget", 10, 2.5));
        let b = book.add_stock_item(StockItem::new("Gadget", 4, 9.0));
        assert_eq!((a, b), (1, 2));
        assert_eq!(book.stock_item(2).map(|i| i.name.as_str()), Some("Gadget"));
    }

    #[test]
    fn explicit_ids_advance_the_allocator() {
        let mut book = Book::new("Test");
        let mut imported = StockItem::new("Imported", 1, 1.0);
        imported.id = 40;
        assert_eq!(book.add_stock_item(imported), 40);
        let next = book.add_stock_item(StockItem::new("Fresh", 1, 1.0));
        assert_eq!(next, 41);
    }

    #[test]
    fn remove_reports_whether_a_row_existed() {
        let mut book = Book::new("Test");
        let id = book.add_stock_item(StockItem::new("Widget", 10, 2.5));
        assert!(book.remove_stock_item(id));
        assert!(!book.remove_stock_item(id));
    }

    #[test]
    fn json_round_trip_preserves_collections_and_allocators() {
        let mut book = Book::new("RoundTrip");
        book.add_stock_item(StockItem::new("Widget", 10, 2.5));
        book.add_employee(Employee::new("Ana", "Manager"));

        let encoded = serde_json::to_string(&book).expect("serialize");
        let mut decoded: Book = serde_json::from_str(&encoded).expect("deserialize");

        assert_eq!(decoded.stock, book.stock);
        assert_eq!(decoded.employees, book.employees);
        let id = decoded.add_stock_item(StockItem::new("Gadget", 1, 1.0));
        assert_eq!(id, 2);
    }
}
