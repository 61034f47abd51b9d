//! Read-only aggregate reports over the book's collections.
//!
//! Every method is a pure fold over the current state: nothing is cached,
//! nothing is mutated, and empty collections produce zeroed results rather
//! than errors.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use shopbook_domain::{Book, EntryKind, NamedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Income/expense totals and their difference.
pub struct FinanceTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

pub struct ReportService;

impl ReportService {
    /// Sums finance entries by kind.
    pub fn finance_totals(book: &Book) -> FinanceTotals {
        let mut income = 0.0;
        let mut expense = 0.0;
        for entry in &book.finance {
            match entry.kind {
                EntryKind::Income => income += entry.amount,
                EntryKind::Expense => expense += entry.amount,
            }
        }
        FinanceTotals {
            income,
            expense,
            net: income - expense,
        }
    }

    /// Per-item on-hand quantities, keyed by item name.
    pub fn stock_snapshot(book: &Book) -> BTreeMap<String, i64> {
        book.stock
            .iter()
            .map(|item| (item.name().to_string(), item.quantity))
            .collect()
    }

    /// Sale revenue grouped by date.
    pub fn sales_by_date(book: &Book) -> BTreeMap<NaiveDate, f64> {
        let mut totals = BTreeMap::new();
        for sale in &book.sales {
            *totals.entry(sale.date).or_insert(0.0) += sale.total_price;
        }
        totals
    }

    /// Sale revenue grouped by item. Dangling sales are grouped under a
    /// placeholder label naming the missing id.
    pub fn sales_by_item(book: &Book) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for sale in &book.sales {
            let label = match book.stock_item(sale.item_id) {
                Some(item) => item.name().to_string(),
                None => format!("item #{}", sale.item_id),
            };
            *totals.entry(label).or_insert(0.0) += sale.total_price;
        }
        totals
    }

    /// Employee headcount grouped by position.
    pub fn headcount_by_position(book: &Book) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for employee in &book.employees {
            *counts.entry(employee.position.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopbook_domain::{Employee, FinanceEntry, Sale, StockItem};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).expect("valid date")
    }

    #[test]
    fn finance_totals_on_an_empty_book_are_zero() {
        let book = Book::new("Empty");
        let totals = ReportService::finance_totals(&book);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expense, 0.0);
        assert_eq!(totals.net, 0.0);
    }

    #[test]
    fn finance_totals_split_by_kind() {
        let mut book = Book::new("Test");
        book.add_finance_entry(FinanceEntry::new("Sales", 120.0, EntryKind::Income, date(1)));
        book.add_finance_entry(FinanceEntry::new("Rent", 80.0, EntryKind::Expense, date(2)));
        book.add_finance_entry(FinanceEntry::new("Tips", 30.0, EntryKind::Income, date(3)));

        let totals = ReportService::finance_totals(&book);
        assert_eq!(totals.income, 150.0);
        assert_eq!(totals.expense, 80.0);
        assert_eq!(totals.net, 70.0);
    }

    #[test]
    fn sales_group_by_date_and_item() {
        let mut book = Book::new("Test");
        let widget = book.add_stock_item(StockItem::new("Widget", 10, 2.0));
        book.add_sale(Sale::new("Ana", widget, 2, 4.0, date(1)));
        book.add_sale(Sale::new("Bo", widget, 1, 2.0, date(1)));
        book.add_sale(Sale::new("Cy", 99, 1, 7.0, date(2)));

        let by_date = ReportService::sales_by_date(&book);
        assert_eq!(by_date[&date(1)], 6.0);
        assert_eq!(by_date[&date(2)], 7.0);

        let by_item = ReportService::sales_by_item(&book);
        assert_eq!(by_item["Widget"], 6.0);
        assert_eq!(by_item["item #99"], 7.0);
    }

    #[test]
    fn headcount_groups_positions() {
        let mut book = Book::new("Test");
        book.add_employee(Employee::new("Ana", "Manager"));
        book.add_employee(Employee::new("Bo", "Staff"));
        book.add_employee(Employee::new("Cy", "Staff"));

        let counts = ReportService::headcount_by_position(&book);
        assert_eq!(counts["Manager"], 1);
        assert_eq!(counts["Staff"], 2);
    }
}
