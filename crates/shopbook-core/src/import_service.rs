//! Bulk import adapter: raw appends into a collection's storage.
//!
//! This is a deliberate escape hatch. Rows go straight into the book,
//! bypassing the stock ledger and the sale service: imported sale rows do
//! NOT decrement stock, and imported stock rows do NOT merge with existing
//! ids — duplicates are permitted and referential integrity is never
//! checked. The only bookkeeping performed is advancing the id allocator
//! past explicit ids so later inserts cannot collide.

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use shopbook_domain::{
    Book, Employee, EntryKind, FinanceEntry, RecordId, Sale, StockItem,
};
use tracing::debug;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct StockRow {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinanceRow {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub description: String,
    pub amount: f64,
    /// `income` or `expense`, case-insensitive.
    pub kind: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleRow {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub item_id: RecordId,
    pub quantity: i64,
    pub total_price: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRow {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    pub position: String,
}

pub struct ImportService;

impl ImportService {
    pub fn append_stock(book: &mut Book, rows: Vec<StockRow>) -> CoreResult<usize> {
        let count = rows.len();
        for row in rows {
            let mut item = StockItem::new(row.name, row.quantity, row.price)
                .with_details(row.category, row.color, row.size);
            item.id = row.id.unwrap_or(0);
            book.add_stock_item(item);
        }
        debug!(count, "appended imported stock rows");
        book.touch();
        Ok(count)
    }

    pub fn append_finance(book: &mut Book, rows: Vec<FinanceRow>) -> CoreResult<usize> {
        let count = rows.len();
        for row in rows {
            let kind = parse_kind(&row.kind)?;
            let mut entry = FinanceEntry::new(row.description, row.amount, kind, row.date);
            entry.id = row.id.unwrap_or(0);
            book.add_finance_entry(entry);
        }
        debug!(count, "appended imported finance rows");
        book.touch();
        Ok(count)
    }

    /// Appends sale rows verbatim. No stock is reserved for them.
    pub fn append_sales(book: &mut Book, rows: Vec<SaleRow>) -> CoreResult<usize> {
        let count = rows.len();
        for row in rows {
            let mut sale = Sale::new(
                row.customer_name,
                row.item_id,
                row.quantity,
                row.total_price,
                row.date,
            );
            sale.id = row.id.unwrap_or(0);
            book.add_sale(sale);
        }
        debug!(count, "appended imported sale rows");
        book.touch();
        Ok(count)
    }

    pub fn append_employees(book: &mut Book, rows: Vec<EmployeeRow>) -> CoreResult<usize> {
        let count = rows.len();
        for row in rows {
            let mut employee = Employee::new(row.name, row.position);
            employee.id = row.id.unwrap_or(0);
            book.add_employee(employee);
        }
        debug!(count, "appended imported employee rows");
        book.touch();
        Ok(count)
    }

    pub fn read_stock_csv<R: Read>(reader: R) -> CoreResult<Vec<StockRow>> {
        read_rows(reader)
    }

    pub fn read_finance_csv<R: Read>(reader: R) -> CoreResult<Vec<FinanceRow>> {
        read_rows(reader)
    }

    pub fn read_sales_csv<R: Read>(reader: R) -> CoreResult<Vec<SaleRow>> {
        read_rows(reader)
    }

    pub fn read_employees_csv<R: Read>(reader: R) -> CoreResult<Vec<EmployeeRow>> {
        read_rows(reader)
    }
}

fn read_rows<R: Read, T: for<'de> Deserialize<'de>>(reader: R) -> CoreResult<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<T>() {
        let row = record.map_err(|err| {
            let line = err
                .position()
                .map(|pos| pos.line().to_string())
                .unwrap_or_else(|| "?".into());
            CoreError::InvalidInput(format!("csv line {line}: {err}"))
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_kind(value: &str) -> CoreResult<EntryKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "income" => Ok(EntryKind::Income),
        "expense" => Ok(EntryKind::Expense),
        other => Err(CoreError::InvalidInput(format!(
            "unknown finance entry kind `{other}`"
        ))),
    }
}
