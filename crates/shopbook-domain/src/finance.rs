//! Domain model for finance entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, RecordId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Classifies a finance entry as money in or money out.
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinanceEntry {
    pub id: RecordId,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub date: NaiveDate,
}

impl FinanceEntry {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            description: description.into(),
            amount,
            kind,
            date,
        }
    }
}

impl Identifiable for FinanceEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}
