//! Validated direct CRUD for finance entries. Independent records with no
//! cross-entity invariants.

use shopbook_domain::{Book, FinanceEntry, RecordId};

use crate::{CoreError, CoreResult};

pub struct FinanceService;

impl FinanceService {
    pub fn add(book: &mut Book, entry: FinanceEntry) -> CoreResult<RecordId> {
        Self::validate(&entry)?;
        let id = book.add_finance_entry(entry);
        book.touch();
        Ok(id)
    }

    pub fn edit(book: &mut Book, id: RecordId, changes: FinanceEntry) -> CoreResult<()> {
        Self::validate(&changes)?;
        let entry = book
            .finance_entry_mut(id)
            .ok_or(CoreError::EntryNotFound(id))?;
        entry.description = changes.description;
        entry.amount = changes.amount;
        entry.kind = changes.kind;
        entry.date = changes.date;
        book.touch();
        Ok(())
    }

    pub fn remove(book: &mut Book, id: RecordId) -> CoreResult<()> {
        if !book.remove_finance_entry(id) {
            return Err(CoreError::EntryNotFound(id));
        }
        book.touch();
        Ok(())
    }

    pub fn list(book: &Book) -> Vec<&FinanceEntry> {
        book.finance.iter().collect()
    }

    fn validate(entry: &FinanceEntry) -> CoreResult<()> {
        if entry.description.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "entry description cannot be empty".into(),
            ));
        }
        if !entry.amount.is_finite() {
            return Err(CoreError::InvalidInput(
                "entry amount must be a number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shopbook_domain::EntryKind;

    fn entry_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date")
    }

    #[test]
    fn add_edit_remove_round_trip() {
        let mut book = Book::new("Test");
        let id = FinanceService::add(
            &mut book,
            FinanceEntry::new("Rent", 800.0, EntryKind::Expense, entry_date()),
        )
        .expect("add");

        let mut changes = FinanceEntry::new("Rent March", 820.0, EntryKind::Expense, entry_date());
        changes.id = id;
        FinanceService::edit(&mut book, id, changes).expect("edit");
        assert_eq!(book.finance_entry(id).expect("entry").amount, 820.0);

        FinanceService::remove(&mut book, id).expect("remove");
        assert!(matches!(
            FinanceService::remove(&mut book, id),
            Err(CoreError::EntryNotFound(_))
        ));
    }

    #[test]
    fn add_rejects_blank_descriptions_and_nan_amounts() {
        let mut book = Book::new("Test");
        assert!(FinanceService::add(
            &mut book,
            FinanceEntry::new("", 10.0, EntryKind::Income, entry_date()),
        )
        .is_err());
        assert!(FinanceService::add(
            &mut book,
            FinanceEntry::new("Odd", f64::NAN, EntryKind::Income, entry_date()),
        )
        .is_err());
    }
}
