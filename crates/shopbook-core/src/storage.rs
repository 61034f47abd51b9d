use std::{
    collections::HashMap,
    path::PathBuf,
    sync::Mutex,
};

use shopbook_domain::Book;

use crate::CoreError;

/// Describes a persisted backup artifact for a book.
#[derive(Debug, Clone)]
pub struct BookBackupInfo {
    pub book: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing books and backups.
pub trait BookStorage: Send + Sync {
    fn save_book(&self, name: &str, book: &Book) -> Result<(), CoreError>;
    fn load_book(&self, name: &str) -> Result<Book, CoreError>;
    fn list_books(&self) -> Result<Vec<String>, CoreError>;
    fn delete_book(&self, name: &str) -> Result<(), CoreError>;
    fn backup_book(
        &self,
        name: &str,
        book: &Book,
        note: Option<&str>,
    ) -> Result<BookBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<BookBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &BookBackupInfo) -> Result<Book, CoreError>;
}

/// Detects dangling references and other anomalies within a book snapshot.
pub fn book_warnings(book: &Book) -> Vec<String> {
    let mut warnings = Vec::new();

    for sale in &book.sales {
        if book.stock_item(sale.item_id).is_none() {
            warnings.push(format!(
                "sale {} references missing stock item {}",
                sale.id, sale.item_id
            ));
        }
    }
    for item in &book.stock {
        if item.quantity < 0 {
            warnings.push(format!(
                "stock item {} (`{}`) has negative quantity {}",
                item.id, item.name, item.quantity
            ));
        }
    }
    warnings
}

/// In-process backend used by unit tests and callers that do not need
/// durable files.
#[derive(Default)]
pub struct MemoryBookStorage {
    books: Mutex<HashMap<String, Book>>,
    backups: Mutex<HashMap<(String, String), Book>>,
}

impl MemoryBookStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStorage for MemoryBookStorage {
    fn save_book(&self, name: &str, book: &Book) -> Result<(), CoreError> {
        let mut books = self.books.lock().expect("storage mutex poisoned");
        books.insert(name.to_string(), book.clone());
        Ok(())
    }

    fn load_book(&self, name: &str) -> Result<Book, CoreError> {
        let books = self.books.lock().expect("storage mutex poisoned");
        books
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::BookNotFound(name.to_string()))
    }

    fn list_books(&self) -> Result<Vec<String>, CoreError> {
        let books = self.books.lock().expect("storage mutex poisoned");
        let mut names: Vec<String> = books.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn delete_book(&self, name: &str) -> Result<(), CoreError> {
        let mut books = self.books.lock().expect("storage mutex poisoned");
        books.remove(name);
        Ok(())
    }

    fn backup_book(
        &self,
        name: &str,
        book: &Book,
        note: Option<&str>,
    ) -> Result<BookBackupInfo, CoreError> {
        let created_at = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
        let mut id = format!("{name}_{created_at}");
        if let Some(label) = note {
            id.push('_');
            id.push_str(label);
        }
        let mut backups = self.backups.lock().expect("storage mutex poisoned");
        backups.insert((name.to_string(), id.clone()), book.clone());
        Ok(BookBackupInfo {
            book: name.to_string(),
            id,
            created_at,
            path: PathBuf::new(),
        })
    }

    fn list_backups(&self, name: &str) -> Result<Vec<BookBackupInfo>, CoreError> {
        let backups = self.backups.lock().expect("storage mutex poisoned");
        let mut entries: Vec<BookBackupInfo> = backups
            .keys()
            .filter(|(book, _)| book == name)
            .map(|(book, id)| BookBackupInfo {
                book: book.clone(),
                id: id.clone(),
                created_at: String::new(),
                path: PathBuf::new(),
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &BookBackupInfo) -> Result<Book, CoreError> {
        let backups = self.backups.lock().expect("storage mutex poisoned");
        backups
            .get(&(backup.book.clone(), backup.id.clone()))
            .cloned()
            .ok_or_else(|| CoreError::BookNotFound(backup.id.clone()))
    }
}
