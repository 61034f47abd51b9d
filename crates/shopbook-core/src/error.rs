use std::io;

use shopbook_domain::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Stock item not found: {0}")]
    ItemNotFound(RecordId),
    #[error("Sale not found: {0}")]
    SaleNotFound(RecordId),
    #[error("Finance entry not found: {0}")]
    EntryNotFound(RecordId),
    #[error("Employee not found: {0}")]
    EmployeeNotFound(RecordId),
    #[error("Book not found: {0}")]
    BookNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<io::Error> for CoreError {
    fn from(err: io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
