//! Shared traits and identifier aliases for book records.

/// Record identifier. Ids are allocated sequentially by the [`crate::Book`]
/// that owns the record; `0` marks a draft that has not been inserted yet.
pub type RecordId = u64;

/// Exposes a stable identifier for records stored in the book.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides read-only access to a record's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}
