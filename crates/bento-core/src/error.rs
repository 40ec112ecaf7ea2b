//! Error types for Bento Popup

use thiserror::Error;

/// Error type for the fallible plumbing around the popup core.
///
/// The card-level operations (load, save, filter) never surface these; they
/// only come out of opening a store, scanning an asset directory or parsing
/// a manifest.
#[derive(Error, Debug)]
pub enum PopupError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Asset directory path exists but is not a directory
    #[error("Not an asset directory: {0}")]
    NotADirectory(String),

    /// Manifest could not be parsed
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PopupError
pub type PopupResult<T> = Result<T, PopupError>;
