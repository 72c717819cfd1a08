//! Error types for seatplan

use thiserror::Error;

/// Input rejected before any computation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No attending guests to seat")]
    NoAttendingGuests,

    #[error("Seating chart has no tables")]
    NoTables,

    #[error("Table {table_id} has zero capacity")]
    ZeroCapacity { table_id: String },

    #[error("Guest {guest_id} appears more than once")]
    DuplicateGuest { guest_id: String },

    #[error("Table {table_id} appears more than once")]
    DuplicateTable { table_id: String },
}

/// Failure raised by the collaborator that loads guests and tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The caller does not own the requested wedding plan.
    #[error("Not authorized for wedding plan {0}")]
    Unauthorized(String),

    #[error("Seating chart {0} not found")]
    ChartNotFound(String),
}

/// The store operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Begin,
    Delete,
    Insert,
    Commit,
    Load,
}

impl std::fmt::Display for StoreOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreOp::Begin => "begin",
            StoreOp::Delete => "delete",
            StoreOp::Insert => "insert",
            StoreOp::Commit => "commit",
            StoreOp::Load => "load",
        };
        f.write_str(name)
    }
}

/// Failure raised by the assignment store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Store {op} failed: {message}")]
pub struct StoreError {
    pub op: StoreOp,
    pub message: String,
}

impl StoreError {
    pub fn new(op: StoreOp, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

/// Main error type for seatplan operations
#[derive(Debug, Error)]
pub enum SeatPlanError {
    /// Input failed validation; nothing was computed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Guests or tables could not be loaded
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Apply-mode persistence failed; no partial replace was committed
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),
}

/// Result type alias for seatplan operations
pub type Result<T> = std::result::Result<T, SeatPlanError>;
