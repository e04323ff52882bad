use thiserror::Error;

/// Raised when a record field is given a value that breaks its rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
}

/// Why `LinkedList::remove` came back empty handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[error("the list is empty")]
    Empty,

    #[error("no element matches the key")]
    NotFound,
}

/// Crate level error, what `main` ends up logging.
#[derive(Debug, Error)]
pub enum Error {
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Record(#[from] RecordError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
