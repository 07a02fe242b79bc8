use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    NotFound(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "student not found: {}", id),
            StoreError::LockPoisoned(operation) => {
                write!(f, "student store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 404,
            StoreError::LockPoisoned(_) => 500,
        }
    }
}
