//! Error types for presence operations.

/// Raised when a value that was required to be present turned out absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbsentValueError {
    /// A single value was absent.
    #[error("absent value passed")]
    Absent,

    /// None of the candidates handed to `resolve` was present.
    #[error("provided argument list doesn't have any non-absent values ({examined} examined)")]
    Unresolved { examined: usize },
}

impl AbsentValueError {
    /// Number of candidates inspected before giving up, if this error came
    /// from resolving a list.
    pub fn examined(&self) -> Option<usize> {
        match self {
            Self::Absent => None,
            Self::Unresolved { examined } => Some(*examined),
        }
    }
}
