use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// Coordinates fall outside the 80x25 grid.
    OutOfBounds { column: usize, row: usize },
    /// Null or malformed byte sequence reference.
    InvalidInput,
}

impl ConsoleError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "Position out of bounds",
            Self::InvalidInput => "Invalid input",
        }
    }

    /// Out-of-bounds coordinates mean the caller computed a bad position.
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { column, row } => {
                write!(f, "{} (column {}, row {})", self.as_str(), column, row)
            }
            Self::InvalidInput => write!(f, "{}", self.as_str()),
        }
    }
}

pub type Result<T> = core::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConsoleError::OutOfBounds { column: 80, row: 3 };
        assert_eq!(err.to_string(), "Position out of bounds (column 80, row 3)");
        assert_eq!(ConsoleError::InvalidInput.to_string(), "Invalid input");
    }

    #[test]
    fn test_caller_bug() {
        assert!(!ConsoleError::InvalidInput.is_caller_bug());
        assert!(ConsoleError::OutOfBounds { column: 0, row: 25 }.is_caller_bug());
    }
}
