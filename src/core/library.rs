use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Nothing left to take from a queue or history; not a failure of the caller.
    Empty {
        message: String,
    },
    IoFailure {
        message: String,
        reason_code: Option<String>,
    },
    // A malformed catalog line; the line is dropped and loading continues.
    ParseSkip {
        message: String,
        line: usize,
    },
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn empty(message: &str) -> LibraryError {
        LibraryError::Empty { message: message.to_string() }
    }

    pub fn io_failure(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::IoFailure { message: message.to_string(), reason_code }
    }

    pub fn parse_skip(message: &str, line: usize) -> LibraryError {
        LibraryError::ParseSkip { message: message.to_string(), line }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn lock_poisoned(name: &str) -> LibraryError {
        LibraryError::runtime(format!("{} lock poisoned", name).as_str(), Some("poisoned".to_string()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LibraryError::Empty { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io_failure(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Empty { message } => {
                write!(f, "{}", message)
            }
            LibraryError::IoFailure { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::ParseSkip { message, line } => {
                write!(f, "line {}: {}", line, message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum RequestKind {
    Borrow,
    Return,
}

impl From<String> for RequestKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Return" => RequestKind::Return,
            _ => RequestKind::Borrow,
        }
    }
}

impl Display for RequestKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RequestKind::Borrow => write!(f, "Borrow"),
            RequestKind::Return => write!(f, "Return"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum ActionKind {
    Borrowed,
    Returned,
}

impl From<RequestKind> for ActionKind {
    fn from(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Borrow => ActionKind::Borrowed,
            RequestKind::Return => ActionKind::Returned,
        }
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Returned" => ActionKind::Returned,
            _ => ActionKind::Borrowed,
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ActionKind::Borrowed => write!(f, "Borrowed"),
            ActionKind::Returned => write!(f, "Returned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ActionKind, LibraryError, RequestKind};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
        assert!(LibraryError::not_found("test").is_not_found());
    }

    #[tokio::test]
    async fn test_should_create_empty_error() {
        assert!(matches!(LibraryError::empty("test"), LibraryError::Empty{ message: _ }));
        assert!(LibraryError::empty("test").is_empty());
        assert!(!LibraryError::not_found("test").is_empty());
    }

    #[tokio::test]
    async fn test_should_create_io_failure_error() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, LibraryError::IoFailure{ message: _, reason_code: Some(_) }));
    }

    #[tokio::test]
    async fn test_should_format_parse_skip_error() {
        let err = LibraryError::parse_skip("stock is not a number", 7);
        assert_eq!("line 7: stock is not a number", err.to_string());
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        assert!(matches!(LibraryError::lock_poisoned("books"), LibraryError::Runtime{ message: _, reason_code: Some(_) }));
    }

    #[tokio::test]
    async fn test_should_format_kinds() {
        for kind in vec![RequestKind::Borrow, RequestKind::Return] {
            assert_eq!(kind, RequestKind::from(kind.to_string()));
        }
        for kind in vec![ActionKind::Borrowed, ActionKind::Returned] {
            assert_eq!(kind, ActionKind::from(kind.to_string()));
        }
        assert_eq!(ActionKind::Borrowed, ActionKind::from(RequestKind::Borrow));
        assert_eq!(ActionKind::Returned, ActionKind::from(RequestKind::Return));
    }
}
