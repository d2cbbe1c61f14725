//! Errors raised while resolving type names and assembling descriptors.

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// The category an `Error` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidType,
    Configuration,
    InternalArity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A type name cannot denote the category it was requested as, e.g. a class name in a
    /// primitive position, or an array type where an object type is required.
    InvalidType(String),
    /// A builder was finalized or refined before a required input was supplied.
    Configuration(&'static str),
    /// A descriptor template was substituted with the wrong number of values. This is a bug in
    /// the renderer and is only ever raised as a panic.
    InternalArity { expected: usize, actual: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::InvalidType(_) => ErrorKind::InvalidType,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::InternalArity { .. } => ErrorKind::InternalArity,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidType(ref message) => f.write_str(message),
            Error::Configuration(message) => f.write_str(message),
            Error::InternalArity { expected, actual } =>
                write!(f, "descriptor template expects {} placeholder(s), got {}",
                       expected, actual),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Error::InvalidType(String::from("x")).kind(), ErrorKind::InvalidType);
        assert_eq!(Error::Configuration("no base type configured").kind(),
                   ErrorKind::Configuration);
        assert_eq!(Error::InternalArity { expected: 1, actual: 0 }.kind(),
                   ErrorKind::InternalArity);
    }

    #[test]
    fn test_display() {
        let err = Error::InternalArity { expected: 1, actual: 2 };
        assert_eq!(err.to_string(), "descriptor template expects 1 placeholder(s), got 2");
        assert_eq!(Error::Configuration("no base type configured").to_string(),
                   "no base type configured");
    }
}
