//! Error types for codec operations

use std::fmt;

/// Errors that can occur while parsing weft markup.
///
/// Every variant aborts the enclosing parse: no partial tree is ever
/// returned. Failures raised inside re-entrant argument parsing propagate
/// unchanged, so messages always point at the innermost location.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A required positional argument was absent
    MissingArgument { tag: String, reason: String },
    /// Invocation used a name not present in the registry
    UnknownTag(String),
    /// A tag that takes no arguments received one
    UnexpectedArgument { tag: String },
    /// A close tag matched no open tag
    UnexpectedCloseTag(String),
    /// An open tag was never closed (strict mode only)
    UnclosedTag(String),
    /// Nesting exceeded the configured depth limit
    DepthExceeded { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingArgument { tag, reason } => {
                write!(f, "Tag '<{tag}>': {reason}")
            }
            ParseError::UnknownTag(name) => write!(f, "Tag '<{name}>' is not registered"),
            ParseError::UnexpectedArgument { tag } => {
                write!(f, "Tag '<{tag}>' does not take arguments")
            }
            ParseError::UnexpectedCloseTag(name) => {
                write!(f, "Close tag '</{name}>' matches no open tag")
            }
            ParseError::UnclosedTag(name) => write!(f, "Tag '<{name}>' was never closed"),
            ParseError::DepthExceeded { limit } => {
                write!(f, "Markup nesting exceeds the depth limit of {limit}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
