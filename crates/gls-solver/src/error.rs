//! Invariant violations raised by the type algebra.
//!
//! These are programmer errors: well-formed calculators never trigger them.
//! Expected inference failures are represented as data
//! (`SemanticType::Unknown` / `SemanticType::Dynamic`), never as errors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    /// An operation was called with arguments that break its contract.
    InvalidArgument(&'static str),
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for TypeError {}
