// This module defines error types for vecir using the thiserror crate for idiomatic Rust
// error handling. IrError covers the ways building the reference graph can go wrong:
// unsupported integer widths, constants whose payload does not fit their type, aggregates
// whose elements disagree with the aggregate type, and references that do not name a node
// or type of the graph. NonConstantIndex is the failure of the index-chain converter and
// records how far the conversion got. IrResult<T> is a convenience alias for
// Result<T, IrError>. The analyses themselves never fail; they degrade through the
// diagnostic sink instead.

//! Error types for vecir.

use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::ir::Graph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrError {
    #[error("Unsupported {width}-bit integer type")]
    UnsupportedWidth {
        width: u32,
    },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Aggregate mismatch: {reason}")]
    AggregateMismatch {
        reason: String,
    },

    #[error("Invalid value: {reason}")]
    InvalidValue {
        reason: String,
    },

    #[error("Invalid type reference #{index}")]
    InvalidType {
        index: u32,
    },
}

/// Result type alias for graph construction.
pub type IrResult<T> = Result<T, IrError>;

/// An access chain contained an index that is not a constant integer.
///
/// `position` is the index of the offending element, which is also the
/// number of output entries written before the walk stopped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {position} of the access chain is not a constant integer")]
pub struct NonConstantIndex {
    pub position: usize,
}
