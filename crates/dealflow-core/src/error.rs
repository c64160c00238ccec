//! # Error Types — Parsing-Boundary Errors
//!
//! Defines the error taxonomy for the deal lifecycle workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! The lifecycle engine itself is total — resolution never fails. Errors
//! exist only where external text enters the system: timestamp strings,
//! status tokens, and CLI input files.

use thiserror::Error;

/// Top-level error type for the deal lifecycle workspace.
#[derive(Error, Debug)]
pub enum DealflowError {
    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A status token did not match any known deal or escrow status.
    #[error("unknown status token: {0:?}")]
    UnknownStatus(String),

    /// A stage token did not match any canonical stage name.
    #[error("unknown stage token: {0:?}")]
    UnknownStage(String),

    /// A category token did not match any list-view category.
    #[error("unknown category token: {0:?}")]
    UnknownCategory(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
