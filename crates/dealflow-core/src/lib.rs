//! # dealflow-core — Foundational Types for the Deal Lifecycle Engine
//!
//! This crate is the leaf of the workspace DAG. It defines the primitives
//! every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `DealId` and `MessageId`
//!    are distinct types with no implicit conversion. A Telegram message
//!    identifier cannot be passed where a deal identifier is expected.
//!
//! 2. **UTC-only timestamps.** `Timestamp` accepts any RFC 3339 offset on
//!    ingest (backend snapshots arrive from heterogeneous sources) but is
//!    always UTC with seconds precision internally, and always renders with
//!    the `Z` suffix. Two views of the same instant compare equal.
//!
//! 3. **Errors only at the parsing boundary.** The lifecycle engine itself
//!    is total; `DealflowError` exists for the surfaces that parse external
//!    text (timestamps, status tokens, CLI input).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dealflow-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::DealflowError;
pub use identity::{DealId, MessageId};
pub use temporal::Timestamp;
