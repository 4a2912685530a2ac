//! Lazy, read-only views over nested documents that record the path to
//! every value they hand out.
//!
//! This crate re-exports [`pathtrace_core`]; see its documentation for the
//! full API. Document models are selected with the `json` (default) and
//! `toml` features.

pub use pathtrace_core::*;
