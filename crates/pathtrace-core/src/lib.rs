//! Core types and traits for path-tracking document views
//!
//! This crate lets code walk a nested, read-only document (objects, arrays
//! and scalars) while recording the keys and indices it passes through. At
//! any point the walk can be ended with a single call that returns a value
//! together with its full address, ready to be matched against the field
//! paths reported by schema validators.
//!
//! # Features
//!
//! - **Lazy**: only the nodes a caller actually visits are ever wrapped
//! - **Read-only**: views borrow the document and never copy or mutate it
//! - **Validator-compatible paths**: array positions are recorded as numeric
//!   indices, object keys as strings, decided by the container being read
//! - **Pluggable documents**: any tree implementing [`Composite`] can be tracked
//!
//! # Usage
//!
//! JSON documents (`serde_json::Value`) are supported by default:
//! ```toml
//! [dependencies]
//! pathtrace-core = "0.1"
//! ```
//!
//! TOML documents (`toml::Value`) need the `toml` feature:
//! ```toml
//! [dependencies]
//! pathtrace-core = { version = "0.1", features = ["toml"] }
//! ```

// Module declarations
pub mod error;
pub mod path;
pub mod segment;
pub mod traits;
pub mod view;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "toml")]
mod toml;

// Re-export all public types and traits for convenience
pub use error::{PathError, Result};
pub use path::ValuePath;
pub use segment::{AccessKey, PathSegment};
pub use traits::{Composite, Shape};
pub use view::{resolve, wrap, Navigated, Resolved, TrackedView};
