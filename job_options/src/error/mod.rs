//! Error types produced by the option loading layer.
//!
//! Merging and the accessors are total; only reading serialised records can
//! fail.

mod conversions;
mod types;

pub use types::OptionsError;
