//! Extensions for mapping errors to `OptionsResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `OptionsResult<T>` alias (`Result<T, Arc<OptionsError>>`).
//!
//! # Examples
//!
//! ```
//! use job_options::{OptionsResult, OptionsResultExt};
//!
//! fn decode(raw: &str) -> OptionsResult<serde_json::Value> {
//!     serde_json::from_str(raw).into_options()
//! }
//!
//! assert!(decode("{}").is_ok());
//! assert!(decode("{").is_err());
//! ```

use crate::{OptionsError, OptionsResult};
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<OptionsError>` into an `OptionsResult<T>`.
pub trait OptionsResultExt<T, E> {
    /// Convert `Result<T, E>` into `OptionsResult<T>` using `Into<OptionsError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<OptionsError>`.
    fn into_options(self) -> OptionsResult<T>;
}

impl<T, E> OptionsResultExt<T, E> for Result<T, E>
where
    E: Into<OptionsError>,
{
    fn into_options(self) -> OptionsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
