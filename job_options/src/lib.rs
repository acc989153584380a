//! Layered, tri-state job option resolution.
//!
//! Queue workers configure jobs at several scopes: built-in defaults, a
//! global table, per-queue tables and options carried by the job itself.
//! Each scope only sets the options it cares about, and an explicit `false`
//! or `0` must stay distinct from "not set here, inherit from the parent".
//!
//! [`JobOptions`] stores every option as an [`Option`], [`merge`] layers a
//! child record over its parent without touching either, and the accessor
//! methods on [`JobOptions`] turn the effective record into concrete values.
//!
//! ```rust
//! use job_options::{JobOptions, merge};
//!
//! let global = JobOptions::new().with_timeout(60).with_kill_on_delay(true);
//! let queue = JobOptions::new().with_timeout(120);
//! let job = JobOptions::new().with_kill_on_delay(false);
//!
//! let effective = merge(&job, &merge(&queue, &global));
//! assert_eq!(effective.timeout(), 120);
//! assert!(!effective.kill_on_delay());
//! ```

mod error;
pub mod field;
pub mod file;
mod options;
mod result_ext;
pub mod scope;

pub use error::OptionsError;
pub use file::{OptionsDocument, QueueOptions, load_options_document, load_options_file};
pub use options::{
    DEFAULT_LOG_EXPIRE_AFTER, DEFAULT_MAX_TRIES, DEFAULT_TIMEOUT, FALLBACK_MAX_TRIES,
    FALLBACK_TIMEOUT, JobOptions, Merge, OptionKey, OptionValue, Outcome, merge, merge_chain,
};
pub use result_ext::OptionsResultExt;
pub use scope::{Resolution, Scope, ScopeComposer, ScopeLayer};

/// Convenient alias for results returned by the loading layer.
///
/// Errors are wrapped in an [`std::sync::Arc`] so they can be cloned and
/// shared between callers that report the same failure.
pub type OptionsResult<T> = std::result::Result<T, std::sync::Arc<OptionsError>>;
