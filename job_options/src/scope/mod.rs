//! Scope layers and their composition into an effective record.
//!
//! A [`ScopeComposer`] collects one [`ScopeLayer`] per configured scope,
//! least specific first, and [`ScopeComposer::resolve`] folds them with the
//! fill-only merge. The resulting [`Resolution`] also records which scope
//! supplied each option, which helps explain why a job ran with a given
//! timeout or why its log was dropped.
//!
//! ```rust
//! use job_options::{JobOptions, OptionKey, Scope, ScopeComposer};
//!
//! let mut composer = ScopeComposer::new();
//! composer.push_builtin();
//! composer.push_global(JobOptions::new().with_timeout(60));
//! composer.push_queue("email", JobOptions::new().with_timeout(120));
//! composer.push_job(JobOptions::new());
//!
//! let resolution = composer.resolve();
//! assert_eq!(resolution.options().timeout(), 120);
//! assert_eq!(resolution.provenance(OptionKey::Timeout), Some(Scope::Queue));
//! assert_eq!(resolution.provenance(OptionKey::MaxTries), Some(Scope::Builtin));
//! ```

mod composer;
mod layer;

pub use composer::{Resolution, ScopeComposer};
pub use layer::{Scope, ScopeLayer};
