//! Layer metadata for scope composition.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::JobOptions;

/// The configuration level a layer comes from, least specific first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Scope {
    /// Values compiled into the crate.
    Builtin,
    /// System-wide options.
    Global,
    /// Options for every job on one queue.
    Queue,
    /// Options carried by a single job.
    Job,
}

impl Scope {
    /// Lowercase name used in logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Global => "global",
            Self::Queue => "queue",
            Self::Job => "job",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option record tagged with the scope it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeLayer {
    scope: Scope,
    options: JobOptions,
    label: Option<String>,
    path: Option<Utf8PathBuf>,
}

impl ScopeLayer {
    /// Construct a layer for `scope`.
    #[must_use]
    pub const fn new(scope: Scope, options: JobOptions) -> Self {
        Self {
            scope,
            options,
            label: None,
            path: None,
        }
    }

    /// Construct the built-in defaults layer.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(Scope::Builtin, JobOptions::builtin())
    }

    /// Construct a global layer.
    #[must_use]
    pub const fn global(options: JobOptions) -> Self {
        Self::new(Scope::Global, options)
    }

    /// Construct a layer for the queue called `name`.
    #[must_use]
    pub fn queue(name: impl Into<String>, options: JobOptions) -> Self {
        Self::new(Scope::Queue, options).with_label(name)
    }

    /// Construct a job layer.
    #[must_use]
    pub const fn job(options: JobOptions) -> Self {
        Self::new(Scope::Job, options)
    }

    /// Attach a label such as a queue name or job id.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Record the file this layer was read from.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns the scope of the layer.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the options set by the layer.
    #[must_use]
    pub const fn options(&self) -> &JobOptions {
        &self.options
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the source path if this layer was read from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }
}
