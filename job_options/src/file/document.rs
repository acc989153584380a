//! Options documents holding global and per-queue records.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Format, Json, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{JobOptions, OptionsError, OptionsResult, Resolution, ScopeComposer, ScopeLayer};

/// Per-queue section of an [`OptionsDocument`].
///
/// Other queue settings (worker counts and the like) may live next to
/// `job_options` in the same table; they are ignored here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueOptions {
    /// Options applied to every job on the queue.
    #[serde(default, skip_serializing_if = "JobOptions::is_empty")]
    pub job_options: JobOptions,
}

/// A configuration document with global options and per-queue overrides.
///
/// ```toml
/// [job_options]
/// timeout = 600
///
/// [queues.email.job_options]
/// maxtries = 3
/// noredislogonsuccess = true
/// ```
///
/// Keys other than `job_options` and `queues` are ignored so the document
/// can share a file with unrelated settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsDocument {
    /// Options applied to every job.
    #[serde(default, skip_serializing_if = "JobOptions::is_empty")]
    pub job_options: JobOptions,
    /// Queue sections keyed by queue name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub queues: BTreeMap<String, QueueOptions>,
    #[serde(skip)]
    path: Option<Utf8PathBuf>,
}

impl OptionsDocument {
    /// Parse a document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError::Parse`] when the text is not valid TOML or
    /// an option has the wrong type or an unknown key.
    pub fn from_toml_str(raw: &str) -> OptionsResult<Self> {
        Self::extract(&Figment::from(Toml::string(raw)))
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError::Parse`] when the text is not valid JSON or
    /// an option has the wrong type or an unknown key.
    pub fn from_json_str(raw: &str) -> OptionsResult<Self> {
        Self::extract(&Figment::from(Json::string(raw)))
    }

    pub(super) fn extract(figment: &Figment) -> OptionsResult<Self> {
        figment
            .extract()
            .map_err(|e| std::sync::Arc::new(OptionsError::parse(e)))
    }

    pub(super) fn with_path(mut self, path: Utf8PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// The file this document was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Options configured for `queue`, if the document has a section for it.
    #[must_use]
    pub fn queue(&self, queue: &str) -> Option<&JobOptions> {
        self.queues.get(queue).map(|section| &section.job_options)
    }

    /// Build the scope layers for jobs on `queue`: built-in defaults, the
    /// global options and, when the queue has a section, its options.
    #[must_use]
    pub fn composer(&self, queue: &str) -> ScopeComposer {
        let mut composer = ScopeComposer::with_capacity(4);
        composer.push_builtin();
        composer.push_layer(self.tag(ScopeLayer::global(self.job_options)));
        if let Some(options) = self.queue(queue) {
            composer.push_layer(self.tag(ScopeLayer::queue(queue, *options)));
        } else {
            tracing::debug!(queue, "no job options section for queue");
        }
        composer
    }

    /// Resolve the options for a job on `queue` carrying `job` options.
    #[must_use]
    pub fn resolve(&self, queue: &str, job: &JobOptions) -> Resolution {
        let mut composer = self.composer(queue);
        composer.push_job(*job);
        composer.resolve()
    }

    /// Shorthand for the effective record of [`OptionsDocument::resolve`].
    #[must_use]
    pub fn effective_options(&self, queue: &str, job: &JobOptions) -> JobOptions {
        self.resolve(queue, job).into_options()
    }

    fn tag(&self, layer: ScopeLayer) -> ScopeLayer {
        match &self.path {
            Some(path) => layer.with_path(path.clone()),
            None => layer,
        }
    }
}
