//! Layer composition and resolution.

use std::collections::BTreeMap;

use crate::{JobOptions, Merge, OptionKey};

use super::{Scope, ScopeLayer};

/// Builder that accumulates [`ScopeLayer`] instances.
///
/// Layers are applied in push order, so push the least specific scope
/// first. Pushing the same scope twice is allowed; the later layer wins for
/// the options it sets.
#[derive(Clone, Debug, Default)]
pub struct ScopeComposer {
    layers: Vec<ScopeLayer>,
}

impl ScopeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push the built-in defaults layer.
    pub fn push_builtin(&mut self) {
        self.push_layer(ScopeLayer::builtin());
    }

    /// Push a global layer.
    pub fn push_global(&mut self, options: JobOptions) {
        self.push_layer(ScopeLayer::global(options));
    }

    /// Push a layer for the queue called `name`.
    pub fn push_queue(&mut self, name: impl Into<String>, options: JobOptions) {
        self.push_layer(ScopeLayer::queue(name, options));
    }

    /// Push a job layer.
    pub fn push_job(&mut self, options: JobOptions) {
        self.push_layer(ScopeLayer::job(options));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: ScopeLayer) {
        self.layers.push(layer);
    }

    /// Borrow the accumulated layers.
    #[must_use]
    pub fn layers(&self) -> &[ScopeLayer] {
        &self.layers
    }

    /// Merge the layers into an effective record.
    ///
    /// The layers themselves are left untouched, so the same composer can be
    /// resolved again or extended with a job layer later.
    #[must_use]
    pub fn resolve(&self) -> Resolution {
        let mut provenance = BTreeMap::new();
        let options = self
            .layers
            .iter()
            .fold(JobOptions::new(), |parent, layer| {
                for key in layer.options().set_keys() {
                    provenance.insert(key, layer.scope());
                }
                tracing::debug!(
                    scope = %layer.scope(),
                    label = ?layer.label(),
                    path = ?layer.path(),
                    options = ?layer.options(),
                    "applying job option layer"
                );
                layer.options().merged_over(&parent)
            });
        Resolution {
            options,
            provenance,
        }
    }
}

impl IntoIterator for ScopeComposer {
    type Item = ScopeLayer;
    type IntoIter = std::vec::IntoIter<ScopeLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl Extend<ScopeLayer> for ScopeComposer {
    fn extend<T: IntoIterator<Item = ScopeLayer>>(&mut self, iter: T) {
        self.layers.extend(iter);
    }
}

/// Effective options together with the scope that supplied each one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    options: JobOptions,
    provenance: BTreeMap<OptionKey, Scope>,
}

impl Resolution {
    /// The effective record.
    #[must_use]
    pub const fn options(&self) -> &JobOptions {
        &self.options
    }

    /// Consume the resolution, keeping only the effective record.
    #[must_use]
    pub fn into_options(self) -> JobOptions {
        self.options
    }

    /// The most specific scope that set `key`, or `None` when no layer did.
    #[must_use]
    pub fn provenance(&self, key: OptionKey) -> Option<Scope> {
        self.provenance.get(&key).copied()
    }

    /// Every set option with its supplying scope, in key order.
    pub fn sources(&self) -> impl Iterator<Item = (OptionKey, Scope)> + '_ {
        self.provenance.iter().map(|(key, scope)| (*key, *scope))
    }
}
