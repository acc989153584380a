//! Error constructors shared by file loading helpers.

use crate::OptionsError;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Construct an [`OptionsError::File`] for an options path.
pub(super) fn file_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<OptionsError> {
    Arc::new(OptionsError::file(path, err))
}
