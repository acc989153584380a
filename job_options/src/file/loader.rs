//! Runtime loading entrypoints for options files.

use camino::Utf8PathBuf;
use std::path::Path;

use crate::{JobOptions, OptionValue, OptionsError, OptionsResult};

use super::document::OptionsDocument;
use super::error::file_error;
use super::parser::parse_by_format;

/// Convert a path to a UTF-8 path, falling back to lossy conversion.
fn to_utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

fn read_figment(path: &Path) -> OptionsResult<Option<figment::Figment>> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "job options file not found");
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    parse_by_format(path, &data).map(Some)
}

/// Log options that are set but will be ignored by the accessors.
fn warn_ignored(options: &JobOptions, context: &str) {
    for key in options.set_keys() {
        if let Some(OptionValue::Integer(value)) = options.explicit(key)
            && value <= 0
        {
            tracing::warn!(
                key = %key,
                value,
                context,
                "non-positive job option falls back to its default"
            );
        }
    }
}

/// Load a single option record from a file.
///
/// The file holds the option keys at its top level, for example a job's
/// options stored next to it. Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use job_options::load_options_file;
/// use std::path::Path;
///
/// # fn run() -> job_options::OptionsResult<()> {
/// if let Some(opts) = load_options_file(Path::new("job.toml"))? {
///     println!("timeout: {}s", opts.timeout());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an [`OptionsError`] if reading or parsing the file fails, or if
/// it contains unknown keys or wrongly typed values.
pub fn load_options_file(path: &Path) -> OptionsResult<Option<JobOptions>> {
    let Some(figment) = read_figment(path)? else {
        return Ok(None);
    };
    let options: JobOptions = figment
        .extract()
        .map_err(|e| std::sync::Arc::new(OptionsError::parse(e)))?;
    let shown = path.display().to_string();
    warn_ignored(&options, &shown);
    tracing::debug!(path = %shown, options = ?options, "loaded job options file");
    Ok(Some(options))
}

/// Load an [`OptionsDocument`] with global and per-queue options.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use job_options::{JobOptions, load_options_document};
/// use std::path::Path;
///
/// # fn run() -> job_options::OptionsResult<()> {
/// if let Some(doc) = load_options_document(Path::new("jobs.toml"))? {
///     let effective = doc.effective_options("email", &JobOptions::new());
///     println!("max tries: {}", effective.max_tries());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an [`OptionsError`] if reading or parsing the file fails, or if
/// an options table contains unknown keys or wrongly typed values.
pub fn load_options_document(path: &Path) -> OptionsResult<Option<OptionsDocument>> {
    let Some(figment) = read_figment(path)? else {
        return Ok(None);
    };
    let document = OptionsDocument::extract(&figment)?.with_path(to_utf8_path(path));
    warn_ignored(&document.job_options, "global");
    for (name, section) in &document.queues {
        warn_ignored(&section.job_options, name);
    }
    tracing::debug!(
        path = %path.display(),
        queues = document.queues.len(),
        "loaded job options document"
    );
    Ok(Some(document))
}
