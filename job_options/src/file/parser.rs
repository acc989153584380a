//! Format-specific parsing utilities for options files.

use crate::OptionsResult;

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use std::path::Path;

use super::error::file_error;

/// Parse options data according to the file extension.
///
/// Syntax is validated up front so parse failures carry the file path
/// before Figment performs its own pass over the text.
///
/// # Errors
///
/// Returns an [`crate::OptionsError::File`] if the contents are not valid
/// JSON or TOML.
pub(super) fn parse_by_format(path: &Path, data: &str) -> OptionsResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = if ext.as_deref() == Some("json") {
        serde_json::from_str::<serde_json::Value>(data).map_err(|e| file_error(path, e))?;
        Figment::from(Json::string(data))
    } else {
        toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
        Figment::from(Toml::string(data))
    };
    Ok(figment)
}
