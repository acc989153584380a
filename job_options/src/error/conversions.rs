//! Trait-based conversions between external error types and `OptionsError`.

use figment::Error as FigmentError;

use super::OptionsError;

/// Convert JSON decoding failures into [`OptionsError::Json`].
impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl From<FigmentError> for OptionsError {
    fn from(e: FigmentError) -> Self {
        Self::parse(e)
    }
}
