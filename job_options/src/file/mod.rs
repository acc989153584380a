//! Reading option records and options documents from disk.
//!
//! The core never performs I/O; these helpers sit at the serialisation
//! boundary and reject malformed input instead of letting it turn into
//! silently unset or zeroed options. TOML is the default format; files with a
//! `.json` extension are read as JSON.

mod document;
mod error;
mod loader;
mod parser;

pub use document::{OptionsDocument, QueueOptions};
pub use loader::{load_options_document, load_options_file};

#[cfg(test)]
mod tests;
