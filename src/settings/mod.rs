//! Settings file management module.
//!
//! Handles JSON settings file loading, validation and persistence.

mod diagnostics;
mod error;
mod store;
mod types;
mod validation;

pub use types::Config;

pub use store::SettingsStore;

// Allow unused for potential library API usage
#[allow(unused_imports)]
pub use diagnostics::DiagnosticSink;
#[allow(unused_imports)]
pub use error::{ErrorKind, SettingsError};
