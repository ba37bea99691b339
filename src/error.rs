//! Error types for vCard export and import.
//!
//! Errors are classified by where they surface:
//! - Export-side: missing/unreadable person records, filesystem write failures
//! - Import-side: wrong file type, unparsable files
//!
//! Every variant carries a `user_message()` suitable for direct display;
//! the raw `Display` form is for logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unsupported file type: {path}")]
    WrongExtension { path: String },

    #[error("No vCard found in file")]
    NotAVcard,

    #[error("Person record not found: {0}")]
    MissingPerson(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

impl CardError {
    /// Get a user-facing message for this error.
    ///
    /// Import-side messages match what the application shows in its
    /// upload dialog; export-side messages point at the record or config
    /// that needs fixing.
    pub fn user_message(&self) -> String {
        match self {
            CardError::Io(e) => format!("File operation failed: {}", e),
            CardError::WrongExtension { path } => format!(
                "{} is not a vCard file. Please choose a .vcf or .vcard file.",
                path
            ),
            CardError::NotAVcard => {
                "The file does not contain a vCard (no BEGIN:VCARD block found).".to_string()
            }
            CardError::MissingPerson(p) => format!("Could not load the person record: {}", p),
            CardError::ConfigError(e) => {
                format!("{} Check your configuration in ~/.rolo/config.json", e)
            }
            CardError::SerializeError(e) => format!("Could not write output: {}", e),
        }
    }
}

impl From<std::io::Error> for CardError {
    fn from(err: std::io::Error) -> Self {
        CardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::SerializeError(err.to_string())
    }
}
