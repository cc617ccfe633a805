use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(
        "API Key not found. Please set OPENROUTER_API_KEY in the environment, .streamlit/secrets.toml, or the config file."
    )]
    MissingApiKey,

    #[error("Invalid duration \"{input}\" (expected one of: 4, 6, 8, 12, 14 weeks)")]
    InvalidDuration { input: String },

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("No syllabus has been generated in this session yet.")]
    NoResult,

    #[error("Failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with the submitted form, caught before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    #[error("Please select or enter a subject before generating the syllabus.")]
    EmptySubject,

    #[error("There is no catalog subject #{index}. Run `syllabus-gen options` to list them.")]
    UnknownCatalogEntry { index: usize },
}

/// Failure modes of a single completion request
#[derive(Debug, Error)]
pub(crate) enum CompletionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed with status code: {code}{}", detail_suffix(.detail))]
    Status { code: u16, detail: Option<String> },

    #[error("{0}")]
    Payload(#[from] PayloadError),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl CompletionError {
    /// Stable classification used in JSON output
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CompletionError::Network(_) => "network",
            CompletionError::Status { .. } => "upstream",
            CompletionError::Payload(_) => "payload",
            CompletionError::Unknown(_) => "unknown",
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(message) => format!(" ({message})"),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PayloadError {
    #[error("No syllabus content received from the API")]
    NoChoices,

    #[error("No syllabus content received from the API")]
    EmptyContent,

    #[error("Unexpected API response format: {0}")]
    Malformed(String),
}
