// src/error.rs
// Error taxonomy for the research relay

use thiserror::Error;

/// Environment variable the API key is read from, named in the
/// configuration error handed back to callers.
pub const API_KEY_ENV: &str = "GEMINI_KEY";

/// Request field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Operation,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operation => "Operation",
            Self::Content => "Content",
        }
    }
}

/// Main error type for the research relay
#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("{} cannot be null or empty", .0.as_str())]
    MissingField(Field),

    #[error("Unknown Operation: {0}")]
    UnknownOperation(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Non-2xx answer from the upstream API
    #[error("upstream returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Timeout or transport failure before a status was received
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Result using ResearchError
pub type Result<T> = std::result::Result<T, ResearchError>;

impl ResearchError {
    /// Render the error as the result string returned to callers in place
    /// of generated text.
    pub fn to_user_string(&self) -> String {
        match self {
            Self::MissingField(_) | Self::UnknownOperation(_) => format!("Error: {}", self),
            Self::Config(_) => format!(
                "Error: API key not configured. Please set {} environment variable.",
                API_KEY_ENV
            ),
            Self::Upstream { status, body } => {
                format!("Error calling Gemini API: {} - {}", status, body)
            }
            Self::Transport(e) if e.is_timeout() => {
                "Error calling Gemini API: request timed out".to_string()
            }
            Self::Transport(e) => format!("Error calling Gemini API: {}", e),
            Self::Parse(e) => format!("Error Parsing: {}", e),
        }
    }
}

impl From<ResearchError> for String {
    fn from(err: ResearchError) -> Self {
        err.to_user_string()
    }
}
