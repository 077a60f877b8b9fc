//! Ads Hub Processor Library
//!
//! A Rust library for normalizing advertising performance report exports
//! into typed campaign records ready for analysis.
//!
//! This library provides tools for:
//! - Parsing loosely structured CSV exports with heterogeneous delimiters,
//!   variable header position and mixed-locale numeric formatting
//! - Resolving semantic columns (name, spend, results, reach, impressions)
//!   from multilingual header keywords
//! - Filtering summary/total rows that platforms append to exports
//! - Extracting campaign records from PDF reports via the Gemini API
//! - Computing dashboard statistics and AI-generated executive summaries

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gemini;
        pub mod insights;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalysisSummary, Campaign, DashboardStats, Platform};
pub use app::services::report_parser::{ParseResult, ReportParser};
pub use config::Config;

/// Result type alias for the Ads Hub processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report processing operations
///
/// The text-parsing pipeline itself has no error variants: malformed
/// cells and unresolved columns degrade to zeros locally. Only I/O,
/// configuration and collaborator (Gemini) failures surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Document extraction failed (Gemini PDF path)
    #[error("Extraction error: {message}")]
    Extraction { message: String },

    /// Executive summary generation failed
    #[error("Summary error: {message}")]
    Summary { message: String },

    /// HTTP transport error talking to the Gemini API
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON encoding/decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a document extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Create a summary generation error
    pub fn summary(message: impl Into<String>) -> Self {
        Self::Summary {
            message: message.into(),
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
