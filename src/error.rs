//! Unified error types for fila.
//!
//! This module provides a single [`FilaError`] enum that covers every failure
//! the pipeline can report. Conditions that would otherwise end in an empty
//! chart (no messages parsed, nothing left after filtering) are errors too.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for fila operations.
///
/// # Example
///
/// ```rust
/// use fila::error::Result;
/// use fila::ChatMessage;
///
/// fn my_function() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, FilaError>;

/// The error type for all fila operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilaError {
    /// The chat export does not exist.
    #[error("Chat file not found: {}", path.display())]
    InputNotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Reading the chat export failed.
    ///
    /// Invalid UTF-8 content ends up here as well.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The chat export path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when writing the chart or CSV output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A message boundary matched the date pattern but is not a real date.
    #[error("Invalid message timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The timestamp text as found in the export
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Configuration values that cannot produce a meaningful chart.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// No chat message survived splitting and the header skip.
    #[error("No messages found in chat export ({segments} segments matched the date pattern)")]
    NoMessages {
        /// Number of date-prefixed segments found
        segments: usize,
    },

    /// Every message was dropped during extraction or filtering.
    #[error("No queue reports left after filtering ({messages} messages, {dropped} dropped)")]
    EmptyResult {
        /// Messages that entered record building
        messages: usize,
        /// Rows dropped by extraction or filtering
        dropped: usize,
    },

    /// JSON serialization error.
    ///
    /// Raised while serializing the chart figure or reading a chart config.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl FilaError {
    /// Creates an error for a file read failure, mapping "not found" to
    /// [`FilaError::InputNotFound`].
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            FilaError::InputNotFound { path }
        } else {
            FilaError::Read { path, source }
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>, expected: &'static str) -> Self {
        FilaError::InvalidTimestamp {
            input: input.into(),
            expected,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        FilaError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FilaError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if the chat file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FilaError::InputNotFound { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, FilaError::Io(_) | FilaError::Read { .. })
    }

    /// Returns `true` if no messages were parsed.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, FilaError::NoMessages { .. })
    }

    /// Returns `true` if filtering left nothing to plot.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, FilaError::EmptyResult { .. })
    }

    /// Returns `true` if this is a date or timestamp error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            FilaError::InvalidDate { .. } | FilaError::InvalidTimestamp { .. }
        )
    }
}
