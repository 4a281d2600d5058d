//! Chat export reader and message splitter.
//!
//! A message starts at every `D/D/DD, HH:MM - ` boundary. Everything up to
//! the next boundary belongs to it, including line breaks. The segment is
//! split once on its first colon into sender and body; segments without a
//! colon (group notices, "Messages and calls are end-to-end encrypted", ...)
//! are dropped with [`DropReason::MissingSender`].
//!
//! Text before the first boundary is ignored.
//!
//! # Example
//!
//! ```rust
//! use fila::parser::parse_chat;
//!
//! let chat = "3/14/23, 12:05 - Ana: 3,5 pessoas\n\
//!             3/14/23, 12:07 - Bia entrou usando o link\n\
//!             3/14/23, 12:10 - Bia: vazia\nagora mesmo";
//!
//! let messages = parse_chat(chat)?;
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].body, "vazia\nagora mesmo");
//! # Ok::<(), fila::FilaError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, info};

use crate::ChatMessage;
use crate::config::{DateOrder, ParseConfig};
use crate::core::models::{DropReason, DroppedRow};
use crate::error::{FilaError, Result};

/// Message boundary: `D/D/DD, HH:MM` followed by ` - `.
pub const BOUNDARY_PATTERN: &str = r"\b(\d{1,2}/\d{1,2}/\d{2}, \d{2}:\d{2})\b\s-\s";

static BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"));

/// Result of splitting a chat export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedChat {
    /// Messages with a sender, in file order
    pub messages: Vec<ChatMessage>,
    /// Segments or messages that were discarded
    pub dropped: Vec<DroppedRow>,
    /// Number of boundaries found
    pub segments: usize,
}

impl ParsedChat {
    /// Moves the first `count` messages into the dropped list as
    /// [`DropReason::HeaderLine`].
    pub fn skip_header(&mut self, count: usize) {
        let count = count.min(self.messages.len());
        for msg in self.messages.drain(..count) {
            debug!(timestamp = %msg.timestamp, sender = %msg.sender, "skipping header message");
            self.dropped
                .push(DroppedRow::new(msg.timestamp, msg.body, DropReason::HeaderLine));
        }
    }
}

/// Reads a chat export into memory.
///
/// A missing file is reported as [`FilaError::InputNotFound`].
pub fn read_chat(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FilaError::read(path, e))
}

/// Splits chat text into messages using month-first dates.
///
/// No header messages are skipped; see [`ChatParser`] for that.
pub fn parse_chat(content: &str) -> Result<Vec<ChatMessage>> {
    split_chat(content, DateOrder::MonthFirst).map(|parsed| parsed.messages)
}

/// Splits chat text into messages, keeping the dropped segments.
///
/// # Errors
///
/// Returns [`FilaError::InvalidTimestamp`] when a boundary matches the
/// pattern but is not a real date, e.g. `13/45/23, 10:00`.
pub fn split_chat(content: &str, order: DateOrder) -> Result<ParsedChat> {
    let bounds: Vec<(usize, usize, &str)> = BOUNDARY_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let stamp = caps.get(1)?;
            Some((whole.start(), whole.end(), stamp.as_str()))
        })
        .collect();

    let mut parsed = ParsedChat {
        segments: bounds.len(),
        ..ParsedChat::default()
    };

    for (i, &(_, body_start, stamp)) in bounds.iter().enumerate() {
        let body_end = bounds.get(i + 1).map_or(content.len(), |next| next.0);
        let text = content[body_start..body_end].trim();
        let timestamp = parse_timestamp(stamp, order)?;

        match text.split_once(':') {
            Some((sender, body)) => {
                parsed
                    .messages
                    .push(ChatMessage::new(timestamp, sender.trim(), body.trim()));
            }
            None => {
                debug!(%timestamp, text, "dropping segment without sender");
                parsed
                    .dropped
                    .push(DroppedRow::new(timestamp, text, DropReason::MissingSender));
            }
        }
    }

    Ok(parsed)
}

/// Parses a boundary timestamp such as `3/14/23, 12:05`.
pub fn parse_timestamp(stamp: &str, order: DateOrder) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, order.chrono_format())
        .map_err(|_| FilaError::invalid_timestamp(stamp, order.describe()))
}

/// Parser for chat exports with a [`ParseConfig`].
///
/// # Example
///
/// ```rust,no_run
/// use fila::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let parsed = parser.parse("chat.txt".as_ref())?;
/// println!("{} messages", parsed.messages.len());
/// # Ok::<(), fila::FilaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParseConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Reads and parses a chat export file.
    pub fn parse(&self, path: &Path) -> Result<ParsedChat> {
        let content = read_chat(path)?;
        info!(path = %path.display(), bytes = content.len(), "read chat export");
        self.parse_str(&content)
    }

    /// Parses chat text and skips the configured header messages.
    pub fn parse_str(&self, content: &str) -> Result<ParsedChat> {
        let mut parsed = split_chat(content, self.config.date_order)?;
        parsed.skip_header(self.config.skip_header);
        info!(
            segments = parsed.segments,
            messages = parsed.messages.len(),
            dropped = parsed.dropped.len(),
            "split chat export"
        );
        Ok(parsed)
    }
}
