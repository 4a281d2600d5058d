//! # fila
//!
//! Turns queue-length reports posted in a WhatsApp group into a chart of
//! queue length by time of day, one line per day of the week.
//!
//! ## Pipeline
//!
//! 1. [`parser`] reads the export and splits it into [`ChatMessage`]s at every
//!    `M/D/YY, HH:MM - ` boundary, then skips the group header messages
//! 2. [`core::processor`] extracts the first number from each body, drops
//!    values at or above the limit and sorts by weekday and time
//! 3. [`core::output`] writes the Plotly chart (and optionally a CSV table)
//!
//! Every message that does not reach the chart is kept in
//! [`QueueTable::dropped`](core::QueueTable) together with its
//! [`DropReason`](core::DropReason).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fila::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parsed = ChatParser::new().parse("chat.txt".as_ref())?;
//!     let table = process(parsed, &FilterConfig::new())?;
//!     write_chart(&table, &ChartConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`read_chat`](parser::read_chat), [`parse_chat`](parser::parse_chat), [`ChatParser`](parser::ChatParser)
//! - [`config`]: [`ParseConfig`](config::ParseConfig), [`ChartConfig`](config::ChartConfig)
//! - [`core`]: record models, number extraction, filtering, processing, output
//! - [`error`]: [`FilaError`], [`Result`]
//! - [`cli`]: clap argument definition (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{FilaError, Result};
pub use message::ChatMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use fila::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ChatMessage;
    pub use crate::error::{FilaError, Result};

    pub use crate::config::{ChartConfig, DateOrder, ParseConfig};
    pub use crate::parser::{ChatParser, ParsedChat, parse_chat, read_chat};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{DropReason, DroppedRow, QueueRecord, QueueTable};
    pub use crate::core::number::extract_number;
    pub use crate::core::processor::{ProcessingStats, build_records, process};

    pub use crate::core::output::{to_html, write_chart};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
}
