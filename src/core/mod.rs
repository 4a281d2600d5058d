//! Core processing logic for fila.
//!
//! This module contains:
//! - [`models`] - Queue records, drop reasons and the record table
//! - [`number`] - Queue length extraction from message bodies
//! - [`filter`] - Value limit and date range filtering
//! - [`processor`] - Record building, ordering and statistics
//! - [`output`] - Chart and CSV writers

pub mod filter;
pub mod models;
pub mod number;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{DropReason, DroppedRow, QueueRecord, QueueTable};
pub use number::extract_number;
pub use output::{to_html, write_chart};
pub use processor::{ProcessingStats, build_records, process, sort_records};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
