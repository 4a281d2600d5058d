//! Record building: number extraction, filtering and ordering.

use tracing::{debug, info};

use crate::ChatMessage;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::models::{DropReason, DroppedRow, QueueRecord, QueueTable};
use crate::core::number::extract_number;
use crate::error::{FilaError, Result};
use crate::parser::ParsedChat;

/// Turns messages into a sorted record table.
///
/// Messages whose body has no number are dropped with
/// [`DropReason::NoNumber`]; the rest go through [`apply_filters`].
/// Kept records are ordered by weekday, then time of day.
///
/// # Example
/// Input bodies:  `["2", "ok", "5,5", "8"]` (default filter)
/// Output values: `[2.0, 5.5]`, dropped: `ok` (no number), `8` (above limit)
pub fn build_records(messages: Vec<ChatMessage>, filter: &FilterConfig) -> QueueTable {
    let mut candidates = Vec::with_capacity(messages.len());
    let mut dropped = Vec::new();

    for msg in messages {
        match extract_number(&msg.body) {
            Some(value) => candidates.push(QueueRecord::from_message(msg, value)),
            None => {
                debug!(timestamp = %msg.timestamp, body = %msg.body, "dropping message without number");
                dropped.push(DroppedRow::new(msg.timestamp, msg.body, DropReason::NoNumber));
            }
        }
    }

    let (mut records, filtered_out) = apply_filters(candidates, filter);
    dropped.extend(filtered_out);
    sort_records(&mut records);

    QueueTable { records, dropped }
}

/// Stable sort by (weekday, time of day).
///
/// Records from different weeks at the same weekday and time keep their
/// input order.
pub fn sort_records(records: &mut [QueueRecord]) {
    records.sort_by_key(QueueRecord::sort_key);
}

/// Runs record building on a parsed chat and rejects empty outcomes.
///
/// # Errors
///
/// - [`FilaError::NoMessages`] if no message survived splitting and the
///   header skip
/// - [`FilaError::EmptyResult`] if every message was dropped
pub fn process(parsed: ParsedChat, filter: &FilterConfig) -> Result<QueueTable> {
    let ParsedChat {
        messages,
        dropped: parse_dropped,
        segments,
    } = parsed;

    if messages.is_empty() {
        return Err(FilaError::NoMessages { segments });
    }

    let message_count = messages.len();
    let table = build_records(messages, filter);
    info!(
        kept = table.len(),
        dropped = table.dropped.len(),
        "built record table"
    );

    if table.is_empty() {
        return Err(FilaError::EmptyResult {
            messages: message_count,
            dropped: table.dropped.len(),
        });
    }

    let mut dropped = parse_dropped;
    dropped.extend(table.dropped);
    Ok(QueueTable {
        records: table.records,
        dropped,
    })
}

/// Counts of what happened to every segment of the export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub segments: usize,
    pub missing_sender: usize,
    pub header_lines: usize,
    pub no_number: usize,
    pub above_limit: usize,
    pub out_of_range: usize,
    pub kept: usize,
}

impl ProcessingStats {
    /// Tallies a finished table.
    pub fn new(segments: usize, table: &QueueTable) -> Self {
        let mut stats = Self {
            segments,
            kept: table.len(),
            ..Self::default()
        };
        for row in &table.dropped {
            match row.reason {
                DropReason::MissingSender => stats.missing_sender += 1,
                DropReason::HeaderLine => stats.header_lines += 1,
                DropReason::NoNumber => stats.no_number += 1,
                DropReason::AboveLimit { .. } => stats.above_limit += 1,
                DropReason::OutOfRange => stats.out_of_range += 1,
            }
        }
        stats
    }

    /// Messages that reached number extraction.
    pub fn messages(&self) -> usize {
        self.segments
            .saturating_sub(self.missing_sender + self.header_lines)
    }

    /// Percentage of segments that ended up on the chart.
    pub fn keep_ratio(&self) -> f64 {
        if self.segments == 0 {
            return 0.0;
        }
        self.kept as f64 / self.segments as f64 * 100.0
    }
}
