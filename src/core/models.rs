//! Core data models for queue reports.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::ChatMessage;

/// A chat message that carried a usable queue length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueRecord {
    /// When the report was sent
    pub timestamp: NaiveDateTime,
    /// Who reported it
    pub sender: String,
    /// Raw message body
    pub body: String,
    /// Monday = 0 ... Sunday = 6
    pub day_of_week: u32,
    /// English weekday name, e.g. `Tuesday`
    pub day_name: String,
    /// Time of day without the date
    pub time_of_day: NaiveTime,
    /// Queue length extracted from the body
    pub value: f64,
}

impl QueueRecord {
    /// Builds a record from a message and its extracted value,
    /// deriving the weekday and time-of-day columns.
    pub fn from_message(msg: ChatMessage, value: f64) -> Self {
        let ts = msg.timestamp;
        let weekday = ts.weekday();
        Self {
            timestamp: ts,
            sender: msg.sender,
            body: msg.body,
            day_of_week: weekday.num_days_from_monday(),
            day_name: ts.format("%A").to_string(),
            time_of_day: ts.time(),
            value,
        }
    }

    /// Sort key: weekday first, then time of day.
    pub fn sort_key(&self) -> (u32, u32) {
        (self.day_of_week, self.time_of_day.num_seconds_from_midnight())
    }
}

/// Why a chat segment did not become a [`QueueRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DropReason {
    /// Segment text had no colon, so no sender could be split off.
    MissingSender,
    /// Message fell inside the configured header offset.
    HeaderLine,
    /// Body contained no number.
    NoNumber,
    /// Extracted value was not below the configured limit.
    AboveLimit {
        /// The extracted value
        value: f64,
        /// The exclusive upper bound in effect
        limit: f64,
    },
    /// Message date fell outside the `after`/`before` range.
    OutOfRange,
}

impl DropReason {
    /// Short label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            DropReason::MissingSender => "missing sender",
            DropReason::HeaderLine => "header line",
            DropReason::NoNumber => "no number",
            DropReason::AboveLimit { .. } => "above limit",
            DropReason::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::AboveLimit { value, limit } => {
                write!(f, "above limit ({value} >= {limit})")
            }
            other => f.write_str(other.label()),
        }
    }
}

/// A segment or message that was dropped, with its cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedRow {
    /// Boundary timestamp of the segment
    pub timestamp: NaiveDateTime,
    /// Segment text (whole segment for [`DropReason::MissingSender`],
    /// message body otherwise)
    pub text: String,
    /// Why it was dropped
    pub reason: DropReason,
}

impl DroppedRow {
    /// Creates a new dropped row.
    pub fn new(timestamp: NaiveDateTime, text: impl Into<String>, reason: DropReason) -> Self {
        Self {
            timestamp,
            text: text.into(),
            reason,
        }
    }
}

/// The record table produced by the pipeline: kept rows plus an audit
/// trail of everything that was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueTable {
    /// Kept records, ordered by weekday then time of day
    pub records: Vec<QueueRecord>,
    /// Dropped rows, grouped by the stage that dropped them
    pub dropped: Vec<DroppedRow>,
}

impl QueueTable {
    /// Number of kept records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record was kept.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracted values in table order.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Counts dropped rows whose reason has the given label.
    pub fn dropped_count(&self, label: &str) -> usize {
        self.dropped
            .iter()
            .filter(|d| d.reason.label() == label)
            .count()
    }

    /// Groups records into chart series, one per weekday, in weekday order.
    ///
    /// Records inside a series keep table order.
    pub fn series(&self) -> Vec<(&str, Vec<&QueueRecord>)> {
        let mut series: Vec<(u32, &str, Vec<&QueueRecord>)> = Vec::new();
        for record in &self.records {
            match series.iter_mut().find(|(dow, _, _)| *dow == record.day_of_week) {
                Some((_, _, rows)) => rows.push(record),
                None => series.push((record.day_of_week, record.day_name.as_str(), vec![record])),
            }
        }
        series.sort_by_key(|(dow, _, _)| *dow);
        series
            .into_iter()
            .map(|(_, name, rows)| (name, rows))
            .collect()
    }
}
