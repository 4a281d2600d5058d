//! Filter queue records by value and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for splitting a record collection into kept rows and
//! dropped rows with their reason.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Value limit | [`with_max_value`](FilterConfig::with_max_value) | Values strictly below the limit (default 7) |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use fila::ChatMessage;
//! use fila::core::filter::{FilterConfig, apply_filters};
//! use fila::core::models::QueueRecord;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 3, 14).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let records = vec![
//!     QueueRecord::from_message(ChatMessage::new(ts, "Ana", "6,9"), 6.9),
//!     QueueRecord::from_message(ChatMessage::new(ts, "Bia", "7"), 7.0),
//! ];
//!
//! let (kept, dropped) = apply_filters(records, &FilterConfig::new());
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].value, 6.9);
//! assert_eq!(dropped.len(), 1);
//! ```
//!
//! # Behavior Notes
//!
//! - The value limit is exclusive: a value equal to the limit is dropped
//! - Date bounds are inclusive whole days
//! - Multiple filters are combined with AND logic; the value check runs first

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::models::{DropReason, DroppedRow, QueueRecord};
use crate::error::{FilaError, Result};

/// Default exclusive upper bound for queue values.
pub const DEFAULT_MAX_VALUE: f64 = 7.0;

/// Configuration for filtering queue records.
///
/// # Examples
///
/// ```
/// use fila::core::filter::FilterConfig;
///
/// # fn main() -> fila::Result<()> {
/// let config = FilterConfig::new()
///     .with_max_value(10.0)
///     .with_date_from("2023-01-01")?
///     .with_date_to("2023-06-30")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep only values strictly below this bound.
    pub max_value: f64,

    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            after: None,
            before: None,
        }
    }
}

impl FilterConfig {
    /// Creates a filter with the default limit and no date range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive upper bound for values.
    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`FilaError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`FilaError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Returns `true` if a date range is set.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Checks that the bounds make sense.
    pub fn validate(&self) -> Result<()> {
        if !self.max_value.is_finite() {
            return Err(FilaError::invalid_config(format!(
                "max value must be finite, got {}",
                self.max_value
            )));
        }
        if let (Some(after), Some(before)) = (self.after, self.before)
            && after > before
        {
            return Err(FilaError::invalid_config(format!(
                "date range is empty: {after} is after {before}"
            )));
        }
        Ok(())
    }

    /// Returns why a row with this timestamp and value would be dropped,
    /// or `None` if it passes.
    pub fn verdict(&self, timestamp: NaiveDateTime, value: f64) -> Option<DropReason> {
        if value >= self.max_value {
            return Some(DropReason::AboveLimit {
                value,
                limit: self.max_value,
            });
        }

        let date = timestamp.date();
        if self.after.is_some_and(|after| date < after) {
            return Some(DropReason::OutOfRange);
        }
        if self.before.is_some_and(|before| date > before) {
            return Some(DropReason::OutOfRange);
        }

        None
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| FilaError::invalid_date(date_str))
}

/// Splits records into those passing every filter and dropped rows.
///
/// Kept records preserve input order.
pub fn apply_filters(
    records: Vec<QueueRecord>,
    config: &FilterConfig,
) -> (Vec<QueueRecord>, Vec<DroppedRow>) {
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = Vec::new();

    for record in records {
        match config.verdict(record.timestamp, record.value) {
            None => kept.push(record),
            Some(reason) => {
                debug!(timestamp = %record.timestamp, body = %record.body, %reason, "dropping record");
                dropped.push(DroppedRow::new(record.timestamp, record.body, reason));
            }
        }
    }

    (kept, dropped)
}
