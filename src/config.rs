//! Configuration types for parsing and chart output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - how the chat export is split and how many header
//!   messages are skipped
//! - [`ChartConfig`] - where the chart goes and how it is labelled
//!
//! Record filtering lives in [`crate::core::filter::FilterConfig`].
//!
//! # Example
//!
//! ```rust
//! use fila::config::{ChartConfig, DateOrder, ParseConfig};
//!
//! let parse = ParseConfig::new()
//!     .with_skip_header(3)
//!     .with_date_order(DateOrder::DayFirst);
//!
//! let chart = ChartConfig::new()
//!     .with_output("queue.html")
//!     .with_height(800);
//! # assert_eq!(parse.skip_header, 3);
//! # assert_eq!(chart.height, 800);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FilaError, Result};

/// Default number of leading messages treated as group header lines.
pub const DEFAULT_SKIP_HEADER: usize = 5;

/// Default chart file name, written to the current directory.
pub const DEFAULT_OUTPUT: &str = "fila.html";

/// Default plotly.js bundle loaded by the generated page.
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Order of the two date fields in a `D/D/DD` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM/DD/YY` (US locale exports)
    #[default]
    MonthFirst,
    /// `DD/MM/YY`
    DayFirst,
}

impl DateOrder {
    /// Returns the chrono format string for a full boundary timestamp.
    pub fn chrono_format(self) -> &'static str {
        match self {
            DateOrder::MonthFirst => "%m/%d/%y, %H:%M",
            DateOrder::DayFirst => "%d/%m/%y, %H:%M",
        }
    }

    /// Returns a human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            DateOrder::MonthFirst => "MM/DD/YY, HH:MM",
            DateOrder::DayFirst => "DD/MM/YY, HH:MM",
        }
    }
}

/// Configuration for splitting a chat export into messages.
///
/// # Example
///
/// ```rust
/// use fila::config::ParseConfig;
///
/// let config = ParseConfig::new().with_skip_header(0);
/// assert_eq!(config.skip_header, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Messages dropped from the start of the export (default: 5).
    ///
    /// Counted after segments without a sender are discarded.
    pub skip_header: usize,

    /// Field order of the boundary date (default: month first).
    pub date_order: DateOrder,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            skip_header: DEFAULT_SKIP_HEADER,
            date_order: DateOrder::MonthFirst,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of header messages to skip.
    #[must_use]
    pub fn with_skip_header(mut self, count: usize) -> Self {
        self.skip_header = count;
        self
    }

    /// Sets the boundary date field order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the rendered chart.
///
/// Defaults: the "Fila Cantina" chart, 600px high, `Time` on x, `Fila` on y,
/// legend titled `Dia`, written to `fila.html`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Output HTML path (default: `fila.html`)
    pub output: PathBuf,

    /// Chart title
    pub title: String,

    /// Chart height in pixels
    pub height: u32,

    /// X axis title
    pub x_label: String,

    /// Y axis title
    pub y_label: String,

    /// Legend title (the day-of-week label)
    pub legend_title: String,

    /// URL or path of the plotly.js bundle
    pub plotly_src: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: "Fila Cantina".to_string(),
            height: 600,
            x_label: "Time".to_string(),
            y_label: "Fila".to_string(),
            legend_title: "Dia".to_string(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }
}

impl ChartConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults. An unreadable file is
    /// reported as [`FilaError::InvalidConfig`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FilaError::invalid_config(format!(
                "cannot read chart config {}: {e}",
                path.display()
            ))
        })?;
        let config: ChartConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the chart height in pixels.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Sets the plotly.js source URL.
    #[must_use]
    pub fn with_plotly_src(mut self, src: impl Into<String>) -> Self {
        self.plotly_src = src.into();
        self
    }

    /// Checks that the configuration can produce a visible chart.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(FilaError::invalid_config("chart height must be positive"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(FilaError::invalid_config("output path is empty"));
        }
        Ok(())
    }
}
