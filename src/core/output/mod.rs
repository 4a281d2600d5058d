//! Output writers.
//!
//! - [`write_chart`] / [`to_html`] - interactive Plotly line chart, one line per weekday
//! - [`write_csv`] / [`to_csv`] - the record table with semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> fila::Result<()> {
//! use fila::config::{ChartConfig, ParseConfig};
//! use fila::core::filter::FilterConfig;
//! use fila::core::output::write_chart;
//! use fila::core::processor::process;
//! use fila::parser::ChatParser;
//!
//! let parsed = ChatParser::with_config(ParseConfig::new()).parse("chat.txt".as_ref())?;
//! let table = process(parsed, &FilterConfig::new())?;
//!
//! write_chart(&table, &ChartConfig::new().with_output("fila.html"))?;
//! # Ok(())
//! # }
//! ```

mod html_writer;

#[cfg(feature = "csv-output")]
mod csv_writer;

pub use html_writer::{Axis, Figure, Layout, Legend, Title, Trace, build_figure, to_html, write_chart};

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
