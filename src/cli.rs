//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto the library configuration types; see
//! [`Args::parse_config`], [`Args::filter_config`] and [`Args::chart_config`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ChartConfig, DEFAULT_SKIP_HEADER, DateOrder, ParseConfig};
use crate::core::filter::{DEFAULT_MAX_VALUE, FilterConfig};
use crate::error::Result;

/// Chart queue lengths reported in a WhatsApp chat export, one line per
/// day of the week.
#[derive(Parser, Debug, Clone)]
#[command(name = "fila")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    fila chat.txt
    fila chat.txt -o cantina.html --max-value 10
    fila chat.txt --day-first --after 2023-03-01 --csv fila.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Path to the HTML chart (default: fila.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of leading messages to ignore (group header lines)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SKIP_HEADER)]
    pub skip_header: usize,

    /// Keep only values strictly below this bound
    #[arg(long, value_name = "VALUE", default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: f64,

    /// Read dates as DD/MM/YY instead of MM/DD/YY
    #[arg(long)]
    pub day_first: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Also write the record table as CSV
    #[cfg(feature = "csv-output")]
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Chart height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Load chart settings from a JSON file (flags override it)
    #[arg(long, value_name = "JSON")]
    pub chart_config: Option<PathBuf>,

    /// Log every dropped message to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the parser configuration.
    pub fn parse_config(&self) -> ParseConfig {
        let order = if self.day_first {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        };
        ParseConfig::new()
            .with_skip_header(self.skip_header)
            .with_date_order(order)
    }

    /// Builds the record filter, validating dates and bounds.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new().with_max_value(self.max_value);
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Builds the chart configuration.
    ///
    /// Starts from `--chart-config` when given; `--output`, `--title` and
    /// `--height` are applied on top. Without either, the chart goes to
    /// `fila.html`.
    pub fn chart_config(&self) -> Result<ChartConfig> {
        let mut config = match self.chart_config {
            Some(ref path) => ChartConfig::from_json_file(path)?,
            None => ChartConfig::new(),
        };
        if let Some(ref output) = self.output {
            config = config.with_output(output);
        }
        if let Some(ref title) = self.title {
            config = config.with_title(title);
        }
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["fila", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.output, None);

        let parse = args.parse_config();
        assert_eq!(parse.skip_header, 5);
        assert_eq!(parse.date_order, DateOrder::MonthFirst);

        let filter = args.filter_config().unwrap();
        assert!((filter.max_value - 7.0).abs() < f64::EPSILON);
        assert!(!filter.has_date_filter());

        let chart = args.chart_config().unwrap();
        assert_eq!(chart, ChartConfig::new());
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["fila"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = args(&[
            "-o",
            "out.html",
            "--skip-header",
            "0",
            "--max-value",
            "10",
            "--day-first",
            "--after",
            "2023-03-01",
            "--title",
            "Fila RU",
            "--height",
            "400",
        ]);

        assert_eq!(args.parse_config().skip_header, 0);
        assert_eq!(args.parse_config().date_order, DateOrder::DayFirst);
        let filter = args.filter_config().unwrap();
        assert!((filter.max_value - 10.0).abs() < f64::EPSILON);
        assert!(filter.after.is_some());

        let chart = args.chart_config().unwrap();
        assert_eq!(chart.output, PathBuf::from("out.html"));
        assert_eq!(chart.title, "Fila RU");
        assert_eq!(chart.height, 400);
    }

    #[test]
    fn test_bad_date_rejected() {
        let args = args(&["--before", "yesterday"]);
        assert!(args.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_chart_config_file_with_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Do arquivo", "output": "from_file.html", "height": 300}}"#)
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let chart = args(&["--chart-config", &path, "--height", "500"])
            .chart_config()
            .unwrap();
        assert_eq!(chart.title, "Do arquivo");
        assert_eq!(chart.output, PathBuf::from("from_file.html"));
        assert_eq!(chart.height, 500);
    }

    #[test]
    fn test_explicit_output_overrides_chart_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"output": "from_file.html"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let chart = args(&["--chart-config", &path, "-o", "fila.html"])
            .chart_config()
            .unwrap();
        assert_eq!(chart.output, PathBuf::from("fila.html"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_csv_flag() {
        let args = args(&["--csv", "fila.csv"]);
        assert_eq!(args.csv, Some(PathBuf::from("fila.csv")));
    }

    #[cfg(not(feature = "csv-output"))]
    #[test]
    fn test_csv_flag_rejected_without_csv_output() {
        assert!(Args::try_parse_from(["fila", "chat.txt", "--csv", "fila.csv"]).is_err());
    }
}
