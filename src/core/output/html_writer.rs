//! HTML chart writer.
//!
//! The chart is a Plotly figure: one `scatter` trace with lines and markers
//! per weekday. The figure is serialized with serde_json and embedded in a
//! standalone page that loads plotly.js from [`ChartConfig::plotly_src`].
//!
//! All x values sit on the same reference date so that every weekday shares
//! one time-of-day axis.

use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use crate::config::ChartConfig;
use crate::core::models::QueueTable;
use crate::error::Result;

const CHART_ELEMENT_ID: &str = "fila-chart";

/// A Plotly figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub legendgroup: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
}

/// Date every time of day is pinned to on the x axis.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Builds the Plotly figure for a record table.
pub fn build_figure(table: &QueueTable, config: &ChartConfig) -> Figure {
    let day = reference_date();
    let data = table
        .series()
        .into_iter()
        .map(|(name, rows)| Trace {
            kind: "scatter",
            mode: "lines+markers",
            name: name.to_string(),
            legendgroup: name.to_string(),
            x: rows
                .iter()
                .map(|r| {
                    NaiveDateTime::new(day, r.time_of_day)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string()
                })
                .collect(),
            y: rows.iter().map(|r| r.value).collect(),
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title::new(&config.title),
            height: config.height,
            xaxis: Axis {
                title: Title::new(&config.x_label),
                tickformat: Some("%H:%M"),
            },
            yaxis: Axis {
                title: Title::new(&config.y_label),
                tickformat: None,
            },
            legend: Legend {
                title: Title::new(&config.legend_title),
            },
        },
    }
}

/// Renders the chart page as a string.
pub fn to_html(table: &QueueTable, config: &ChartConfig) -> Result<String> {
    config.validate()?;
    let figure = build_figure(table, config);
    // "</script>" inside a title would end the inline script early
    let figure_json = serde_json::to_string(&figure)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{src}"></script>
</head>
<body>
<div id="{id}" style="width:100%;height:{height}px;"></div>
<script>
const figure = {figure_json};
Plotly.newPlot("{id}", figure.data, figure.layout, {{"responsive": true}});
</script>
</body>
</html>
"#,
        title = escape_html(&config.title),
        src = escape_html(&config.plotly_src),
        id = CHART_ELEMENT_ID,
        height = config.height,
    ))
}

/// Writes the chart page to [`ChartConfig::output`], replacing any
/// existing file.
pub fn write_chart(table: &QueueTable, config: &ChartConfig) -> Result<()> {
    let html = to_html(table, config)?;
    fs::write(&config.output, html)?;
    info!(path = %config.output.display(), records = table.len(), "wrote chart");
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
