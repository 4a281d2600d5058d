//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{QueueRecord, QueueTable};
use crate::error::Result;

const HEADER: [&str; 7] = [
    "Timestamp",
    "Sender",
    "Message",
    "DayOfWeek",
    "DayName",
    "Time",
    "Number",
];

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Message`, `DayOfWeek`, `DayName`,
///   `Time`, `Number`
/// - Rows in table order
pub fn write_csv(table: &QueueTable, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(&table.records, file)
}

/// Converts the record table to a CSV string.
pub fn to_csv(table: &QueueTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&table.records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_records<W: Write>(records: &[QueueRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(record: &QueueRecord) -> [String; 7] {
    [
        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.sender.clone(),
        record.body.clone(),
        record.day_of_week.to_string(),
        record.day_name.clone(),
        record.time_of_day.format("%H:%M").to_string(),
        record.value.to_string(),
    ]
}
