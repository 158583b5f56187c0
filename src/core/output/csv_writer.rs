//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::ChatRecord;

const HEADER: [&str; 11] = [
    "Timestamp",
    "Author",
    "Message",
    "Year",
    "Month",
    "MonthNum",
    "Day",
    "Weekday",
    "Hour",
    "Minute",
    "Period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Message`, then the derived calendar
///   fields (`Year`, `Month`, `MonthNum`, `Day`, `Weekday`, `Hour`,
///   `Minute`, `Period`)
/// - Timestamps as `%Y-%m-%d %H:%M:%S`
/// - Encoding: UTF-8
pub fn write_csv(records: &[ChatRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(records: &[ChatRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[ChatRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &ChatRecord) -> [String; 11] {
    let cal = record.calendar();
    [
        record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        record.author().to_string(),
        record.message().to_string(),
        cal.year.to_string(),
        cal.month_name.to_string(),
        cal.month_num.to_string(),
        cal.day.to_string(),
        cal.weekday_name.to_string(),
        cal.hour.to_string(),
        cal.minute.to_string(),
        cal.hour_bucket.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transcript;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv_basic() {
        let records = parse_transcript(
            "6/15/24, 12:30 - Alice: Hello\n6/15/24, 12:31 - Bob: Hi there\n",
        )
        .unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&records, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("Timestamp;Author;Message;Year;Month;"));
        assert!(content.contains("2024-06-15 12:30:00;Alice;Hello;2024;June;6;15;Saturday;12;30;12-13"));
        assert!(content.contains("2024-06-15 12:31:00;Bob;Hi there;"));
    }

    #[test]
    fn test_to_csv_quotes_multiline() {
        let records = parse_transcript("1/1/24, 9:00 - Alice: line one\nline; two\n").unwrap();

        let csv = to_csv(&records).unwrap();

        assert!(csv.contains("\"line one\nline; two\""));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "line one\nline; two");
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
