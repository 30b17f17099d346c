// File: crates/temp-core/src/ingest.rs
// Summary: Delimited text into raw records (header row + date/photocell/sensor_1/sensor_2 columns).

use crate::error::ParseError;
use crate::sample::RawRecord;

/// Read header-prefixed delimited text into raw records.
///
/// Columns are matched by header name, case-insensitively, so column order in
/// the source does not matter. A missing column or a ragged row fails the
/// whole read.
pub fn read_records(text: &str, delimiter: u8) -> Result<Vec<RawRecord>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| ParseError::Row { row: 0, message: e.to_string() })?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |name: &str| -> Result<usize, ParseError> {
        headers.iter().position(|h| h == name).ok_or_else(|| ParseError::Row {
            row: 0,
            message: format!("missing column '{name}' (headers: {headers:?})"),
        })
    };
    let i_date = idx("date")?;
    let i_light = idx("photocell")?;
    let i_internal = idx("sensor_1")?;
    let i_external = idx("sensor_2")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| ParseError::Row { row, message: e.to_string() })?;
        let get = |i: usize| rec.get(i).unwrap_or_default().to_string();
        out.push(RawRecord {
            date: get(i_date),
            photocell: get(i_light),
            sensor_1: get(i_internal),
            sensor_2: get(i_external),
        });
    }
    tracing::debug!(rows = out.len(), "read delimited records");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_by_header_name() {
        let text = "sensor_2,Date,photocell,sensor_1\n80.1,2022-06-29T08:29:45-04:00,500,72.27\n";
        let rows = read_records(text, b',').unwrap();
        assert_eq!(rows, vec![RawRecord::new("2022-06-29T08:29:45-04:00", "500", "72.27", "80.1")]);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = read_records("date,photocell,sensor_1\n", b',').unwrap_err();
        assert!(matches!(err, ParseError::Row { row: 0, .. }));
    }

    #[test]
    fn ragged_row_fails() {
        let text = "date,photocell,sensor_1,sensor_2\n2022-06-29T08:29:45Z,1,2\n";
        assert!(read_records(text, b',').is_err());
    }

    #[test]
    fn header_only_gives_no_rows() {
        assert!(read_records("date,photocell,sensor_1,sensor_2\n", b',').unwrap().is_empty());
    }
}
