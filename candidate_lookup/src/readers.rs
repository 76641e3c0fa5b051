// Fetching and decoding table sources into raw rows.

use std::io::Cursor;

use calamine::{DataType, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use crate::config::*;

/// The raw rows of a table, before any interpretation of the columns.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
    /// Records the reader could not split into fields.
    pub unreadable_rows: usize,
}

/// Retrieves the content of the source, from disk or over http.
pub async fn fetch(source: &TableSource) -> Result<Vec<u8>, DirectoryError> {
    if source.is_remote() {
        let url = source.location.clone();
        let resp = reqwest::get(url.as_str())
            .await
            .context(FetchSnafu { url: url.clone() })?
            .error_for_status()
            .context(FetchSnafu { url: url.clone() })?;
        let bytes = resp.bytes().await.context(FetchSnafu { url })?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source.location.as_str())
            .await
            .context(ReadFileSnafu {
                path: source.location.clone(),
            })
    }
}

pub fn decode(source: &TableSource, content: &[u8]) -> Result<RawTable, DirectoryError> {
    match source.format {
        TableFormat::Delimited { delimiter } => Ok(read_delimited(content, delimiter)),
        TableFormat::Xlsx => read_xlsx(content, source.location.as_str()),
    }
}

/// Splits delimited text into rows. There is no header row, the number of fields
/// may vary from row to row and empty lines are dropped.
///
/// Fields that are not valid UTF-8 (Latin-1 exports, for instance) are decoded
/// lossily: the row is kept and the invalid bytes become U+FFFD.
pub fn read_delimited(content: &[u8], delimiter: u8) -> RawTable {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content);
    let mut res = RawTable::default();
    for (idx, record_r) in rdr.into_byte_records().enumerate() {
        match record_r {
            Ok(record) => res.rows.push(
                record
                    .iter()
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .collect(),
            ),
            Err(e) => {
                debug!("read_delimited: record {}: unreadable: {}", idx, e);
                res.unreadable_rows += 1;
            }
        }
    }
    res
}

pub fn read_xlsx(content: &[u8], location: &str) -> Result<RawTable, DirectoryError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(content)).context(OpenWorkbookSnafu {
        table: location.to_string(),
    })?;
    let wrange = workbook
        .worksheet_range_at(0)
        .context(EmptyWorkbookSnafu {
            table: location.to_string(),
        })?
        .context(OpenWorkbookSnafu {
            table: location.to_string(),
        })?;

    let mut res = RawTable::default();
    for row in wrange.rows() {
        debug!("read_xlsx: row: {:?}", row);
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        // Rows made only of empty cells are dropped, as with blank lines in text.
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        res.rows.push(cells);
    }
    Ok(res)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        // Years typed in a spreadsheet come back as floats.
        DataType::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => "".to_string(),
        other => format!("{:?}", other),
    }
}
