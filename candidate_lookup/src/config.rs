// ********* Input data structures ***********

use std::path::Path;
use std::time::Duration;

use snafu::Snafu;

/// How the rows of a table source are encoded.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum TableFormat {
    /// Delimited text without a header row. Quoting follows RFC 4180.
    Delimited { delimiter: u8 },
    /// An Excel workbook. Only the first worksheet is read and every row is data.
    Xlsx,
}

impl TableFormat {
    pub const CSV: TableFormat = TableFormat::Delimited { delimiter: b',' };
    pub const TSV: TableFormat = TableFormat::Delimited { delimiter: b'\t' };
}

/// A table of candidates to load: a local path or an http(s) URL.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TableSource {
    pub location: String,
    pub format: TableFormat,
}

impl TableSource {
    pub fn new(location: &str, format: TableFormat) -> TableSource {
        TableSource {
            location: location.to_string(),
            format,
        }
    }

    /// Picks the format from the extension of the location.
    /// `.xlsx` is a workbook, `.tsv` and `.txt` are tab-separated, anything else is
    /// comma-separated.
    pub fn infer(location: &str) -> TableSource {
        // Drop the query string of URLs before looking at the extension.
        let path_part = location.split(['?', '#']).next().unwrap_or(location);
        let ext = Path::new(path_part)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let format = match ext.as_deref() {
            Some("xlsx") => TableFormat::Xlsx,
            Some("tsv") | Some("txt") => TableFormat::TSV,
            _ => TableFormat::CSV,
        };
        TableSource::new(location, format)
    }

    pub fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }
}

// ******** Output data structures *********

/// What a single load did to the directory.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct LoadSummary {
    pub location: String,
    /// All the rows seen in the source, including the skipped ones.
    pub rows_read: usize,
    pub rows_loaded: usize,
    /// Rows with fewer than five columns, or that the reader could not split.
    pub rows_skipped: usize,
    /// Loaded rows that replaced an existing entry.
    pub keys_overwritten: usize,
}

/// Errors that prevent a table from being loaded.
///
/// When one of these is returned, the completion callback has not been called
/// and nothing was added to the directory.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DirectoryError {
    #[snafu(display("Error reading table file {path}"))]
    ReadFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error fetching table from {url}"))]
    Fetch { source: reqwest::Error, url: String },
    #[snafu(display("Error opening workbook {table}"))]
    OpenWorkbook {
        source: calamine::XlsxError,
        table: String,
    },
    #[snafu(display("Workbook {table} has no worksheet"))]
    EmptyWorkbook { table: String },
    #[snafu(display("Loading {table} did not finish within {timeout:?}"))]
    Timeout { table: String, timeout: Duration },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(TableSource::infer("data/fl.csv").format, TableFormat::CSV);
        assert_eq!(TableSource::infer("data/fl.TSV").format, TableFormat::TSV);
        assert_eq!(
            TableSource::infer("11082016Election.txt").format,
            TableFormat::TSV
        );
        assert_eq!(TableSource::infer("cands.xlsx").format, TableFormat::Xlsx);
        assert_eq!(TableSource::infer("no_extension").format, TableFormat::CSV);
    }

    #[test]
    fn infers_format_of_urls() {
        let s = TableSource::infer("https://example.org/fl/candidates.xlsx?raw=true");
        assert_eq!(s.format, TableFormat::Xlsx);
        assert!(s.is_remote());
        assert!(!TableSource::infer("/tmp/candidates.csv").is_remote());
    }
}
