// The JSON report printed after a lookup.

use std::fs;

use crate::lookup::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub location: String,
    #[serde(rename = "rowsRead")]
    pub rows_read: usize,
    #[serde(rename = "rowsLoaded")]
    pub rows_loaded: usize,
    #[serde(rename = "rowsSkipped")]
    pub rows_skipped: usize,
    #[serde(rename = "keysOverwritten")]
    pub keys_overwritten: usize,
}

impl From<&LoadSummary> for LoadReport {
    fn from(s: &LoadSummary) -> LoadReport {
        LoadReport {
            location: s.location.clone(),
            rows_read: s.rows_read,
            rows_loaded: s.rows_loaded,
            rows_skipped: s.rows_skipped,
            keys_overwritten: s.keys_overwritten,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsweringTable {
    Static,
    Directory,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LookupReport {
    pub table: AnsweringTable,
    pub contest: Option<String>,
    pub year: Option<String>,
    pub county: Option<String>,
    pub party: Option<String>,
    /// None when the table has no entry for the query.
    pub candidate: Option<String>,
    pub loads: Vec<LoadReport>,
}

/// Writes the report to a file, or to the standard output for None, "" or "stdout".
pub fn write_report(report: &LookupReport, out: Option<&str>) -> LookupResult<()> {
    let pretty_js = serde_json::to_string_pretty(report).context(SerializingReportSnafu {})?;
    match out {
        None | Some("") | Some("stdout") => {
            println!("{}", pretty_js);
        }
        Some(path) => {
            info!("write_report: writing report to {:?}", path);
            fs::write(path, pretty_js).context(WritingReportSnafu { path })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_not_found_as_null() {
        let report = LookupReport {
            table: AnsweringTable::Static,
            contest: Some("Governor".to_string()),
            year: Some("2019".to_string()),
            county: None,
            party: Some("Democrat".to_string()),
            candidate: None,
            loads: vec![],
        };
        let js = serde_json::to_value(&report).unwrap();
        assert_eq!(js["table"], "static");
        assert!(js["candidate"].is_null());
    }

    #[test]
    fn writes_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = LookupReport {
            table: AnsweringTable::Directory,
            contest: Some("PRE".to_string()),
            year: Some("2020".to_string()),
            county: Some("MIA".to_string()),
            party: Some("DEM".to_string()),
            candidate: Some("Jane Doe".to_string()),
            loads: vec![LoadReport::from(&LoadSummary {
                location: "fl.csv".to_string(),
                rows_read: 2,
                rows_loaded: 1,
                rows_skipped: 1,
                keys_overwritten: 0,
            })],
        };
        write_report(&report, path.to_str()).unwrap();
        let back: LookupReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
        let js: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(js["loads"][0]["rowsSkipped"], 1);
    }
}
