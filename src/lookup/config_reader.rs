use std::fs;
use std::path::Path;

use crate::lookup::*;

/// One table to load, as written in the configuration file.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: String,
    /// csv, tsv or xlsx. Inferred from the extension of the location when missing.
    pub format: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(rename = "tableSources")]
    pub table_sources: Vec<SourceConfig>,
    #[serde(rename = "timeoutSeconds")]
    pub timeout_seconds: Option<u64>,
}

pub fn read_config(path: &str) -> LookupResult<LookupConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    debug!("read_config: content: {:?}", contents);
    parse_config(contents.as_str())
}

pub fn parse_config(contents: &str) -> LookupResult<LookupConfig> {
    serde_json::from_str(contents).context(ParsingConfigSnafu {})
}

/// Table sources of the configuration, with relative paths resolved against `root`.
pub fn config_sources(config: &LookupConfig, root: &Path) -> LookupResult<Vec<TableSource>> {
    let mut res: Vec<TableSource> = Vec::new();
    for sc in config.table_sources.iter() {
        let location = resolve_location(root, sc.location.as_str());
        let source = make_source(
            location.as_str(),
            sc.format.as_deref(),
            sc.delimiter.as_deref(),
        )?;
        debug!("config_sources: {:?}", source);
        res.push(source);
    }
    Ok(res)
}

/// URLs and absolute paths are kept, other locations are joined to `root`.
pub fn resolve_location(root: &Path, location: &str) -> String {
    if location.starts_with("http://")
        || location.starts_with("https://")
        || Path::new(location).is_absolute()
    {
        location.to_string()
    } else {
        root.join(location).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_config() {
        let config = parse_config(
            r#"{
                "tableSources": [
                    {"location": "fl_candidates.csv"},
                    {"location": "results.txt", "format": "csv", "delimiter": ";"}
                ],
                "timeoutSeconds": 10
            }"#,
        )
        .unwrap();
        assert_eq!(config.table_sources.len(), 2);
        assert_eq!(config.table_sources[0].format, None);
        assert_eq!(config.table_sources[1].delimiter, Some(";".to_string()));
        assert_eq!(config.timeout_seconds, Some(10));
    }

    #[test]
    fn timeout_is_optional() {
        let config = parse_config(r#"{"tableSources": []}"#).unwrap();
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            parse_config(r#"{"tables": "#),
            Err(LookupError::ParsingConfig { .. })
        ));
    }

    #[test]
    fn resolves_relative_locations() {
        let root = PathBuf::from("/data/fl");
        assert_eq!(
            resolve_location(&root, "candidates.csv"),
            "/data/fl/candidates.csv"
        );
        assert_eq!(resolve_location(&root, "/abs/c.csv"), "/abs/c.csv");
        assert_eq!(
            resolve_location(&root, "https://example.org/c.csv"),
            "https://example.org/c.csv"
        );
    }

    #[test]
    fn config_sources_use_format_and_delimiter() {
        let config = parse_config(
            r#"{"tableSources": [
                {"location": "a.txt", "format": "csv", "delimiter": ";"},
                {"location": "b.xlsx"}
            ]}"#,
        )
        .unwrap();
        let sources = config_sources(&config, Path::new("/data")).unwrap();
        assert_eq!(sources[0].location, "/data/a.txt");
        assert_eq!(sources[0].format, TableFormat::Delimited { delimiter: b';' });
        assert_eq!(sources[1].format, TableFormat::Xlsx);
    }
}
