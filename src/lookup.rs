use log::{debug, info, warn};

use candidate_lookup::*;
use snafu::{prelude::*, Snafu};

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::lookup::config_reader::*;
use crate::lookup::report::*;

pub mod config_reader;
pub mod report;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LookupError {
    #[snafu(display("Error opening configuration file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the configuration file"))]
    ParsingConfig { source: serde_json::Error },
    #[snafu(display("The configuration file {path} has no parent directory"))]
    MissingParentDir { path: String },
    #[snafu(display("Unknown input type {input_type:?} (expected csv, tsv or xlsx)"))]
    UnknownInputType { input_type: String },
    #[snafu(display("The delimiter must be a single ASCII character, got {delimiter:?}"))]
    InvalidDelimiter { delimiter: String },
    #[snafu(display("No candidate table to load: use --input or --config, or query with --static"))]
    NoTableSource {},
    #[snafu(display("Error loading a candidate table"))]
    LoadingTable { source: DirectoryError },
    #[snafu(display("Error serializing the report"))]
    SerializingReport { source: serde_json::Error },
    #[snafu(display("Error writing the report to {path}"))]
    WritingReport {
        source: std::io::Error,
        path: String,
    },
}

pub type LookupResult<T> = Result<T, LookupError>;

fn parse_delimiter(delimiter: &str) -> LookupResult<u8> {
    match delimiter {
        "\\t" | "tab" => Ok(b'\t'),
        d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
        d => InvalidDelimiterSnafu { delimiter: d }.fail(),
    }
}

/// Builds a table source from the optional format name and delimiter. A delimiter
/// alone means delimited text, and takes precedence over the delimiter implied by
/// the format name.
pub fn make_source(
    location: &str,
    input_type: Option<&str>,
    delimiter: Option<&str>,
) -> LookupResult<TableSource> {
    let format = match (input_type, delimiter) {
        (Some("xlsx"), _) => TableFormat::Xlsx,
        (Some("csv") | Some("tsv") | None, Some(d)) => TableFormat::Delimited {
            delimiter: parse_delimiter(d)?,
        },
        (Some("csv"), None) => TableFormat::CSV,
        (Some("tsv"), None) => TableFormat::TSV,
        (None, None) => TableSource::infer(location).format,
        (Some(x), _) => {
            return UnknownInputTypeSnafu { input_type: x }.fail();
        }
    };
    Ok(TableSource::new(location, format))
}

/// All the tables to load, in load order, and the load timeout.
///
/// Tables from the configuration file come first, then the --input tables.
pub fn collect_sources(args: &Args) -> LookupResult<(Vec<TableSource>, Option<Duration>)> {
    let mut sources: Vec<TableSource> = Vec::new();
    let mut timeout_seconds: Option<u64> = None;

    if let Some(config_path) = args.config.as_deref() {
        let config = read_config(config_path)?;
        info!("config: {:?}", config);
        let root = Path::new(config_path)
            .parent()
            .context(MissingParentDirSnafu { path: config_path })?;
        sources.extend(config_sources(&config, root)?);
        timeout_seconds = config.timeout_seconds;
    }

    for input in args.input.iter() {
        sources.push(make_source(
            input.as_str(),
            args.input_type.as_deref(),
            args.delimiter.as_deref(),
        )?);
    }

    // The command line overrides the configuration file.
    let timeout = args.timeout.or(timeout_seconds).map(Duration::from_secs);
    Ok((sources, timeout))
}

/// The options given with --static that the embedded table does not use.
fn ignored_static_options(args: &Args) -> Vec<&'static str> {
    let mut res: Vec<&'static str> = Vec::new();
    if args.county.is_some() {
        res.push("--county");
    }
    if !args.input.is_empty() {
        res.push("--input");
    }
    if args.config.is_some() {
        res.push("--config");
    }
    res
}

/// Answers the query from the embedded table. The keys are matched exactly.
pub fn lookup_static(args: &Args) -> LookupReport {
    let candidate = StaticCandidateTable::embedded()
        .get(
            args.year.as_deref().unwrap_or(""),
            args.contest.as_deref().unwrap_or(""),
            args.party.as_deref().unwrap_or(""),
        )
        .map(|s| s.to_string());
    for opt in ignored_static_options(args) {
        warn!("lookup_static: the embedded table is used alone, ignoring {}", opt);
    }
    LookupReport {
        table: AnsweringTable::Static,
        contest: args.contest.clone(),
        year: args.year.clone(),
        county: None,
        party: args.party.clone(),
        candidate,
        loads: vec![],
    }
}

/// Loads all the tables into a fresh directory, then answers the query from it.
pub async fn lookup_directory(args: &Args) -> LookupResult<LookupReport> {
    let (sources, timeout) = collect_sources(args)?;
    ensure!(!sources.is_empty(), NoTableSourceSnafu {});

    let directory = CandidateDirectory::new();
    let mut loads: Vec<LoadReport> = Vec::new();
    for source in sources.iter() {
        let on_complete = |s: &LoadSummary| debug!("lookup_directory: loaded {:?}", s);
        let summary = match timeout {
            Some(t) => directory.load_table_with_timeout(source, t, on_complete).await,
            None => directory.load_table(source, on_complete).await,
        }
        .context(LoadingTableSnafu {})?;
        loads.push(LoadReport::from(&summary));
    }
    info!(
        "lookup_directory: {} entries from {} tables",
        directory.len(),
        loads.len()
    );

    let candidate = directory.get_candidate(
        args.contest.as_deref(),
        args.year.as_deref().unwrap_or(""),
        args.county.as_deref(),
        args.party.as_deref(),
    );
    Ok(LookupReport {
        table: AnsweringTable::Directory,
        contest: args.contest.clone(),
        year: args.year.clone(),
        county: args.county.clone(),
        party: args.party.clone(),
        candidate,
        loads,
    })
}

pub async fn run_lookup(args: &Args) -> LookupResult<LookupReport> {
    let report = if args.static_table {
        lookup_static(args)
    } else {
        lookup_directory(args).await?
    };
    match report.candidate.as_deref() {
        Some(name) => info!("run_lookup: found {:?}", name),
        None => info!("run_lookup: no candidate for this contest"),
    }
    write_report(&report, args.out.as_deref())?;
    Ok(report)
}
