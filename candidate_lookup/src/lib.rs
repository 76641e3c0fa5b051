mod config;
mod keys;
pub mod readers;
mod static_table;

use log::{debug, info, warn};

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{
        atomic::{AtomicBool, Ordering},
        PoisonError, RwLock,
    },
    time::Duration,
};

pub use crate::config::*;
pub use crate::keys::*;
pub use crate::static_table::StaticCandidateTable;

use crate::readers::RawTable;

/// A directory of candidates, filled at runtime from tabular sources.
///
/// The directory starts empty. Every successful load merges its rows into it:
/// new keys are added and existing keys are replaced. Nothing is ever removed.
///
/// Each load applies all its rows under one write lock, so two loads running at
/// the same time never interleave. They are applied in the order in which their
/// fetches complete.
#[derive(Debug, Default)]
pub struct CandidateDirectory {
    candidates: RwLock<HashMap<String, String>>,
    ready: AtomicBool,
}

impl CandidateDirectory {
    pub fn new() -> CandidateDirectory {
        CandidateDirectory::default()
    }

    /// Fetches a table, merges its rows into the directory and calls `on_complete`.
    ///
    /// If the source cannot be fetched or decoded, an error is returned, the callback
    /// is not called and the readiness flag is left untouched.
    pub async fn load_table<F>(
        &self,
        source: &TableSource,
        on_complete: F,
    ) -> Result<LoadSummary, DirectoryError>
    where
        F: FnOnce(&LoadSummary),
    {
        info!("load_table: fetching {:?}", source.location);
        let content = match readers::fetch(source).await {
            Ok(c) => c,
            Err(e) => {
                warn!("load_table: could not fetch {:?}: {}", source.location, e);
                return Err(e);
            }
        };
        debug!("load_table: {} bytes from {:?}", content.len(), source.location);
        let table = match readers::decode(source, &content) {
            Ok(t) => t,
            Err(e) => {
                warn!("load_table: could not decode {:?}: {}", source.location, e);
                return Err(e);
            }
        };

        let summary = self.apply(source.location.as_str(), &table);
        info!(
            "load_table: {:?}: {} rows read, {} loaded, {} skipped, {} overwritten",
            summary.location,
            summary.rows_read,
            summary.rows_loaded,
            summary.rows_skipped,
            summary.keys_overwritten
        );
        self.ready.store(true, Ordering::SeqCst);
        on_complete(&summary);
        Ok(summary)
    }

    /// Same as [CandidateDirectory::load_table], giving up after `timeout`.
    ///
    /// On timeout nothing from this source has been applied: rows are only merged
    /// once the whole content has arrived.
    pub async fn load_table_with_timeout<F>(
        &self,
        source: &TableSource,
        timeout: Duration,
        on_complete: F,
    ) -> Result<LoadSummary, DirectoryError>
    where
        F: FnOnce(&LoadSummary),
    {
        match tokio::time::timeout(timeout, self.load_table(source, on_complete)).await {
            Ok(res) => res,
            Err(_) => {
                warn!(
                    "load_table_with_timeout: {:?} timed out after {:?}",
                    source.location, timeout
                );
                Err(DirectoryError::Timeout {
                    table: source.location.clone(),
                    timeout,
                })
            }
        }
    }

    /// Merges rows that are already in memory. Does not change readiness.
    pub fn ingest_rows<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> LoadSummary {
        let table = RawTable {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.as_ref().to_string()).collect())
                .collect(),
            unreadable_rows: 0,
        };
        self.apply("<memory>", &table)
    }

    /// The candidate for a contest, or None when the directory has no entry.
    ///
    /// Contest, county and party are compared without regard to case. The year is
    /// compared by its string form.
    ///
    /// An entry whose candidate is empty is reported as missing.
    pub fn get_candidate<'a>(
        &self,
        contest: impl Into<Option<&'a str>>,
        year: impl Display,
        county: impl Into<Option<&'a str>>,
        party: impl Into<Option<&'a str>>,
    ) -> Option<String> {
        let key = directory_key(contest, year, county, party);
        let candidates = self.candidates.read().unwrap_or_else(PoisonError::into_inner);
        candidates
            .get(&key)
            .filter(|name| !name.is_empty())
            .cloned()
    }

    /// True once at least one load has completed, even if it loaded no row.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.candidates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn apply(&self, location: &str, table: &RawTable) -> LoadSummary {
        let mut summary = LoadSummary {
            location: location.to_string(),
            rows_read: table.rows.len() + table.unreadable_rows,
            rows_skipped: table.unreadable_rows,
            ..Default::default()
        };
        let mut candidates = self
            .candidates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (idx, row) in table.rows.iter().enumerate() {
            // Only the first five columns are read: contest, year, county, party, candidate.
            let (contest, year, county, party, candidate) = match row.as_slice() {
                [contest, year, county, party, candidate, ..] => {
                    (contest, year, county, party, candidate)
                }
                _ => {
                    debug!(
                        "apply: {}: row {}: skipping row with {} columns: {:?}",
                        location,
                        idx,
                        row.len(),
                        row
                    );
                    summary.rows_skipped += 1;
                    continue;
                }
            };
            let key = directory_key(
                contest.as_str(),
                year,
                county.as_str(),
                party.as_str(),
            );
            if let Some(previous) = candidates.insert(key.clone(), candidate.clone()) {
                debug!(
                    "apply: {}: row {}: {:?} replaces {:?} for {}",
                    location, idx, candidate, previous, key
                );
                summary.keys_overwritten += 1;
            }
            summary.rows_loaded += 1;
        }
        summary
    }
}
