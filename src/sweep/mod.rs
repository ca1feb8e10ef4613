//! Batch line filter: candidate selection, per-line filtering, in-place
//! rewrite.
//!
//! Pipeline: list working directory -> select `.tsv` candidates -> per file
//! read, filter, overwrite -> emit run report.
//!
//! Fail-fast: the first candidate that cannot be read or written aborts the
//! whole run. Files rewritten before the failure stay rewritten, files not
//! yet reached stay untouched. No rollback, no retry, no partial-write
//! recovery.

#![allow(missing_docs)]

pub mod candidates;
pub mod filter;


use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::errors::{Result, TsvError};
use crate::logger::jsonl::{EventType, JsonlWriter, LogEntry, Severity};
use crate::sweep::candidates::list_candidates;
use crate::sweep::filter::filter_lines;

/// Outcome of one rewritten candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub lines_kept: usize,
    pub lines_dropped: usize,
}

/// Summary after a sweep completes.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Candidates selected from the directory listing.
    pub files_matched: usize,
    /// Candidates read, filtered, and written back.
    pub files_rewritten: usize,
    pub lines_kept: usize,
    pub lines_dropped: usize,
    pub outcomes: Vec<FileOutcome>,
    pub duration: Duration,
}

/// The batch line filter: sweeps one working directory, rewriting every
/// `.tsv` candidate in place.
///
/// The target directory is an explicit parameter; only the binary reaches
/// for the process current directory.
pub struct SweepRunner {
    root: PathBuf,
}

impl SweepRunner {
    /// Create a runner for the given working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The working directory this runner sweeps.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run one sweep, streaming per-file events to `log`.
    ///
    /// Every matched file is rewritten, even when no line was dropped, so a
    /// second run over the same directory is a content no-op.
    pub fn run<W: Write>(&self, log: &mut JsonlWriter<W>) -> Result<SweepReport> {
        let start = Instant::now();

        let mut entry = LogEntry::new(EventType::SweepStart, Severity::Info);
        entry.path = Some(self.root.display().to_string());
        log.write_entry(&entry);

        let candidate_paths = match list_candidates(&self.root) {
            Ok(paths) => paths,
            Err(err) => {
                log_error(log, None, &err);
                return Err(err);
            }
        };

        let mut report = SweepReport {
            files_matched: candidate_paths.len(),
            files_rewritten: 0,
            lines_kept: 0,
            lines_dropped: 0,
            outcomes: Vec::with_capacity(candidate_paths.len()),
            duration: Duration::ZERO,
        };

        for path in candidate_paths {
            let outcome = match rewrite_file(&path) {
                Ok(outcome) => outcome,
                Err(err) => {
                    log_error(log, Some(&path), &err);
                    return Err(err);
                }
            };

            let mut entry = LogEntry::new(EventType::FileRewritten, Severity::Info);
            entry.path = Some(outcome.path.display().to_string());
            entry.lines_kept = Some(outcome.lines_kept);
            entry.lines_dropped = Some(outcome.lines_dropped);
            entry.ok = Some(true);
            log.write_entry(&entry);

            report.files_rewritten += 1;
            report.lines_kept += outcome.lines_kept;
            report.lines_dropped += outcome.lines_dropped;
            report.outcomes.push(outcome);
        }

        report.duration = start.elapsed();

        let mut entry = LogEntry::new(EventType::SweepComplete, Severity::Info);
        entry.path = Some(self.root.display().to_string());
        entry.files_rewritten = Some(report.files_rewritten);
        entry.lines_kept = Some(report.lines_kept);
        entry.lines_dropped = Some(report.lines_dropped);
        entry.duration_ms = Some(duration_ms(report.duration));
        entry.ok = Some(true);
        log.write_entry(&entry);

        Ok(report)
    }
}

/// Read, filter, and overwrite a single candidate.
///
/// The read handle is released before the write handle opens; each is scoped
/// to its own `fs` call.
fn rewrite_file(path: &Path) -> Result<FileOutcome> {
    let text = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
    let filtered = filter_lines(&text);
    fs::write(path, filtered.text.as_bytes()).map_err(|source| TsvError::io(path, source))?;

    Ok(FileOutcome {
        path: path.to_path_buf(),
        lines_kept: filtered.kept,
        lines_dropped: filtered.dropped,
    })
}

/// Map a failed read: invalid UTF-8 surfaces as an encoding failure,
/// anything else as plain IO.
fn read_error(path: &Path, source: std::io::Error) -> TsvError {
    if source.kind() == ErrorKind::InvalidData {
        TsvError::Encoding {
            path: path.to_path_buf(),
        }
    } else {
        TsvError::io(path, source)
    }
}

fn log_error<W: Write>(log: &mut JsonlWriter<W>, path: Option<&Path>, err: &TsvError) {
    let mut entry = LogEntry::new(EventType::Error, Severity::Critical);
    entry.path = path.map(|p| p.display().to_string());
    entry.error_code = Some(err.code().to_string());
    entry.error_message = Some(err.to_string());
    entry.ok = Some(false);
    log.write_entry(&entry);
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
