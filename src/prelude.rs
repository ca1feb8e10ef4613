//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use tsv_scrub::prelude::*;
//! ```

// Core
pub use crate::core::errors::{Result, TsvError};

// Logger
pub use crate::logger::jsonl::{EventType, JsonlWriter, LogEntry, Severity};

// Sweep
pub use crate::sweep::candidates::CANDIDATE_SUFFIX;
pub use crate::sweep::filter::FILTER_BYTE;
pub use crate::sweep::{FileOutcome, SweepReport, SweepRunner};
