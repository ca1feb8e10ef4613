#![forbid(unsafe_code)]

//! tsv_scrub (tsvscrub) — batch line filter for tab-separated-values files.
//!
//! Sweeps one working directory: every entry whose name ends in `.tsv` is
//! read, stripped of the lines containing `:`, and rewritten in place.
//! Surviving lines keep their original order and their original terminators;
//! every other file in the directory is left untouched.
//!
//! This is deliberately a blind per-line substring filter, not a TSV parser:
//! no column awareness, no quoting, no escaping.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use tsv_scrub::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use tsv_scrub::logger::jsonl::JsonlWriter;
//! use tsv_scrub::sweep::SweepRunner;
//! ```

pub mod prelude;

pub mod core;
pub mod logger;
pub mod sweep;
