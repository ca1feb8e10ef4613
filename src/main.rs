#![forbid(unsafe_code)]

//! tsvscrub — batch `.tsv` line filter entry point.
//!
//! No flags, no subcommands: the tool sweeps the process current directory,
//! streams JSONL events to stderr, and exits 0 on success or 1 on the first
//! failure.

use std::io;

use tsv_scrub::prelude::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("tsvscrub: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().map_err(|source| TsvError::io(".", source))?;
    let mut log = JsonlWriter::new(io::stderr().lock());
    SweepRunner::new(cwd).run(&mut log)?;
    log.flush();
    Ok(())
}
