//! Candidate selection: a one-level directory listing filtered by file-name
//! suffix.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, TsvError};

/// File-name suffix selecting candidate files.
pub const CANDIDATE_SUFFIX: &str = ".tsv";

/// List the candidate files in `root`, in directory-listing order.
///
/// Selection is by file-name suffix only — no metadata lookup, no content
/// sniffing. A directory named `x.tsv` is therefore selected here and fails
/// the sweep later, when it is opened as a file.
pub fn list_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|source| {
        if source.kind() == ErrorKind::NotADirectory {
            TsvError::NotADirectory {
                path: root.to_path_buf(),
            }
        } else {
            TsvError::DirectoryList {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TsvError::DirectoryList {
            path: root.to_path_buf(),
            source,
        })?;
        if entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(CANDIDATE_SUFFIX.as_bytes())
        {
            candidates.push(entry.path());
        }
    }

    Ok(candidates)
}
