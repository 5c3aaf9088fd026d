//! locator.rs - Recursive discovery of documents under a docs root.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SanitizerConfig;
use crate::errors::{MdxsanError, Result};

/// Returns the absolute paths of every file below `root` whose name ends in
/// one of the extensions listed in `config`, sorted by path. Symlinked
/// directories below the root are not entered.
///
/// Any failure to read the root or one of its subdirectories is returned as
/// an error; a partial listing is never produced.
pub fn find_documents(root: &Path, config: &SanitizerConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(MdxsanError::RootNotFound(root.to_path_buf()));
    }
    let root = root.canonicalize().map_err(|e| MdxsanError::io(root, e))?;

    let mut documents = Vec::new();
    scan_directory_recursive(&root, config, &mut documents)?;
    documents.sort();
    debug!("Found {} document(s) under {}", documents.len(), root.display());
    Ok(documents)
}

fn scan_directory_recursive(dir: &Path, config: &SanitizerConfig, documents: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| MdxsanError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| MdxsanError::io(dir, e))?;
        let path = entry.path();
        // Symlinked directories are not followed.
        let file_type = entry.file_type().map_err(|e| MdxsanError::io(&path, e))?;

        if file_type.is_dir() {
            scan_directory_recursive(&path, config, documents)?;
        } else if config.matches_extension(&path) {
            documents.push(path);
        }
    }

    Ok(())
}
