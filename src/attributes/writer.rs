//! Target file writes for downloaded templates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitattrError, Result};

use super::merge::merge_duplicate_directives;

/// How downloaded template content lands in the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Add the template after the existing content, then deduplicate.
    Append,
    /// Replace the file (or create it) with the template alone.
    Overwrite,
}

/// A resolved write: what to do and where.
#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub path: PathBuf,
}

impl Operation {
    /// Create an operation targeting `path`.
    pub fn new(kind: OperationKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Write `content` to the target according to the operation kind.
    ///
    /// Overwrite writes the content directly. Append reads the existing
    /// file, joins old and new with a blank separator, runs the duplicate
    /// merge, stages the result in `<target>.new`, then removes the original
    /// and renames the staged file into place. A crash mid-append leaves the
    /// original untouched; the staging file never survives a successful run.
    pub fn apply(&self, content: &str) -> Result<()> {
        match self.kind {
            OperationKind::Overwrite => write_file(&self.path, content),
            OperationKind::Append => {
                let existing = fs::read_to_string(&self.path)?;
                let combined = format!("{}\n{}", existing, content);
                let merged = merge_duplicate_directives(&combined);

                let staging = staging_path(&self.path);
                write_file(&staging, &merged)?;
                fs::remove_file(&self.path).map_err(|err| write_failed(&self.path, err))?;
                fs::rename(&staging, &self.path).map_err(|err| write_failed(&self.path, err))?;
                Ok(())
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|err| write_failed(path, err))
}

/// Failures name the path the failing step touched; for a staging write
/// that is `<target>.new`, not the target.
fn write_failed(path: &Path, err: std::io::Error) -> GitattrError {
    GitattrError::WriteFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// `<target>.new`, beside the target so the final rename stays on one
/// filesystem.
fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".new");
    PathBuf::from(name)
}
