//! Writing generated files
//!
//! Existing files are left alone unless the sink is in [`WriteMode::Overwrite`].

use daogen::GeneratedFile;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What to do when the target path already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep the existing file and report it
    #[default]
    SkipExisting,
    /// Replace the existing file
    Overwrite,
}

/// Result of committing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Created a new file
    Written,
    /// Replaced an existing file
    Overwritten,
    /// Left an existing file untouched
    AlreadyExists,
}

/// Commits generated files below a project root
#[derive(Debug, Clone)]
pub struct OutputSink {
    root: PathBuf,
    mode: WriteMode,
}

impl OutputSink {
    /// Sink writing below `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    /// Absolute target of `file`
    #[must_use]
    pub fn target(&self, file: &GeneratedFile) -> PathBuf {
        self.root.join(&file.path)
    }

    /// Current contents of `file`'s target, if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists but cannot be read.
    pub fn existing(&self, file: &GeneratedFile) -> io::Result<Option<String>> {
        match fs::read_to_string(self.target(file)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write `file`, creating parent directories as needed
    ///
    /// Content goes to a temporary file beside the target first and is moved
    /// into place once fully written, so a target is either absent or complete.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be created or written.
    pub fn commit(&self, file: &GeneratedFile) -> io::Result<WriteOutcome> {
        let target = self.target(file);
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let staged = stage(parent, &file.content)?;
        let outcome = match self.mode {
            WriteMode::SkipExisting => match staged.persist_noclobber(&target) {
                Ok(_) => WriteOutcome::Written,
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::info!(path = %target.display(), "Already exists, skipped");
                    return Ok(WriteOutcome::AlreadyExists);
                }
                Err(e) => return Err(e.error),
            },
            WriteMode::Overwrite => {
                let outcome = if target.exists() {
                    WriteOutcome::Overwritten
                } else {
                    WriteOutcome::Written
                };
                staged.persist(&target).map_err(|e| e.error)?;
                outcome
            }
        };

        tracing::debug!(path = %target.display(), ?outcome, "Committed file");
        Ok(outcome)
    }
}

fn stage(dir: &Path, content: &str) -> io::Result<NamedTempFile> {
    let staged = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(staged.as_file());
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    drop(writer);
    Ok(staged)
}
