//! Where a finished report goes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The "download file" affordance: hands a finished report to the user.
pub trait ReportSink {
    /// Save `payload` under `filename`; returns where it ended up.
    fn save(&self, filename: &str, payload: &[u8]) -> io::Result<PathBuf>;
}

impl<S: ReportSink + ?Sized> ReportSink for &S {
    fn save(&self, filename: &str, payload: &[u8]) -> io::Result<PathBuf> {
        (**self).save(filename, payload)
    }
}

/// Saves reports into a directory.
///
/// The payload is first staged in a hidden temp file next to the destination,
/// then renamed over it. The staged file is removed on every failure path, and
/// an existing report with the same name is replaced.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for DirectorySink {
    fn save(&self, filename: &str, payload: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let final_path = self.dir.join(filename);

        let mut staged = tempfile::Builder::new()
            .prefix(".rgsa-")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        tracing::debug!(staged = %staged.path().display(), bytes = payload.len(), "staged report");

        staged.write_all(payload)?;
        staged.as_file().sync_all()?;
        staged.persist(&final_path).map_err(|e| e.error)?;

        Ok(final_path)
    }
}
