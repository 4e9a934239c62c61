use std::fmt;
use std::path::PathBuf;

use crate::api::ServiceResponse;

/// What happened to an uploaded source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file was given; nothing was sent.
    Skipped,
    Added,
    /// The file already existed and an update was sent.
    Updated,
    Failed,
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Skipped => write!(f, "skipped"),
            UploadOutcome::Added => write!(f, "added"),
            UploadOutcome::Updated => write!(f, "updated"),
            UploadOutcome::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub outcome: UploadOutcome,
    /// Branch the file was pushed into, if any
    pub branch: Option<String>,
    /// Response of the last call made; `None` when no call completed
    pub response: Option<ServiceResponse>,
}

impl UploadResult {
    pub fn new(
        outcome: UploadOutcome,
        branch: Option<String>,
        response: Option<ServiceResponse>,
    ) -> Self {
        Self {
            outcome,
            branch,
            response,
        }
    }

    pub fn skipped() -> Self {
        Self::new(UploadOutcome::Skipped, None, None)
    }
}

/// Optional stages run after the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub export: bool,
    pub download: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            export: true,
            download: true,
        }
    }
}

/// Summary of a full upload -> export -> download run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub upload: UploadResult,
    /// `None` when the export stage was disabled; `Some(None)` when it ran but
    /// the call did not complete
    pub export: Option<Option<ServiceResponse>>,
    /// Expected archive location; `None` when the download stage did not run
    pub archive: Option<PathBuf>,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload: {}", self.upload.outcome)?;
        if let Some(branch) = &self.upload.branch {
            write!(f, " (branch '{}')", branch)?;
        }
        match &self.export {
            None => write!(f, ", export: disabled")?,
            Some(None) => write!(f, ", export: failed")?,
            Some(Some(response)) => write!(f, ", export: {}", response)?,
        }
        match &self.archive {
            None => write!(f, ", download: disabled"),
            Some(path) => write!(f, ", archive: {}", path.display()),
        }
    }
}
