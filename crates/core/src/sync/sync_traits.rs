use async_trait::async_trait;
use std::path::PathBuf;

use super::sync_model::{SyncOptions, SyncReport};
use crate::api::ServiceResponse;
use crate::files::LocalFile;
use crate::settings::Credentials;

/// Trait for translation sync operations
///
/// None of the operations fail: remote and transport errors are logged and
/// surface as absent responses.
#[async_trait]
pub trait TranslationSyncServiceTrait: Send + Sync {
    /// Create `branch` remotely unless it exists. `None` when there is no
    /// usable branch.
    async fn resolve_branch(&self, credentials: &Credentials, branch: Option<&str>)
        -> Option<String>;

    /// Add `file` to the project, updating it when it is already there.
    async fn upload_file(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
    ) -> Option<ServiceResponse>;

    async fn export_translations(
        &self,
        credentials: &Credentials,
        branch: Option<&str>,
    ) -> Option<ServiceResponse>;

    /// Download every translation; returns the expected archive path.
    async fn download_translations(
        &self,
        credentials: &Credentials,
        source: &LocalFile,
        branch: Option<&str>,
    ) -> PathBuf;

    /// Upload, then export and download as `options` allow.
    async fn sync_project(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
        options: SyncOptions,
    ) -> SyncReport;
}
