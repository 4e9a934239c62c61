use async_trait::async_trait;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use super::branch_resolver::BranchResolver;
use super::download::DownloadOrchestrator;
use super::export::ExportOrchestrator;
use super::file_sync::FileSyncOrchestrator;
use super::sync_model::{SyncOptions, SyncReport};
use super::sync_traits::TranslationSyncServiceTrait;
use crate::api::{ServiceResponse, TranslationApi};
use crate::files::LocalFile;
use crate::notifications::NotificationSink;
use crate::settings::Credentials;

/// Entry point of the workflow for hosts.
///
/// Holds no state between calls besides its collaborators.
pub struct TranslationSyncService {
    branches: BranchResolver,
    files: FileSyncOrchestrator,
    exports: ExportOrchestrator,
    downloads: DownloadOrchestrator,
}

impl TranslationSyncService {
    pub fn new(api: Arc<dyn TranslationApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            branches: BranchResolver::new(api.clone()),
            files: FileSyncOrchestrator::new(api.clone(), notifier),
            exports: ExportOrchestrator::new(api.clone()),
            downloads: DownloadOrchestrator::new(api),
        }
    }
}

#[async_trait]
impl TranslationSyncServiceTrait for TranslationSyncService {
    async fn resolve_branch(
        &self,
        credentials: &Credentials,
        branch: Option<&str>,
    ) -> Option<String> {
        self.branches.resolve(credentials, branch).await
    }

    async fn upload_file(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
    ) -> Option<ServiceResponse> {
        self.files.sync(credentials, file, branch).await
    }

    async fn export_translations(
        &self,
        credentials: &Credentials,
        branch: Option<&str>,
    ) -> Option<ServiceResponse> {
        self.exports.export_translations(credentials, branch).await
    }

    async fn download_translations(
        &self,
        credentials: &Credentials,
        source: &LocalFile,
        branch: Option<&str>,
    ) -> PathBuf {
        self.downloads
            .download_translations(credentials, source, branch)
            .await
    }

    async fn sync_project(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
        options: SyncOptions,
    ) -> SyncReport {
        info!("[Crowdin] Starting project sync...");

        let upload = self.files.upload(credentials, file, branch).await;

        // Export and download run even when the upload failed.
        let export = if options.export {
            Some(self.exports.export_translations(credentials, branch).await)
        } else {
            None
        };

        let archive = match file {
            Some(source) if options.download => Some(
                self.downloads
                    .download_translations(credentials, source, branch)
                    .await,
            ),
            _ => None,
        };

        let report = SyncReport {
            upload,
            export,
            archive,
        };
        info!("[Crowdin] Project sync finished: {}", report);
        report
    }
}
