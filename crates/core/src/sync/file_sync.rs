//! Pushes one source file: add first, update when it is already there.

use log::{error, info, warn};
use std::sync::Arc;

use super::branch_resolver::BranchResolver;
use super::sync_model::{UploadOutcome, UploadResult};
use crate::api::{classify, ApiCall, Classification, ServiceResponse, SyncRequest, TranslationApi};
use crate::constants::EXPORT_PATTERN_TEMPLATE;
use crate::files::LocalFile;
use crate::notifications::{Notification, NotificationSink};
use crate::settings::Credentials;

pub struct FileSyncOrchestrator {
    api: Arc<dyn TranslationApi>,
    branches: BranchResolver,
    notifier: Arc<dyn NotificationSink>,
}

impl FileSyncOrchestrator {
    pub fn new(api: Arc<dyn TranslationApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            branches: BranchResolver::new(api.clone()),
            api,
            notifier,
        }
    }

    /// Upload `file`, returning the response of the last call made.
    pub async fn sync(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
    ) -> Option<ServiceResponse> {
        self.upload(credentials, file, branch).await.response
    }

    /// Upload `file` and report what happened to it.
    ///
    /// Issues at most one add and one update. An absent file is skipped
    /// without any remote call.
    pub async fn upload(
        &self,
        credentials: &Credentials,
        file: Option<&LocalFile>,
        branch: Option<&str>,
    ) -> UploadResult {
        let Some(file) = file else {
            return UploadResult::skipped();
        };

        let file_name = file.name();
        let mut request = SyncRequest::json()
            .file(file_name.as_str(), file.canonical_path())
            .export_pattern(file_name.as_str(), EXPORT_PATTERN_TEMPLATE);

        let branch = self.branches.resolve(credentials, branch).await;
        if let Some(name) = &branch {
            request = request.branch(name.as_str());
        }

        let added = match self.api.add_file(credentials, &request).await {
            Ok(response) => response,
            Err(e) => {
                error!("[Crowdin] add file '{}' failed: {}", file_name, e);
                return UploadResult::new(UploadOutcome::Failed, branch, None);
            }
        };
        info!("[Crowdin] add file '{}': {}", file_name, added);

        match classify(&added, ApiCall::AddFile) {
            Classification::Success => {
                self.notifier.notify(Notification::FileAdded {
                    file_name: file_name.clone(),
                });
                UploadResult::new(UploadOutcome::Added, branch, Some(added))
            }
            Classification::Conflict => self.update(credentials, &request, file_name, branch).await,
            classification => {
                error!(
                    "[Crowdin] File '{}' not added: {}",
                    file_name, classification
                );
                UploadResult::new(UploadOutcome::Failed, branch, Some(added))
            }
        }
    }

    /// The single update attempt following an add conflict.
    async fn update(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
        file_name: String,
        branch: Option<String>,
    ) -> UploadResult {
        let updated = match self.api.update_file(credentials, request).await {
            Ok(response) => response,
            Err(e) => {
                error!("[Crowdin] update file '{}' failed: {}", file_name, e);
                return UploadResult::new(UploadOutcome::Failed, branch, None);
            }
        };
        info!("[Crowdin] update file '{}': {}", file_name, updated);

        let classification = classify(&updated, ApiCall::UpdateFile);
        if !classification.is_usable() {
            warn!(
                "[Crowdin] update file '{}' reported {}",
                file_name, classification
            );
        }

        self.notifier
            .notify(Notification::FileUpdated { file_name });
        UploadResult::new(UploadOutcome::Updated, branch, Some(updated))
    }
}
