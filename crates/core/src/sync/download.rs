use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

use super::branch_resolver::non_empty;
use crate::api::{SyncRequest, TranslationApi};
use crate::constants::{ARCHIVE_EXTENSION, DOWNLOAD_PACKAGE_ALL};
use crate::files::LocalFile;
use crate::settings::Credentials;

/// Fetches the package with every translation into the resource root.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    api: Arc<dyn TranslationApi>,
}

impl DownloadOrchestrator {
    pub fn new(api: Arc<dyn TranslationApi>) -> Self {
        Self { api }
    }

    /// Path the archive for `source` is downloaded to.
    pub fn archive_path(source: &LocalFile) -> PathBuf {
        source
            .resource_root()
            .join(format!("{}.{}", DOWNLOAD_PACKAGE_ALL, ARCHIVE_EXTENSION))
    }

    /// Download the "all" package next to the resources `source` lives in.
    ///
    /// Returns where the archive is expected whatever the remote outcome; the
    /// file is not checked on disk.
    pub async fn download_translations(
        &self,
        credentials: &Credentials,
        source: &LocalFile,
        branch: Option<&str>,
    ) -> PathBuf {
        let mut request = SyncRequest::json()
            .download_package(DOWNLOAD_PACKAGE_ALL)
            .destination_folder(source.resource_root());
        if let Some(branch) = non_empty(branch) {
            request = request.branch(branch);
        }

        match self.api.download_translations(credentials, &request).await {
            Ok(response) => {
                info!("[Crowdin] download translations: {}", response);
                if !response.body.is_empty() {
                    info!("{}", response.body);
                }
            }
            Err(e) => error!("[Crowdin] download translations failed: {}", e),
        }

        Self::archive_path(source)
    }
}
