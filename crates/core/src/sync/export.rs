use log::{error, info};
use std::sync::Arc;

use super::branch_resolver::non_empty;
use crate::api::{ServiceResponse, SyncRequest, TranslationApi};
use crate::constants::DEFAULT_BRANCH;
use crate::settings::Credentials;

/// Branch to scope an export to; the project root is never named.
pub(crate) fn export_branch(branch: Option<&str>) -> Option<&str> {
    non_empty(branch).filter(|b| *b != DEFAULT_BRANCH)
}

/// Triggers the server-side build of translation packages.
#[derive(Clone)]
pub struct ExportOrchestrator {
    api: Arc<dyn TranslationApi>,
}

impl ExportOrchestrator {
    pub fn new(api: Arc<dyn TranslationApi>) -> Self {
        Self { api }
    }

    /// Request an export and log the service's report verbatim.
    ///
    /// The report is not interpreted. `None` means the call did not complete.
    pub async fn export_translations(
        &self,
        credentials: &Credentials,
        branch: Option<&str>,
    ) -> Option<ServiceResponse> {
        let mut request = SyncRequest::json();
        if let Some(branch) = export_branch(branch) {
            request = request.branch(branch);
        }

        match self.api.export_translations(credentials, &request).await {
            Ok(response) => {
                info!("[Crowdin] export translations: {}", response);
                info!("{}", response.body);
                Some(response)
            }
            Err(e) => {
                error!("[Crowdin] export translations failed: {}", e);
                None
            }
        }
    }
}
