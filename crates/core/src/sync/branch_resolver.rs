//! Ensures a version branch exists before files are pushed into it.

use log::{debug, error, info};
use std::sync::Arc;

use crate::api::{classify, ApiCall, Classification, SyncRequest, TranslationApi};
use crate::settings::Credentials;

/// Treats an empty branch name the same as no branch.
pub(crate) fn non_empty(branch: Option<&str>) -> Option<&str> {
    branch.filter(|b| !b.is_empty())
}

/// Creates branches on demand, reusing ones that already exist.
#[derive(Clone)]
pub struct BranchResolver {
    api: Arc<dyn TranslationApi>,
}

impl BranchResolver {
    pub fn new(api: Arc<dyn TranslationApi>) -> Self {
        Self { api }
    }

    /// Make sure `branch` exists remotely and return its name.
    ///
    /// Returns `None` without any remote call for a missing or empty name.
    /// A branch that cannot be created also yields `None`: the failure is
    /// logged and the caller carries on against the project root.
    pub async fn resolve(&self, credentials: &Credentials, branch: Option<&str>) -> Option<String> {
        let branch = non_empty(branch)?;

        let request = SyncRequest::json().name(branch).is_branch(true);
        debug!("[Crowdin] Creating branch '{}'", branch);

        let response = match self.api.add_directory(credentials, &request).await {
            Ok(response) => response,
            Err(e) => {
                error!("[Crowdin] Branch '{}' not created: {}", branch, e);
                return None;
            }
        };

        match classify(&response, ApiCall::AddDirectory) {
            Classification::Success => {
                info!("[Crowdin] Branch '{}' created", branch);
                Some(branch.to_string())
            }
            Classification::AlreadyExists => {
                info!("[Crowdin] Branch '{}' with such name already exists", branch);
                Some(branch.to_string())
            }
            Classification::Failure { code, message } => {
                error!(
                    "[Crowdin] Branch '{}' not created (code: {:?}, message: {})",
                    branch, code, message
                );
                None
            }
            Classification::Conflict => {
                error!("[Crowdin] Branch '{}' not created: {}", branch, response);
                None
            }
        }
    }
}
