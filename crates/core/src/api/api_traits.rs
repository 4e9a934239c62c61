use async_trait::async_trait;

use super::api_model::{ServiceResponse, SyncRequest};
use crate::errors::Result;
use crate::settings::Credentials;

/// Gateway to the translation service.
///
/// Each method performs exactly one authenticated remote call. An `Err` means
/// the call did not complete (network failure, unusable parameters); a
/// service-side rejection comes back as an `Ok` response to be classified.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn add_file(&self, credentials: &Credentials, request: &SyncRequest)
        -> Result<ServiceResponse>;

    async fn update_file(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse>;

    /// Create a directory, or a version branch when `is_branch` is set.
    async fn add_directory(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse>;

    /// Ask the service to build the translation packages.
    async fn export_translations(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse>;

    /// Fetch a translation package into `request.destination_folder`.
    async fn download_translations(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse>;
}
