//! HTTP gateway for the Crowdin v1 project API.
//!
//! Every call goes to `<base_url>project/<identifier>/<endpoint>` and is
//! authenticated with query parameters.

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

use crowdin_sync_core::api::{ApiCall, ServiceResponse, SyncRequest, TranslationApi};
use crowdin_sync_core::constants::ARCHIVE_EXTENSION;
use crowdin_sync_core::settings::Credentials;

use crate::error::{ClientError, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the Crowdin project API.
///
/// Stateless apart from the connection pool: credentials come with each call.
#[derive(Debug, Clone)]
pub struct CrowdinApiClient {
    client: reqwest::Client,
}

impl CrowdinApiClient {
    /// Create a client with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Authentication and format parameters shared by every call.
    fn query(credentials: &Credentials, request: &SyncRequest) -> Vec<(String, String)> {
        let mut query = Vec::new();
        match (&credentials.account_login, &credentials.account_key) {
            (Some(login), Some(key)) => {
                query.push(("login".to_string(), login.clone()));
                query.push(("account-key".to_string(), key.clone()));
            }
            _ => query.push(("key".to_string(), credentials.project_key.clone())),
        }
        if request.json {
            query.push(("json".to_string(), String::new()));
        }
        query
    }

    fn url(credentials: &Credentials, call: ApiCall) -> String {
        format!("{}{}", credentials.project_url(), call.endpoint())
    }

    /// Read the status and body of a response.
    async fn parse_response(call: ApiCall, response: reqwest::Response) -> Result<ServiceResponse> {
        let status = response.status();
        let body = response.text().await?;
        debug!("[CrowdinApi] {} response ({}): {}", call, status, body);
        Ok(ServiceResponse::new(status.as_u16(), body))
    }

    /// Multipart form carrying the file payloads and the scalar fields.
    async fn file_form(request: &SyncRequest) -> Result<Form> {
        if request.files.is_empty() {
            return Err(ClientError::invalid_request("no files to upload"));
        }

        let mut form = Form::new();
        for (name, path) in &request.files {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| ClientError::io(path, e))?;
            let part = Part::bytes(bytes).file_name(name.clone());
            form = form.part(format!("files[{}]", name), part);
        }
        for (key, value) in request.form_fields() {
            form = form.text(key, value);
        }
        Ok(form)
    }

    async fn send_file(
        &self,
        call: ApiCall,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse> {
        let url = Self::url(credentials, call);
        debug!("[CrowdinApi] POST {} files={:?}", url, request.files.keys());

        let response = self
            .client
            .post(&url)
            .query(&Self::query(credentials, request))
            .multipart(Self::file_form(request).await?)
            .send()
            .await?;

        Self::parse_response(call, response).await
    }

    async fn send_add_directory(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse> {
        if request.name.as_deref().unwrap_or_default().is_empty() {
            return Err(ClientError::invalid_request("directory name is required"));
        }
        let url = Self::url(credentials, ApiCall::AddDirectory);
        debug!("[CrowdinApi] POST {} name={:?}", url, request.name);

        let response = self
            .client
            .post(&url)
            .query(&Self::query(credentials, request))
            .form(&request.form_fields())
            .send()
            .await?;

        Self::parse_response(ApiCall::AddDirectory, response).await
    }

    async fn send_export(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse> {
        let url = Self::url(credentials, ApiCall::ExportTranslations);
        let mut query = Self::query(credentials, request);
        if let Some(branch) = &request.branch {
            query.push(("branch".to_string(), branch.clone()));
        }
        debug!("[CrowdinApi] GET {} branch={:?}", url, request.branch);

        let response = self.client.get(&url).query(&query).send().await?;

        Self::parse_response(ApiCall::ExportTranslations, response).await
    }

    /// Fetch the package and store it as `<destination>/<package>.zip`.
    ///
    /// Only a successful download is written; error bodies are returned as
    /// text and nothing touches the disk.
    async fn send_download(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> Result<ServiceResponse> {
        let package = request
            .download_package
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ClientError::invalid_request("download package is required"))?;
        let destination = request
            .destination_folder
            .as_deref()
            .ok_or_else(|| ClientError::invalid_request("destination folder is required"))?;

        let archive_name = format!("{}.{}", package, ARCHIVE_EXTENSION);
        let url = format!(
            "{}{}/{}",
            credentials.project_url(),
            ApiCall::DownloadTranslations.endpoint(),
            urlencoding::encode(&archive_name)
        );
        let mut query = Self::query(credentials, request);
        if let Some(branch) = &request.branch {
            query.push(("branch".to_string(), branch.clone()));
        }
        debug!("[CrowdinApi] GET {} branch={:?}", url, request.branch);

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Self::parse_response(ApiCall::DownloadTranslations, response).await;
        }

        let bytes = response.bytes().await?;
        let archive = destination.join(&archive_name);
        write_archive(destination, &archive, &bytes).await?;
        debug!(
            "[CrowdinApi] Saved {} bytes to {}",
            bytes.len(),
            archive.display()
        );

        Ok(ServiceResponse::new(status.as_u16(), String::new()))
    }
}

async fn write_archive(destination: &Path, archive: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::create_dir_all(destination)
        .await
        .map_err(|e| ClientError::io(destination, e))?;
    tokio::fs::write(archive, bytes)
        .await
        .map_err(|e| ClientError::io(archive, e))
}

#[async_trait]
impl TranslationApi for CrowdinApiClient {
    async fn add_file(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> crowdin_sync_core::Result<ServiceResponse> {
        Ok(self.send_file(ApiCall::AddFile, credentials, request).await?)
    }

    async fn update_file(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> crowdin_sync_core::Result<ServiceResponse> {
        Ok(self
            .send_file(ApiCall::UpdateFile, credentials, request)
            .await?)
    }

    async fn add_directory(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> crowdin_sync_core::Result<ServiceResponse> {
        Ok(self.send_add_directory(credentials, request).await?)
    }

    async fn export_translations(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> crowdin_sync_core::Result<ServiceResponse> {
        Ok(self.send_export(credentials, request).await?)
    }

    async fn download_translations(
        &self,
        credentials: &Credentials,
        request: &SyncRequest,
    ) -> crowdin_sync_core::Result<ServiceResponse> {
        Ok(self.send_download(credentials, request).await?)
    }
}
