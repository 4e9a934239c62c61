use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The remote calls the workflow issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCall {
    AddFile,
    UpdateFile,
    /// Creates a directory; with `is_branch` set it creates a version branch.
    AddDirectory,
    ExportTranslations,
    DownloadTranslations,
}

impl ApiCall {
    /// Path segment of the call under the project URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiCall::AddFile => "add-file",
            ApiCall::UpdateFile => "update-file",
            ApiCall::AddDirectory => "add-directory",
            ApiCall::ExportTranslations => "export",
            ApiCall::DownloadTranslations => "download",
        }
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCall::AddFile => write!(f, "add file"),
            ApiCall::UpdateFile => write!(f, "update file"),
            ApiCall::AddDirectory => write!(f, "add directory"),
            ApiCall::ExportTranslations => write!(f, "export translations"),
            ApiCall::DownloadTranslations => write!(f, "download translations"),
        }
    }
}

/// Parameters of one API call.
///
/// Only the options a call needs are populated; unset options are skipped
/// both when serializing and when building the wire fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncRequest {
    /// Remote file name -> local path of the payload
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, PathBuf>,
    /// Remote file name -> export pattern
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub export_patterns: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_folder: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_branch: Option<bool>,
    /// Ask the service for a JSON envelope instead of XML
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub json: bool,
}

impl SyncRequest {
    /// An empty request asking for JSON responses.
    pub fn json() -> Self {
        Self {
            json: true,
            ..Self::default()
        }
    }

    pub fn file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.files.insert(name.into(), path.into());
        self
    }

    pub fn export_pattern(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.export_patterns.insert(name.into(), pattern.into());
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn download_package(mut self, package: impl Into<String>) -> Self {
        self.download_package = Some(package.into());
        self
    }

    pub fn destination_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.destination_folder = Some(folder.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_branch(mut self, is_branch: bool) -> Self {
        self.is_branch = Some(is_branch);
        self
    }

    /// Scalar wire fields of the request, in a stable order.
    ///
    /// File payloads, the package selector and the destination folder are not
    /// fields: the gateway sends payloads as multipart parts, puts the package
    /// in the URL path and keeps the destination folder local.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for (file_name, pattern) in &self.export_patterns {
            fields.push((format!("export_patterns[{}]", file_name), pattern.clone()));
        }
        if let Some(name) = &self.name {
            fields.push(("name".to_string(), name.clone()));
        }
        if let Some(is_branch) = self.is_branch {
            let flag = if is_branch { "1" } else { "0" };
            fields.push(("is_branch".to_string(), flag.to_string()));
        }
        if let Some(branch) = &self.branch {
            fields.push(("branch".to_string(), branch.clone()));
        }
        fields
    }
}

/// Outcome of one remote call as the workflow sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    /// Raw body; empty for binary downloads that were written to disk
    pub body: String,
    /// `success` of the JSON envelope, or the HTTP status class without one
    pub success: bool,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

impl ServiceResponse {
    /// Build a response from the status and raw body, parsing the
    /// `{"success": .., "error": {"code": .., "message": ..}}` envelope when
    /// the body carries one.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut response = Self {
            status,
            success: (200..300).contains(&status),
            error_code: None,
            error_message: None,
            body,
        };

        let Ok(Value::Object(envelope)) = serde_json::from_str::<Value>(&response.body) else {
            return response;
        };
        let Some(success) = envelope.get("success").and_then(Value::as_bool) else {
            return response;
        };

        response.success = success;
        if let Some(error) = envelope.get("error").and_then(Value::as_object) {
            response.error_code = error.get("code").and_then(|code| match code {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            });
            response.error_message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
        }
        response
    }

    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for ServiceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        match (self.error_code, &self.error_message) {
            (Some(code), Some(message)) => write!(f, " (code {}: {})", code, message),
            (Some(code), None) => write!(f, " (code {})", code),
            (None, Some(message)) => write!(f, " ({})", message),
            (None, None) => Ok(()),
        }
    }
}
