//! Interpretation of the service's overloaded status and error codes.

use std::fmt;

use super::api_model::{ApiCall, ServiceResponse};
use crate::constants::{BRANCH_ALREADY_EXISTS_CODE, FILE_CONFLICT_STATUS};

/// Workflow decision derived from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Success,
    /// The file is already in the project; retry as an update.
    Conflict,
    /// The branch is already there and can be used as is.
    AlreadyExists,
    Failure {
        code: Option<i64>,
        message: String,
    },
}

impl Classification {
    /// Whether the remote object the call targeted can be used afterwards.
    pub fn is_usable(&self) -> bool {
        matches!(self, Classification::Success | Classification::AlreadyExists)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Success => write!(f, "success"),
            Classification::Conflict => write!(f, "conflict"),
            Classification::AlreadyExists => write!(f, "already exists"),
            Classification::Failure {
                code: Some(code),
                message,
            } => write!(f, "failure (code {}: {})", code, message),
            Classification::Failure { code: None, message } => write!(f, "failure ({})", message),
        }
    }
}

/// Classify the response of `call`.
///
/// HTTP 400 on add-file means the file exists, whatever the body says. Error
/// code 50 only means "already exists" for add-directory.
pub fn classify(response: &ServiceResponse, call: ApiCall) -> Classification {
    if call == ApiCall::AddFile && response.status == FILE_CONFLICT_STATUS {
        return Classification::Conflict;
    }

    if response.success {
        return Classification::Success;
    }

    if call == ApiCall::AddDirectory && response.error_code == Some(BRANCH_ALREADY_EXISTS_CODE) {
        return Classification::AlreadyExists;
    }

    Classification::Failure {
        code: response.error_code,
        message: response
            .error_message
            .clone()
            .unwrap_or_else(|| format!("HTTP {}", response.status)),
    }
}
