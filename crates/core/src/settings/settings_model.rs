use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{Error, Result};

pub const ENV_BASE_URL: &str = "CROWDIN_BASE_URL";
pub const ENV_PROJECT_IDENTIFIER: &str = "CROWDIN_PROJECT_IDENTIFIER";
pub const ENV_PROJECT_KEY: &str = "CROWDIN_PROJECT_KEY";
pub const ENV_ACCOUNT_LOGIN: &str = "CROWDIN_ACCOUNT_LOGIN";
pub const ENV_ACCOUNT_KEY: &str = "CROWDIN_ACCOUNT_KEY";
pub const ENV_BRANCH: &str = "CROWDIN_BRANCH";

/// Authentication material for a single API call.
///
/// Built fresh from [`CrowdinSettings`] for every call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub project_identifier: String,
    pub project_key: String,
    /// Personal account login, sent together with `account_key`
    pub account_login: Option<String>,
    /// Personal account API key; replaces the project key when present
    pub account_key: Option<String>,
}

impl Credentials {
    pub fn new(
        base_url: impl Into<String>,
        project_identifier: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            project_identifier: project_identifier.into(),
            project_key: project_key.into(),
            account_login: None,
            account_key: None,
        }
    }

    pub fn with_account(mut self, login: impl Into<String>, key: impl Into<String>) -> Self {
        self.account_login = Some(login.into());
        self.account_key = Some(key.into());
        self
    }

    /// URL of the project endpoints, always ending with a slash.
    pub fn project_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/project/{}/", base, self.project_identifier)
    }
}

/// Persisted project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdinSettings {
    pub base_url: String,
    pub project_identifier: String,
    pub project_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,
    /// Branch used when the caller does not name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

impl CrowdinSettings {
    /// Read settings from `CROWDIN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require =
            |key: &str| get(key).ok_or_else(|| Error::MissingConfigKey(key.to_string()));

        let base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_BASE_URL, base_url
            )));
        }

        let account_login = get(ENV_ACCOUNT_LOGIN);
        let account_key = get(ENV_ACCOUNT_KEY);
        if account_login.is_some() != account_key.is_some() {
            return Err(Error::InvalidConfigValue(format!(
                "{} and {} must be set together",
                ENV_ACCOUNT_LOGIN, ENV_ACCOUNT_KEY
            )));
        }

        Ok(Self {
            base_url,
            project_identifier: require(ENV_PROJECT_IDENTIFIER)?,
            project_key: require(ENV_PROJECT_KEY)?,
            account_login,
            account_key,
            default_branch: get(ENV_BRANCH),
        })
    }

    /// Build the credentials for one call.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            base_url: self.base_url.clone(),
            project_identifier: self.project_identifier.clone(),
            project_key: self.project_key.clone(),
            account_login: self.account_login.clone(),
            account_key: self.account_key.clone(),
        }
    }
}
