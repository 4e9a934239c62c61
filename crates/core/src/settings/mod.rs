//! Settings module - project configuration and per-call credentials.

mod settings_model;

pub use settings_model::{
    Credentials, CrowdinSettings, ENV_ACCOUNT_KEY, ENV_ACCOUNT_LOGIN, ENV_BASE_URL, ENV_BRANCH,
    ENV_PROJECT_IDENTIFIER, ENV_PROJECT_KEY,
};
