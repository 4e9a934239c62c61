//! Crowdin Sync Client - HTTP gateway for the Crowdin v1 project API.
//!
//! Implements [`crowdin_sync_core::api::TranslationApi`] on top of reqwest.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crowdin_sync_client::CrowdinApiClient;
//! use crowdin_sync_core::notifications::LogNotificationSink;
//! use crowdin_sync_core::sync::TranslationSyncService;
//!
//! let api = Arc::new(CrowdinApiClient::new()?);
//! let service = TranslationSyncService::new(api, Arc::new(LogNotificationSink));
//! ```

mod client;
mod error;

pub use client::{CrowdinApiClient, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, Result};
