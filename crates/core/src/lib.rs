//! Crowdin Sync Core - the branch, upload, export and download workflow.
//!
//! This crate decides which remote calls to make and how to read their
//! answers. It is transport-agnostic: the calls go through the
//! [`api::TranslationApi`] trait, implemented over HTTP by the
//! `crowdin-sync-client` crate.

pub mod api;
pub mod constants;
pub mod errors;
pub mod files;
pub mod notifications;
pub mod settings;
pub mod sync;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
