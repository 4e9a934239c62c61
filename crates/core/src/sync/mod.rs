//! Sync module - branch resolution, upload, export and download orchestration.

mod branch_resolver;
mod download;
mod export;
mod file_sync;
mod sync_model;
mod sync_service;
mod sync_traits;

#[cfg(test)]
mod sync_service_tests;

pub use branch_resolver::BranchResolver;
pub use download::DownloadOrchestrator;
pub use export::ExportOrchestrator;
pub use file_sync::FileSyncOrchestrator;
pub use sync_model::{SyncOptions, SyncReport, UploadOutcome, UploadResult};
pub use sync_service::TranslationSyncService;
pub use sync_traits::TranslationSyncServiceTrait;
