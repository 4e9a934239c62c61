use anyhow::{bail, Context, Result};
use log::info;
use std::sync::Arc;

use crowdin_sync_client::CrowdinApiClient;
use crowdin_sync_core::files::LocalFile;
use crowdin_sync_core::notifications::LogNotificationSink;
use crowdin_sync_core::settings::CrowdinSettings;
use crowdin_sync_core::sync::{
    SyncOptions, TranslationSyncService, TranslationSyncServiceTrait, UploadOutcome,
};

use crate::args::{BranchArgs, FileArgs, SyncArgs};

pub struct App {
    settings: CrowdinSettings,
    service: TranslationSyncService,
}

impl App {
    pub fn from_env() -> Result<Self> {
        let settings =
            CrowdinSettings::from_env().context("Failed to load Crowdin settings")?;
        let api = CrowdinApiClient::new().context("Failed to initialize HTTP client")?;
        let service = TranslationSyncService::new(Arc::new(api), Arc::new(LogNotificationSink));
        Ok(Self { settings, service })
    }

    /// Branch from the command line, else the configured default.
    fn branch<'a>(&'a self, args: &'a BranchArgs) -> Option<&'a str> {
        args.branch
            .as_deref()
            .or(self.settings.default_branch.as_deref())
    }

    fn source(args: &FileArgs) -> Result<LocalFile> {
        if !args.file.is_file() {
            bail!("Source file '{}' does not exist", args.file.display());
        }
        Ok(LocalFile::new(&args.file))
    }

    pub async fn upload(&self, args: FileArgs) -> Result<()> {
        let source = Self::source(&args)?;
        let response = self
            .service
            .upload_file(
                &self.settings.credentials(),
                Some(&source),
                self.branch(&args.branch),
            )
            .await;

        match response {
            Some(response) if response.is_http_success() => Ok(()),
            Some(response) => bail!("Upload of '{}' failed: {}", source.name(), response),
            None => bail!("Upload of '{}' did not complete", source.name()),
        }
    }

    pub async fn export(&self, args: BranchArgs) -> Result<()> {
        let response = self
            .service
            .export_translations(&self.settings.credentials(), self.branch(&args))
            .await;

        match response {
            Some(response) if response.success => Ok(()),
            Some(response) => bail!("Export failed: {}", response),
            None => bail!("Export did not complete"),
        }
    }

    pub async fn download(&self, args: FileArgs) -> Result<()> {
        let source = Self::source(&args)?;
        let archive = self
            .service
            .download_translations(
                &self.settings.credentials(),
                &source,
                self.branch(&args.branch),
            )
            .await;

        if !archive.is_file() {
            bail!("No archive at {}", archive.display());
        }
        info!("Translations saved to {}", archive.display());
        Ok(())
    }

    pub async fn sync(&self, args: SyncArgs) -> Result<()> {
        let source = Self::source(&args.target)?;
        let options = SyncOptions {
            export: !args.no_export,
            download: !args.no_download,
        };

        let report = self
            .service
            .sync_project(
                &self.settings.credentials(),
                Some(&source),
                self.branch(&args.target.branch),
                options,
            )
            .await;

        if report.upload.outcome == UploadOutcome::Failed {
            bail!("Sync failed: {}", report);
        }
        if let Some(archive) = report.archive.as_ref().filter(|a| !a.is_file()) {
            bail!("Sync finished without an archive at {}", archive.display());
        }
        Ok(())
    }
}
