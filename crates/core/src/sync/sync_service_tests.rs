//! Tests for the sync orchestrators against a scripted gateway.
//!
//! The mock gateway records every call with its request and replays scripted
//! answers per call kind, so each test can assert exactly which remote calls
//! were issued and in what order.

#[cfg(test)]
mod tests {
    use crate::api::{ApiCall, ServiceResponse, SyncRequest, TranslationApi};
    use crate::errors::{Error, Result};
    use crate::files::LocalFile;
    use crate::notifications::{MockNotificationSink, Notification};
    use crate::settings::Credentials;
    use crate::sync::{
        BranchResolver, SyncOptions, TranslationSyncService, TranslationSyncServiceTrait,
        UploadOutcome,
    };
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock TranslationApi
    // =========================================================================

    #[derive(Clone)]
    enum Scripted {
        Respond(u16, String),
        TransportError,
    }

    #[derive(Clone, Default)]
    struct MockTranslationApi {
        calls: Arc<Mutex<Vec<(ApiCall, SyncRequest)>>>,
        script: Arc<Mutex<HashMap<ApiCall, VecDeque<Scripted>>>>,
    }

    impl MockTranslationApi {
        fn new() -> Self {
            Self::default()
        }

        fn respond(&self, call: ApiCall, status: u16, body: &str) -> &Self {
            self.script
                .lock()
                .unwrap()
                .entry(call)
                .or_default()
                .push_back(Scripted::Respond(status, body.to_string()));
            self
        }

        fn fail(&self, call: ApiCall) -> &Self {
            self.script
                .lock()
                .unwrap()
                .entry(call)
                .or_default()
                .push_back(Scripted::TransportError);
            self
        }

        fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().unwrap().iter().map(|(c, _)| *c).collect()
        }

        fn requests(&self, call: ApiCall) -> Vec<SyncRequest> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(c, _)| *c == call)
                .map(|(_, r)| r.clone())
                .collect()
        }

        fn answer(&self, call: ApiCall, request: &SyncRequest) -> Result<ServiceResponse> {
            self.calls.lock().unwrap().push((call, request.clone()));
            let next = self
                .script
                .lock()
                .unwrap()
                .get_mut(&call)
                .and_then(VecDeque::pop_front);
            match next {
                Some(Scripted::Respond(status, body)) => Ok(ServiceResponse::new(status, body)),
                Some(Scripted::TransportError) => Err(Error::transport("connection refused")),
                None => Ok(ServiceResponse::new(200, r#"{"success":true}"#)),
            }
        }
    }

    #[async_trait]
    impl TranslationApi for MockTranslationApi {
        async fn add_file(&self, _c: &Credentials, r: &SyncRequest) -> Result<ServiceResponse> {
            self.answer(ApiCall::AddFile, r)
        }

        async fn update_file(&self, _c: &Credentials, r: &SyncRequest) -> Result<ServiceResponse> {
            self.answer(ApiCall::UpdateFile, r)
        }

        async fn add_directory(
            &self,
            _c: &Credentials,
            r: &SyncRequest,
        ) -> Result<ServiceResponse> {
            self.answer(ApiCall::AddDirectory, r)
        }

        async fn export_translations(
            &self,
            _c: &Credentials,
            r: &SyncRequest,
        ) -> Result<ServiceResponse> {
            self.answer(ApiCall::ExportTranslations, r)
        }

        async fn download_translations(
            &self,
            _c: &Credentials,
            r: &SyncRequest,
        ) -> Result<ServiceResponse> {
            self.answer(ApiCall::DownloadTranslations, r)
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    const BRANCH_EXISTS: &str =
        r#"{"success":false,"error":{"code":50,"message":"Directory with such name already exists"}}"#;
    const INVALID_KEY: &str =
        r#"{"success":false,"error":{"code":3,"message":"API key is not valid"}}"#;

    fn credentials() -> Credentials {
        Credentials::new("https://api.crowdin.com/api/", "my-app", "secret")
    }

    fn strings_xml() -> LocalFile {
        LocalFile::new("app/res/values/strings.xml")
    }

    fn service(api: &MockTranslationApi) -> (TranslationSyncService, MockNotificationSink) {
        let sink = MockNotificationSink::new();
        let service = TranslationSyncService::new(Arc::new(api.clone()), Arc::new(sink.clone()));
        (service, sink)
    }

    // =========================================================================
    // Branch resolution
    // =========================================================================

    #[tokio::test]
    async fn test_resolve_without_branch_makes_no_call() {
        let api = MockTranslationApi::new();
        let resolver = BranchResolver::new(Arc::new(api.clone()));

        assert_eq!(resolver.resolve(&credentials(), None).await, None);
        assert_eq!(resolver.resolve(&credentials(), Some("")).await, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_sends_branch_flags() {
        let api = MockTranslationApi::new();
        let resolver = BranchResolver::new(Arc::new(api.clone()));

        let resolved = resolver.resolve(&credentials(), Some("release-1")).await;

        assert_eq!(resolved.as_deref(), Some("release-1"));
        let requests = api.requests(ApiCall::AddDirectory);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name.as_deref(), Some("release-1"));
        assert_eq!(requests[0].is_branch, Some(true));
        assert!(requests[0].branch.is_none());
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddDirectory, 200, r#"{"success":true}"#)
            .respond(ApiCall::AddDirectory, 200, BRANCH_EXISTS);
        let resolver = BranchResolver::new(Arc::new(api.clone()));

        let first = resolver.resolve(&credentials(), Some("release-1")).await;
        let second = resolver.resolve(&credentials(), Some("release-1")).await;

        assert_eq!(first, second);
        assert_eq!(second.as_deref(), Some("release-1"));
    }

    #[tokio::test]
    async fn test_resolve_existing_branch_is_usable() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddDirectory, 200, BRANCH_EXISTS);
        let resolver = BranchResolver::new(Arc::new(api.clone()));

        let resolved = resolver.resolve(&credentials(), Some("Release-1")).await;

        assert_eq!(resolved.as_deref(), Some("Release-1"));
    }

    #[tokio::test]
    async fn test_resolve_failure_yields_no_branch() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddDirectory, 200, INVALID_KEY);
        api.fail(ApiCall::AddDirectory);
        let resolver = BranchResolver::new(Arc::new(api.clone()));

        assert_eq!(resolver.resolve(&credentials(), Some("release-1")).await, None);
        assert_eq!(resolver.resolve(&credentials(), Some("release-1")).await, None);
        assert_eq!(api.calls().len(), 2);
    }

    // =========================================================================
    // File upload
    // =========================================================================

    #[tokio::test]
    async fn test_upload_without_file_makes_no_call() {
        let api = MockTranslationApi::new();
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), None, Some("release-1"))
            .await;

        assert!(response.is_none());
        assert!(api.calls().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_upload_added_issues_no_update() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddFile, 200, r#"{"success":true}"#);
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(api.calls(), vec![ApiCall::AddFile]);
        assert_eq!(sink.messages(), vec!["File 'strings.xml' added to Crowdin"]);
    }

    #[tokio::test]
    async fn test_upload_request_carries_file_and_pattern() {
        let api = MockTranslationApi::new();
        let (service, _sink) = service(&api);

        service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await;

        let request = &api.requests(ApiCall::AddFile)[0];
        assert_eq!(
            request.files.get("strings.xml"),
            Some(&PathBuf::from("app/res/values/strings.xml"))
        );
        assert_eq!(
            request.export_patterns.get("strings.xml").map(String::as_str),
            Some("/values-%two_letters_code%/%original_file_name%")
        );
        assert!(request.json);
        assert!(request.branch.is_none());
    }

    #[tokio::test]
    async fn test_upload_conflict_falls_back_to_single_update() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddFile, 400, "");
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(api.calls(), vec![ApiCall::AddFile, ApiCall::UpdateFile]);
        assert_eq!(
            api.requests(ApiCall::AddFile),
            api.requests(ApiCall::UpdateFile)
        );
        assert_eq!(sink.messages(), vec!["File 'strings.xml' updated in Crowdin"]);
    }

    #[tokio::test]
    async fn test_failed_update_is_not_retried() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddFile, 400, "")
            .respond(ApiCall::UpdateFile, 500, INVALID_KEY);
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(api.calls(), vec![ApiCall::AddFile, ApiCall::UpdateFile]);
        assert_eq!(
            sink.notifications(),
            vec![Notification::FileUpdated {
                file_name: "strings.xml".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_add_failure_ends_upload() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddFile, 200, INVALID_KEY);
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await
            .unwrap();

        assert_eq!(response.error_code, Some(3));
        assert_eq!(api.calls(), vec![ApiCall::AddFile]);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_returns_no_response() {
        let api = MockTranslationApi::new();
        api.fail(ApiCall::AddFile);
        let (service, sink) = service(&api);

        let response = service
            .upload_file(&credentials(), Some(&strings_xml()), None)
            .await;

        assert!(response.is_none());
        assert_eq!(api.calls(), vec![ApiCall::AddFile]);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_upload_continues_without_branch_when_creation_fails() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddDirectory, 200, INVALID_KEY);
        let (service, _sink) = service(&api);

        service
            .upload_file(&credentials(), Some(&strings_xml()), Some("release-1"))
            .await;

        assert_eq!(api.calls(), vec![ApiCall::AddDirectory, ApiCall::AddFile]);
        assert!(api.requests(ApiCall::AddFile)[0].branch.is_none());
    }

    // =========================================================================
    // Export
    // =========================================================================

    #[tokio::test]
    async fn test_export_project_root_has_no_branch() {
        let api = MockTranslationApi::new();
        let (service, _sink) = service(&api);

        for branch in [None, Some(""), Some("master")] {
            service.export_translations(&credentials(), branch).await;
        }

        let requests = api.requests(ApiCall::ExportTranslations);
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.branch.is_none()));
    }

    #[tokio::test]
    async fn test_export_named_branch() {
        let api = MockTranslationApi::new();
        api.respond(
            ApiCall::ExportTranslations,
            200,
            r#"{"success":{"status":"built"}}"#,
        );
        let (service, _sink) = service(&api);

        let response = service
            .export_translations(&credentials(), Some("release-1"))
            .await
            .unwrap();

        assert_eq!(response.body, r#"{"success":{"status":"built"}}"#);
        assert_eq!(
            api.requests(ApiCall::ExportTranslations)[0].branch.as_deref(),
            Some("release-1")
        );
    }

    #[tokio::test]
    async fn test_export_transport_error() {
        let api = MockTranslationApi::new();
        api.fail(ApiCall::ExportTranslations);
        let (service, _sink) = service(&api);

        assert!(service.export_translations(&credentials(), None).await.is_none());
    }

    // =========================================================================
    // Download
    // =========================================================================

    #[tokio::test]
    async fn test_download_returns_archive_in_resource_root() {
        let api = MockTranslationApi::new();
        let (service, _sink) = service(&api);

        let archive = service
            .download_translations(&credentials(), &strings_xml(), Some("master"))
            .await;

        assert_eq!(archive, PathBuf::from("app/res/all.zip"));
        let request = &api.requests(ApiCall::DownloadTranslations)[0];
        assert_eq!(request.download_package.as_deref(), Some("all"));
        assert_eq!(request.destination_folder, Some(PathBuf::from("app/res")));
        assert_eq!(request.branch.as_deref(), Some("master"));
    }

    #[tokio::test]
    async fn test_download_returns_archive_even_on_failure() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::DownloadTranslations, 404, "Not found")
            .fail(ApiCall::DownloadTranslations);
        let (service, _sink) = service(&api);

        for _ in 0..2 {
            let archive = service
                .download_translations(&credentials(), &strings_xml(), Some(""))
                .await;
            assert_eq!(archive, PathBuf::from("app/res/all.zip"));
        }
        assert!(api
            .requests(ApiCall::DownloadTranslations)
            .iter()
            .all(|r| r.branch.is_none()));
    }

    // =========================================================================
    // End to end
    // =========================================================================

    #[tokio::test]
    async fn test_new_branch_then_conflicting_file() {
        let api = MockTranslationApi::new();
        api.respond(ApiCall::AddDirectory, 200, r#"{"success":true}"#)
            .respond(ApiCall::AddFile, 400, "");
        let (service, sink) = service(&api);

        let report = service
            .sync_project(
                &credentials(),
                Some(&strings_xml()),
                Some("release-1"),
                SyncOptions::default(),
            )
            .await;

        assert_eq!(
            api.calls(),
            vec![
                ApiCall::AddDirectory,
                ApiCall::AddFile,
                ApiCall::UpdateFile,
                ApiCall::ExportTranslations,
                ApiCall::DownloadTranslations,
            ]
        );
        assert_eq!(
            api.requests(ApiCall::AddFile)[0].branch.as_deref(),
            Some("release-1")
        );
        assert_eq!(report.upload.outcome, UploadOutcome::Updated);
        assert_eq!(report.upload.branch.as_deref(), Some("release-1"));
        assert_eq!(report.archive, Some(PathBuf::from("app/res/all.zip")));
        assert_eq!(sink.messages(), vec!["File 'strings.xml' updated in Crowdin"]);
    }

    #[tokio::test]
    async fn test_new_branch_then_new_file() {
        let api = MockTranslationApi::new();
        let (service, sink) = service(&api);

        let report = service
            .sync_project(
                &credentials(),
                Some(&strings_xml()),
                Some("release-1"),
                SyncOptions {
                    export: false,
                    download: false,
                },
            )
            .await;

        assert_eq!(api.calls(), vec![ApiCall::AddDirectory, ApiCall::AddFile]);
        assert_eq!(report.upload.outcome, UploadOutcome::Added);
        assert_eq!(report.export, None);
        assert_eq!(report.archive, None);
        assert_eq!(sink.messages(), vec!["File 'strings.xml' added to Crowdin"]);
    }

    #[tokio::test]
    async fn test_failed_upload_still_exports_and_downloads() {
        let api = MockTranslationApi::new();
        api.fail(ApiCall::AddFile).fail(ApiCall::ExportTranslations);
        let (service, _sink) = service(&api);

        let report = service
            .sync_project(
                &credentials(),
                Some(&strings_xml()),
                None,
                SyncOptions::default(),
            )
            .await;

        assert_eq!(report.upload.outcome, UploadOutcome::Failed);
        assert_eq!(report.export, Some(None));
        assert_eq!(report.archive, Some(PathBuf::from("app/res/all.zip")));
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::AddFile,
                ApiCall::ExportTranslations,
                ApiCall::DownloadTranslations,
            ]
        );
    }

    #[tokio::test]
    async fn test_sync_without_file_only_exports() {
        let api = MockTranslationApi::new();
        let (service, _sink) = service(&api);

        let report = service
            .sync_project(&credentials(), None, Some("master"), SyncOptions::default())
            .await;

        assert_eq!(report.upload.outcome, UploadOutcome::Skipped);
        assert_eq!(report.archive, None);
        assert_eq!(api.calls(), vec![ApiCall::ExportTranslations]);
    }
}
