/// Default endpoint of the Crowdin v1 project API
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/";

/// Name the service gives the project root; never sent as a branch on export
pub const DEFAULT_BRANCH: &str = "master";

/// Export pattern attached to every uploaded source file.
///
/// Places each translation next to the source resources, in a
/// `values-<lang>` folder, keeping the original file name.
pub const EXPORT_PATTERN_TEMPLATE: &str = "/values-%two_letters_code%/%original_file_name%";

/// Package selector that downloads every target language
pub const DOWNLOAD_PACKAGE_ALL: &str = "all";

/// Extension of downloaded translation packages
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Envelope error code returned by add-directory when the branch exists
pub const BRANCH_ALREADY_EXISTS_CODE: i64 = 50;

/// HTTP status add-file answers with when the file is already in the project
pub const FILE_CONFLICT_STATUS: u16 = 400;
