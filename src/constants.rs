//! Constants used throughout the application
//!
//! This module centralizes user-facing text, storage keys and default values
//! so every front end presents the same wording.

// Notification titles
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_SUCCESS: &str = "Success!";
pub const TITLE_DELETED: &str = "Deleted!";

// Confirmation prompts
pub const CONFIRM_DEFAULT_LABEL: &str = "Yes, proceed";
pub const CONFIRM_CANCEL_LABEL: &str = "Cancel";
pub const CONFIRM_DELETE_TITLE: &str = "Are you sure?";
pub const CONFIRM_DELETE_LABEL: &str = "Yes, delete it";
pub const DEFAULT_ITEM_NAME: &str = "this item";

// Busy indicator labels
pub const BUSY_DELETING: &str = "Deleting...";
pub const BUSY_SAVING: &str = "Saving...";
pub const BUSY_EXCEL: &str = "Generating Excel file...";
pub const BUSY_PDF: &str = "Generating PDF file...";

// Success messages
pub const SUCCESS_ITEM_DELETED: &str = "Item has been deleted.";
pub const SUCCESS_OPERATION_COMPLETED: &str = "Operation completed successfully.";
pub const SUCCESS_FILE_DOWNLOADED: &str = "File downloaded successfully!";

// Error messages
pub const ERROR_DELETE_FAILED: &str = "Failed to delete item.";
pub const ERROR_DELETE_REQUEST: &str = "An error occurred while deleting.";
pub const ERROR_GENERIC: &str = "An error occurred.";
pub const ERROR_REQUEST_RETRY: &str = "An error occurred. Please try again.";
pub const ERROR_DOWNLOAD_FAILED: &str = "Failed to download file.";

// Downloads
pub const DOWNLOAD_DEFAULT_EXCEL: &str = "download.xlsx";
pub const DOWNLOAD_DEFAULT_PDF: &str = "download.pdf";

// Theme
/// Preference key holding the persisted theme name
pub const THEME_KEY: &str = "theme";
pub const THEME_LABEL_LIGHT_MODE: &str = "Light Mode";
pub const THEME_LABEL_DARK_MODE: &str = "Dark Mode";

// Files and directories
pub const APP_DIR_NAME: &str = "ajaxctl";
pub const CONFIG_FILE_LOCAL: &str = "ajaxctl.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const LOG_FILE_NAME: &str = "ajaxctl.log";

// Configuration defaults
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Default request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound for the request timeout in seconds
pub const HTTP_MAX_TIMEOUT_SECS: u64 = 600;

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
