// JSON bodies of the web API

use serde::{Deserialize, Serialize};

/// One image file in the screenshot directory
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotInfo {
    pub filename: String,
    pub size: u64,
}

/// Response to DELETE /screenshots/{filename}
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_size: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BatchDeleteRequest {
    pub filenames: Vec<String>,
}

/// Response to POST /screenshots/batch-delete.
/// `success` is always true; per-file failures are listed in `failed_files`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub success: bool,
    pub deleted_size: u64,
    pub failed_files: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_saved_space: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShutdownResponse {
    pub message: String,
}
