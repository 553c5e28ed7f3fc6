//! Exit codes for the CLI

use logsmith_core::LogsmithError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Changelog could not be written
pub const WRITE_ERROR: i32 = 4;

/// Pick the exit code for a failed command
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LogsmithError>() {
        Some(LogsmithError::Config(_)) => CONFIG_ERROR,
        Some(LogsmithError::Git(_)) => GIT_ERROR,
        Some(LogsmithError::Changelog(_)) | Some(LogsmithError::Io(_)) => WRITE_ERROR,
        _ => ERROR,
    }
}
