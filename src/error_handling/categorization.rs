//! Error categorization.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an [`ErrorType`].
///
/// Status failures (from `error_for_status`) take precedence, then the
/// network-level error kinds reqwest exposes.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

// Categorization of real reqwest::Error values needs actual responses, so the
// coverage lives in the httptest-backed tests in src/fetch.rs.
