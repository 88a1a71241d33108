//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for writing the output table.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Error creating or flushing the output file.
    #[error("Output file I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error serializing a record row.
    #[error("CSV serialization error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Categories of errors that can occur while surveying targets.
///
/// Used as keys into [`super::ProcessingStats`] so the end-of-run summary can
/// break failures down by cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/network errors observed during fetch
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestOtherError,
    // Per-field extraction fallbacks
    TitleExtractError,
    MetaDescriptionExtractError,
    // Worker boundary
    UnexpectedWorkerError,
    ChannelPutTimeout,
    // Collector
    CsvWriteError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable name used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestStatusError => "HTTP status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout",
            ErrorType::HttpRequestConnectError => "HTTP connect error",
            ErrorType::HttpRequestBodyError => "HTTP body read error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::TitleExtractError => "Title extract error",
            ErrorType::MetaDescriptionExtractError => "Meta description extract error",
            ErrorType::UnexpectedWorkerError => "Unexpected worker error",
            ErrorType::ChannelPutTimeout => "Result channel put timeout",
            ErrorType::CsvWriteError => "CSV write error",
        }
    }
}
