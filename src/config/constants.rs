//! Configuration constants.

use std::time::Duration;

/// Per-request fetch timeout, enforced on the HTTP client.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on a worker's blocking put into the result channel.
/// A put that stays blocked past this bound loses that worker's record.
pub const CHANNEL_PUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Floor for the result channel capacity when no explicit capacity is set.
/// The effective default is `max(target_count, DEFAULT_CHANNEL_CAPACITY)` so
/// the collector can drain after join-all without any worker blocking.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Default output filename.
pub const DEFAULT_OUTPUT_FILE: &str = "website_info.csv";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Output column order. Failure rows keep the same width, with the metadata
/// columns left empty and only Website and Error populated.
pub const CSV_HEADER: [&str; 7] = [
    "Website",
    "Title",
    "Meta Description",
    "Number of Paragraphs",
    "Number of Links",
    "HTTPS Links",
    "Error",
];

/// Built-in survey targets, used when no targets file is given.
pub const DEFAULT_TARGETS: [&str; 5] = [
    "https://www.wikipedia.org",
    "https://www.python.org",
    "https://www.example.com",
    "https://www.bbc.com",
    "https://www.github.com",
];
