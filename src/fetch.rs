//! Fetch worker: one task per target, exactly one record per task.
//!
//! A worker never propagates an error to the dispatcher. Request failures
//! become failure records, anything else is caught at the worker boundary and
//! recorded as an unexpected error, so every target accounts for exactly one
//! channel put.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{error, info};
use reqwest::Client;
use scraper::Html;

use crate::channel::RecordSender;
use crate::error_handling::{categorize_reqwest_error, ErrorType, ProcessingStats};
use crate::html::{
    count_paragraphs, extract_https_links, extract_meta_description, extract_title,
};
use crate::models::{PageSummary, SiteRecord};

/// Surveys one target and enqueues its record.
///
/// Returns `true` if the record reached the channel, `false` if it was lost
/// to a put timeout (or a closed channel). The caller treats a `false` as a
/// lost record, not a task failure.
pub async fn survey_site(
    url: Arc<str>,
    client: Arc<Client>,
    sender: RecordSender,
    stats: Arc<ProcessingStats>,
) -> bool {
    let record = catch_into_record(&url, &stats, build_record(&url, &client, &stats)).await;

    match sender.put(record).await {
        Ok(()) => true,
        Err(e) => {
            stats.increment_error(ErrorType::ChannelPutTimeout);
            error!("Dropping record for {url}: {e}");
            false
        }
    }
}

/// Catch-all boundary around record building: a panic anywhere in
/// fetch/extract still yields a failure record instead of killing the task
/// without a put.
async fn catch_into_record(
    url: &str,
    stats: &ProcessingStats,
    fut: impl Future<Output = SiteRecord>,
) -> SiteRecord {
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(record) => record,
        Err(panic) => {
            stats.increment_error(ErrorType::UnexpectedWorkerError);
            let cause = panic_message(panic.as_ref());
            error!("Unexpected error processing {url}: {cause}");
            SiteRecord::failure(url, format!("Unexpected error: {cause}"))
        }
    }
}

/// Fetches one page and folds the response into a [`SiteRecord`].
async fn build_record(url: &str, client: &Client, stats: &ProcessingStats) -> SiteRecord {
    info!("Processing {url}");
    match fetch_page(url, client).await {
        Ok(body) => {
            // Parsing never fails; malformed HTML degrades to a partial document.
            let document = Html::parse_document(&body);
            let summary = PageSummary {
                title: extract_title(&document, stats),
                meta_description: extract_meta_description(&document, stats),
                paragraph_count: count_paragraphs(&document),
                links: extract_https_links(&document),
            };
            info!(
                "Successfully fetched {url} ({} links, {} paragraphs)",
                summary.link_count(),
                summary.paragraph_count
            );
            SiteRecord::success(url, summary)
        }
        Err(e) => {
            stats.increment_error(categorize_reqwest_error(&e));
            error!("Error fetching {url}: {e}");
            SiteRecord::failure(url, e.to_string())
        }
    }
}

/// Issues the GET and returns the body. Timeouts come from the client's
/// configured request timeout; a non-2xx status is an error.
async fn fetch_page(url: &str, client: &Client) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.text().await
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
