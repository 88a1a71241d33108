//! Bounded result channel connecting fetch workers to the collector.
//!
//! Multiple producers (one per worker), one consumer. A producer's `put`
//! blocks while the channel is full, up to a configured bound; the consumer
//! drains until every sender has been dropped. Records are neither lost nor
//! duplicated by the channel itself.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::models::SiteRecord;

/// Error returned when a worker's put cannot complete.
#[derive(Error, Debug)]
pub enum ChannelPutError {
    /// The channel stayed full past the put bound.
    #[error("result channel still full after {0:?}")]
    Timeout(Duration),

    /// The receiver was dropped before the put completed.
    #[error("result channel closed")]
    Closed,
}

/// Sending half, cloned into each fetch worker.
#[derive(Clone)]
pub struct RecordSender {
    tx: mpsc::Sender<SiteRecord>,
    put_timeout: Duration,
}

impl RecordSender {
    /// Enqueues one record, blocking while the channel is full up to the
    /// configured bound.
    pub async fn put(&self, record: SiteRecord) -> Result<(), ChannelPutError> {
        self.tx
            .send_timeout(record, self.put_timeout)
            .await
            .map_err(|e| match e {
                mpsc::error::SendTimeoutError::Timeout(_) => {
                    ChannelPutError::Timeout(self.put_timeout)
                }
                mpsc::error::SendTimeoutError::Closed(_) => ChannelPutError::Closed,
            })
    }
}

/// Receiving half, held by the collector.
pub struct RecordReceiver {
    rx: mpsc::Receiver<SiteRecord>,
}

impl RecordReceiver {
    /// Drains every record in arrival order. Returns once all senders have
    /// been dropped and the buffer is empty.
    pub async fn drain(mut self) -> Vec<SiteRecord> {
        let mut records = Vec::new();
        while let Some(record) = self.rx.recv().await {
            records.push(record);
        }
        records
    }
}

/// Creates a bounded result channel with the given capacity and put bound.
pub fn result_channel(capacity: usize, put_timeout: Duration) -> (RecordSender, RecordReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (RecordSender { tx, put_timeout }, RecordReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> SiteRecord {
        SiteRecord::failure(url, "test")
    }

    #[tokio::test]
    async fn test_drain_preserves_arrival_order() {
        let (sender, receiver) = result_channel(4, Duration::from_secs(1));
        sender.put(record("https://a.test")).await.unwrap();
        sender.put(record("https://b.test")).await.unwrap();
        sender.put(record("https://c.test")).await.unwrap();
        drop(sender);

        let records = receiver.drain().await;
        let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://a.test", "https://b.test", "https://c.test"]);
    }

    #[tokio::test]
    async fn test_put_times_out_when_full() {
        let (sender, _receiver) = result_channel(1, Duration::from_millis(50));
        sender.put(record("https://a.test")).await.unwrap();

        let err = sender.put(record("https://b.test")).await.unwrap_err();
        assert!(matches!(err, ChannelPutError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_put_fails_when_receiver_dropped() {
        let (sender, receiver) = result_channel(1, Duration::from_millis(50));
        drop(receiver);
        let err = sender.put(record("https://a.test")).await.unwrap_err();
        assert!(matches!(err, ChannelPutError::Closed));
    }

    #[tokio::test]
    async fn test_concurrent_producers_lose_nothing() {
        let n = 32usize;
        let (sender, receiver) = result_channel(n, Duration::from_secs(1));

        let mut handles = Vec::new();
        for i in 0..n {
            let sender = sender.clone();
            handles.push(tokio::spawn(async move {
                sender.put(record(&format!("https://{i}.test"))).await
            }));
        }
        drop(sender);
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let records = receiver.drain().await;
        assert_eq!(records.len(), n);
    }
}
