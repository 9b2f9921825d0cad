//! Sequential publisher: for each selected entry, update the video's
//! metadata on the platform, then copy it into the destination playlist.
//!
//! The two calls per entry are independent network operations with no
//! transactional coupling, and a per-entry failure never aborts the batch.
//! Entries are processed strictly one at a time so progress output stays
//! ordered and the API never sees a burst.

use anyhow::Result;
use tracing::{info, warn};

use crate::models::VideoEntry;

/// The two platform calls the publisher makes, split out so each can be
/// exercised independently in tests.
pub trait PublishApi {
    async fn update_video(&self, video_id: &str, title: &str) -> Result<()>;
    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()>;
}

/// Outcome counts for the publish loop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub attempted: usize,
    pub updated: usize,
    pub inserted: usize,
}

/// Publish the ordered selection one entry at a time.
///
/// Entries with an empty id or title are skipped silently before either
/// call. A failed update is logged as a warning and the insert for the same
/// entry is still attempted.
pub async fn publish_all(
    api: &impl PublishApi,
    entries: &[VideoEntry],
    target_playlist_id: &str,
) -> PublishReport {
    let mut report = PublishReport::default();

    for entry in entries {
        if entry.video_id.is_empty() || entry.title.is_empty() {
            continue;
        }
        report.attempted += 1;

        match api.update_video(&entry.video_id, &entry.title).await {
            Ok(()) => {
                report.updated += 1;
                info!(title = %entry.title, "updated video metadata");
            }
            Err(e) => warn!(title = %entry.title, "update failed: {e:#}"),
        }

        match api
            .insert_playlist_item(target_playlist_id, &entry.video_id)
            .await
        {
            Ok(()) => {
                report.inserted += 1;
                info!(title = %entry.title, "copied into destination playlist");
            }
            Err(e) => warn!(title = %entry.title, "playlist insert failed: {e:#}"),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records calls in order; failures are configurable per call kind.
    #[derive(Default)]
    struct MockApi {
        fail_updates: bool,
        fail_inserts: bool,
        calls: RefCell<Vec<String>>,
    }

    impl PublishApi for MockApi {
        async fn update_video(&self, video_id: &str, _title: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("update {}", video_id));
            if self.fail_updates {
                anyhow::bail!("update rejected")
            }
            Ok(())
        }

        async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("insert {} -> {}", video_id, playlist_id));
            if self.fail_inserts {
                anyhow::bail!("insert rejected")
            }
            Ok(())
        }
    }

    fn entry(id: &str, title: &str) -> VideoEntry {
        VideoEntry {
            video_id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_happy_path_counts_both_calls() {
        let api = MockApi::default();
        let entries = vec![entry("a", "3.1"), entry("b", "3.2")];

        let report = publish_all(&api, &entries, "PL1").await;

        assert_eq!(report.attempted, 2);
        assert_eq!(report.updated, 2);
        assert_eq!(report.inserted, 2);
        assert_eq!(
            *api.calls.borrow(),
            vec!["update a", "insert a -> PL1", "update b", "insert b -> PL1"]
        );
    }

    #[tokio::test]
    async fn test_insert_attempted_even_when_update_fails() {
        let api = MockApi {
            fail_updates: true,
            ..Default::default()
        };
        let entries = vec![entry("a", "3.1")];

        let report = publish_all(&api, &entries, "PL1").await;

        assert_eq!(report.attempted, 1);
        assert_eq!(report.updated, 0);
        assert_eq!(report.inserted, 1);
        assert_eq!(*api.calls.borrow(), vec!["update a", "insert a -> PL1"]);
    }

    #[tokio::test]
    async fn test_insert_failure_does_not_abort_batch() {
        let api = MockApi {
            fail_inserts: true,
            ..Default::default()
        };
        let entries = vec![entry("a", "3.1"), entry("b", "3.2")];

        let report = publish_all(&api, &entries, "PL1").await;

        assert_eq!(report.attempted, 2);
        assert_eq!(report.updated, 2);
        assert_eq!(report.inserted, 0);
    }

    #[tokio::test]
    async fn test_entries_missing_id_or_title_are_skipped() {
        let api = MockApi::default();
        let entries = vec![entry("", "3.1"), entry("b", ""), entry("c", "3.2")];

        let report = publish_all(&api, &entries, "PL1").await;

        assert_eq!(report.attempted, 1);
        assert_eq!(*api.calls.borrow(), vec!["update c", "insert c -> PL1"]);
    }

    #[tokio::test]
    async fn test_empty_selection_makes_no_calls() {
        let api = MockApi::default();
        let report = publish_all(&api, &[], "PL1").await;

        assert_eq!(report, PublishReport::default());
        assert!(api.calls.borrow().is_empty());
    }
}
