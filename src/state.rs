use tokio::sync::RwLock;

use crate::models::report::Report;
use crate::supabase::ReportSource;

#[derive(Debug)]
struct BoardInner {
    reports: Vec<Report>,
    loading: bool,
}

/// Shared board state: the last fetched snapshot plus a loading flag.
///
/// The lock is held only to read or swap the list, never across the
/// network call. Concurrent refreshes both run to completion and the
/// last writer wins.
pub struct BoardState {
    inner: RwLock<BoardInner>,
}

impl BoardState {
    /// Fresh state: empty list, loading until the first fetch settles.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BoardInner {
                reports: Vec::new(),
                loading: true,
            }),
        }
    }

    /// Current reports and loading flag, cloned out of the lock.
    pub async fn snapshot(&self) -> (Vec<Report>, bool) {
        let guard = self.inner.read().await;
        (guard.reports.clone(), guard.loading)
    }

    /// Run one fetch transition: loading goes up, the list is replaced
    /// wholesale on success and left untouched on failure, loading goes
    /// back down either way.
    pub async fn refresh(&self, source: &impl ReportSource) {
        self.inner.write().await.loading = true;

        match source.fetch_all().await {
            Ok(reports) => {
                log::info!("Fetched {} reports", reports.len());
                let mut guard = self.inner.write().await;
                guard.reports = reports;
                guard.loading = false;
            }
            Err(e) => {
                log::warn!("Report fetch failed: {e}");
                self.inner.write().await.loading = false;
            }
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
