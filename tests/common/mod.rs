//! Shared test fixtures: canned report sources standing in for the remote.

use bugboard::errors::AppError;
use bugboard::models::report::{Report, ReportStatus};
use bugboard::supabase::ReportSource;

pub fn sample_report(id: &str, status: ReportStatus, created_at: &str) -> Report {
    Report {
        id: id.to_string(),
        description: format!("Report {id}"),
        status,
        created_at: created_at.to_string(),
        user_id: format!("user-{id}-0000000000"),
    }
}

/// Source that always returns the same canned snapshot.
pub struct StaticSource(pub Vec<Report>);

impl ReportSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Report>, AppError> {
        Ok(self.0.clone())
    }
}

/// Source that always fails, like an unreachable remote.
pub struct FailingSource;

impl ReportSource for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<Report>, AppError> {
        Err(AppError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}
