use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// One bug/feature submission as returned by the remote collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: String,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: String,
    pub user_id: String,
}

/// Report status as stored remotely. Anything outside the two known
/// values lands on `Unknown` instead of being coerced at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    /// Badge text. Unrecognized statuses keep the resolved styling.
    pub fn badge_label(self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Resolved | ReportStatus::Unknown => "Resolved",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ReportStatus::Pending => "badge-pending",
            ReportStatus::Resolved | ReportStatus::Unknown => "badge-resolved",
        }
    }
}

impl Report {
    /// First 10 characters of the submitter id, with trailing ellipsis.
    pub fn short_user_id(&self) -> String {
        let head: String = self.user_id.chars().take(10).collect();
        format!("{head}...")
    }

    /// Creation date formatted for display. Timestamps arrive as ISO 8601,
    /// with or without an offset; anything unparseable renders as-is.
    pub fn created_date(&self) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return dt.format("%Y/%-m/%-d").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%Y/%-m/%-d").to_string();
        }
        self.created_at.clone()
    }
}

/// Aggregate counts for the stats row.
///
/// `Unknown` statuses count toward `total` only, so `pending + resolved`
/// equals `total` exactly when every status is a known value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
}

impl ReportStats {
    pub fn tally(reports: &[Report]) -> Self {
        Self {
            total: reports.len(),
            pending: reports
                .iter()
                .filter(|r| r.status == ReportStatus::Pending)
                .count(),
            resolved: reports
                .iter()
                .filter(|r| r.status == ReportStatus::Resolved)
                .count(),
        }
    }
}
