// Template context structures for Askama templates.

use askama::Template;

use crate::models::report::{Report, ReportStats};

/// One report prepared for display on the board.
pub struct ReportCard {
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub date: String,
    pub uid_short: String,
    pub description: String,
}

impl From<&Report> for ReportCard {
    fn from(report: &Report) -> Self {
        Self {
            badge_label: report.status.badge_label(),
            badge_class: report.status.badge_class(),
            date: report.created_date(),
            uid_short: report.short_user_id(),
            description: report.description.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub stats: ReportStats,
    pub cards: Vec<ReportCard>,
    pub loading: bool,
}
