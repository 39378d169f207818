use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::report::Report;

/// Anything that can produce the current snapshot of reports.
pub trait ReportSource {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Report>, AppError>> + Send;
}

/// Client for the hosted Postgres REST endpoint backing the board.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }
}

impl ReportSource for SupabaseClient {
    /// Fetch every row of `bug_reports`, newest first.
    async fn fetch_all(&self) -> Result<Vec<Report>, AppError> {
        let url = format!("{}/rest/v1/bug_reports", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Status(response.status()));
        }

        let reports = response.json::<Vec<Report>>().await?;
        Ok(reports)
    }
}
