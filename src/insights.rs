//! Access to the finance API's category-insight feeds.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::config::BotConfig;
use crate::domain::{InsightKind, MonetaryEntry};
use crate::errors::ReportError;
use crate::period::ReportPeriod;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Asynchronous source of category insights for a date range.
#[async_trait]
pub trait InsightSource: Send + Sync {
    async fn fetch_category_insight(
        &self,
        kind: InsightKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonetaryEntry>, ReportError>;
}

/// Fetches the expense and income feeds for one period.
///
/// The two requests carry no data dependency and are awaited jointly; either
/// failure fails the invocation so a partial report is never rendered.
pub async fn fetch_pair(
    source: &dyn InsightSource,
    period: &ReportPeriod,
) -> Result<(Vec<MonetaryEntry>, Vec<MonetaryEntry>), ReportError> {
    let start = period.start_date();
    let end = period.end_date();
    let (expenses, incomes) = tokio::try_join!(
        source.fetch_category_insight(InsightKind::Expense, start, end),
        source.fetch_category_insight(InsightKind::Income, start, end),
    )?;
    tracing::debug!(
        expense_categories = expenses.len(),
        income_categories = incomes.len(),
        %start,
        %end,
        "fetched insight pair"
    );
    Ok((expenses, incomes))
}

/// HTTP client for a Firefly-style insights API.
///
/// Talks to `GET {base}/api/v1/insight/{expense|income}/category` with bearer
/// authentication. Retries, timeouts, and caching are the caller's concern.
#[derive(Debug, Clone)]
pub struct HttpInsightSource {
    http: Client,
    base_url: String,
    access_token: String,
}

impl HttpInsightSource {
    pub fn new(config: &BotConfig) -> Result<Self, ReportError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn endpoint(&self, kind: InsightKind) -> String {
        format!("{}/api/v1/insight/{}/category", self.base_url, kind)
    }
}

#[async_trait]
impl InsightSource for HttpInsightSource {
    async fn fetch_category_insight(
        &self,
        kind: InsightKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonetaryEntry>, ReportError> {
        let response = self
            .http
            .get(self.endpoint(kind))
            .bearer_auth(&self.access_token)
            .query(&[
                ("start", start.format(DATE_FORMAT).to_string()),
                ("end", end.format(DATE_FORMAT).to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%kind, %status, "insight request rejected");
            return Err(ReportError::Api {
                kind,
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
