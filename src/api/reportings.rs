//! Reporting service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountId, CampaignId, Params};
use crate::{Error, Result};

/// Service for campaign and content reports.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use taboola_rs::{AccountId, Params};
/// use taboola_rs::api::TopCampaignContentQuery;
///
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let account = AccountId::new("demo-advertiser");
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
///
/// let top = client
///     .reportings()
///     .top_campaign_content_report(&account, &TopCampaignContentQuery::new(start, end))
///     .await?;
///
/// let by_day = client
///     .reportings()
///     .realtime_campaign_report(
///         &account,
///         "by_hour",
///         Params::new()
///             .with("start_date", "2024-03-01T00:00:00")
///             .with("end_date", "2024-03-01T23:59:59"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ReportingsService {
    inner: Arc<ClientInner>,
}

/// Query for the top campaign content report.
#[derive(Debug, Clone, Serialize)]
pub struct TopCampaignContentQuery {
    /// First day of the report range
    pub start_date: NaiveDate,
    /// Last day of the report range
    pub end_date: NaiveDate,
    /// Restrict the report to one campaign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignId>,
}

impl TopCampaignContentQuery {
    /// Query across all campaigns for a date range.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            campaign: None,
        }
    }

    /// Restrict the query to a single campaign.
    pub fn with_campaign(mut self, campaign: impl Into<CampaignId>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }
}

impl ReportingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Top campaign content, broken down by item.
    pub async fn top_campaign_content_report(
        &self,
        account_id: &AccountId,
        query: &TopCampaignContentQuery,
    ) -> Result<Value> {
        let path = format!(
            "{}/reports/top-campaign-content/dimensions/item_breakdown",
            account_id
        );
        self.inner.get(&path, Params::from_serialize(query)?).await
    }

    /// Realtime campaign summary for `dimension` (e.g. `by_hour`).
    ///
    /// `params` must carry `start_date` and `end_date`.
    pub async fn realtime_campaign_report(
        &self,
        account_id: &AccountId,
        dimension: &str,
        params: Params,
    ) -> Result<Value> {
        require_date_range(&params)?;
        let path = format!(
            "{}/reports/reports/realtime-campaign-summary/dimensions/{}",
            account_id, dimension
        );
        self.inner.get(&path, params).await
    }

    /// Realtime top campaign content for `dimension`.
    ///
    /// `params` must carry `start_date` and `end_date`.
    pub async fn realtime_ads_report(
        &self,
        account_id: &AccountId,
        dimension: &str,
        params: Params,
    ) -> Result<Value> {
        require_date_range(&params)?;
        let path = format!(
            "{}/reports/reports/realtime-top-campaign-content/dimensions/{}",
            account_id, dimension
        );
        self.inner.get(&path, params).await
    }
}

fn require_date_range(params: &Params) -> Result<()> {
    if params.has_value("start_date") && params.has_value("end_date") {
        Ok(())
    } else {
        Err(Error::Validation(
            "start_date and end_date params are required".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_query_omits_absent_campaign() {
        let params = Params::from_serialize(&TopCampaignContentQuery::new(day(1), day(7))).unwrap();
        assert_eq!(params.get("start_date"), Some(&json!("2024-01-01")));
        assert_eq!(params.get("end_date"), Some(&json!("2024-01-07")));
        assert!(params.get("campaign").is_none());
    }

    #[test]
    fn test_query_with_campaign() {
        let query = TopCampaignContentQuery::new(day(1), day(7)).with_campaign("987");
        let params = Params::from_serialize(&query).unwrap();
        assert_eq!(params.get("campaign"), Some(&json!("987")));
    }

    #[test]
    fn test_require_date_range() {
        let both = Params::new().with("start_date", "a").with("end_date", "b");
        assert!(require_date_range(&both).is_ok());
        assert!(require_date_range(&Params::new().with("start_date", "a")).is_err());
        assert!(require_date_range(&Params::new().with("end_date", "b")).is_err());
        assert!(require_date_range(
            &Params::new().with("start_date", Value::Null).with("end_date", "b")
        )
        .is_err());
    }
}
