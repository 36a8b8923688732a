use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::routes::admin as routes;

/// Dashboard summaries.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    api: &'a ApiClient,
}

impl<'a> Dashboard<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Headline counters (revenue, orders, customers, products).
    pub async fn stats<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.api
            .get(routes::DASHBOARD_STATS, &[], &ListQuery::new())
            .await
    }

    /// Sales series for a period such as `week`, `month` or `year`.
    pub async fn sales<T: DeserializeOwned>(&self, period: &str) -> Result<T, ApiError> {
        let query = ListQuery::new().filter("period", period);
        self.api.get(routes::DASHBOARD_SALES, &[], &query).await
    }

    pub async fn recent_orders<T: DeserializeOwned>(&self, limit: u32) -> Result<T, ApiError> {
        let query = ListQuery::new().filter("limit", limit.to_string());
        self.api
            .get(routes::DASHBOARD_RECENT_ORDERS, &[], &query)
            .await
    }
}
