use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::endpoint::ListQuery;
use crate::error::ApiError;
use crate::routes::admin as routes;
use crate::types::TransactionPage;

/// Payment transactions. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    api: &'a ApiClient,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Returns one page of transactions with the total match count.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let page: TransactionPage = admin
    ///     .transactions()
    ///     .list(&ListQuery::new().page(2).status("completed"))
    ///     .await?;
    /// println!("{} of {}", page.transactions.len(), page.total);
    /// ```
    pub async fn list<T: DeserializeOwned>(
        &self,
        query: &ListQuery,
    ) -> Result<TransactionPage<T>, ApiError> {
        self.api.get(routes::TRANSACTIONS, &[], query).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, ApiError> {
        let id = id.to_string();
        self.api
            .get(routes::TRANSACTION, &[("id", id.as_str())], &ListQuery::new())
            .await
    }
}
