//! `/stats` endpoints.

use super::core::LedgerClient;
use crate::types::models::query_pairs;
use crate::types::{Budget, BudgetQuery, HttpRequest};
use crate::Result;
use std::collections::BTreeMap;

impl LedgerClient {
    /// `GET /stats/budget`
    pub async fn get_budget(&self, query: &BudgetQuery) -> Result<Budget> {
        let url = self.endpoint("/stats/budget").await;
        let request = HttpRequest::get(url).with_query_pairs(query_pairs(query)?);
        let response = self.send_authorized(request).await?;
        Ok(Self::decode_data(&response)?.unwrap_or_default())
    }

    /// `GET /stats/balances`: total balance keyed by unix timestamp.
    pub async fn get_balances(&self) -> Result<BTreeMap<i64, f64>> {
        let url = self.endpoint("/stats/balances").await;
        let response = self.send_authorized(HttpRequest::get(url)).await?;
        Ok(Self::decode_data(&response)?.unwrap_or_default())
    }
}
