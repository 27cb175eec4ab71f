//! `/transactions` endpoints.

use super::core::LedgerClient;
use crate::types::models::query_pairs;
use crate::types::{HttpRequest, ListTransactionsQuery, Transaction, TransactionPage};
use crate::Result;

/// Header carrying the total number of transactions matching a listing.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

impl LedgerClient {
    /// `POST /transactions`
    pub async fn create_transaction(&self, transaction: &Transaction) -> Result<()> {
        let url = self.endpoint("/transactions").await;
        let request = HttpRequest::post(url).with_json(serde_json::to_value(transaction)?);
        self.send_authorized(request).await?;
        Ok(())
    }

    /// `GET /transactions`. The total count comes from the `x-total-count`
    /// header and reads as 0 when absent or malformed.
    pub async fn list_transactions(&self, query: &ListTransactionsQuery) -> Result<TransactionPage> {
        let url = self.endpoint("/transactions").await;
        let request = HttpRequest::get(url).with_query_pairs(query_pairs(query)?);
        let response = self.send_authorized(request).await?;

        let list = Self::decode_data(&response)?.unwrap_or_default();
        let count = response
            .header(TOTAL_COUNT_HEADER)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);

        Ok(TransactionPage { list, count })
    }

    /// `PATCH /transactions/{id}`
    pub async fn update_transaction(&self, transaction: &Transaction) -> Result<()> {
        let url = self
            .endpoint(&format!("/transactions/{}", transaction.id))
            .await;
        let request = HttpRequest::patch(url).with_json(serde_json::to_value(transaction)?);
        self.send_authorized(request).await?;
        Ok(())
    }

    /// `DELETE /transactions/{id}`
    pub async fn delete_transaction(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/transactions/{}", id)).await;
        self.send_authorized(HttpRequest::delete(url)).await?;
        Ok(())
    }
}
