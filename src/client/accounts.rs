//! `/accounts` endpoints.

use super::core::LedgerClient;
use crate::types::{Account, HttpRequest};
use crate::Result;
use serde_json::json;

impl LedgerClient {
    /// `POST /accounts`
    pub async fn create_account(&self, account_id: &str, account_name: &str) -> Result<()> {
        let url = self.endpoint("/accounts").await;
        let request = HttpRequest::post(url).with_json(json!({
            "id": account_id,
            "name": account_name,
        }));
        self.send_authorized(request).await?;
        Ok(())
    }

    /// `GET /accounts`; a missing `data` field reads as no accounts.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let url = self.endpoint("/accounts").await;
        let response = self.send_authorized(HttpRequest::get(url)).await?;
        Ok(Self::decode_data(&response)?.unwrap_or_default())
    }

    /// `PATCH /accounts/{id}`
    pub async fn update_account(&self, account_id: &str, account_name: &str) -> Result<()> {
        let url = self.endpoint(&format!("/accounts/{}", account_id)).await;
        let request = HttpRequest::patch(url).with_json(json!({ "name": account_name }));
        self.send_authorized(request).await?;
        Ok(())
    }

    /// `DELETE /accounts/{id}`
    pub async fn delete_account(&self, account_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/accounts/{}", account_id)).await;
        self.send_authorized(HttpRequest::delete(url)).await?;
        Ok(())
    }
}
