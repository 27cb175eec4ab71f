//! Ledgerkeep backend data transfer objects.

use serde::{Deserialize, Serialize};

/// Default page size for transaction listings.
pub const DEFAULT_TRANSACTIONS_LIMIT: u32 = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub closing_bal: f64,
    /// Unix timestamp.
    pub timestamp: i64,
    pub account_id: String,
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

/// One page of transactions plus the total count reported by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionPage {
    pub list: Vec<Transaction>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub total_income: f64,

    pub essentials_expected: f64,
    pub essentials_actual: f64,

    pub investments_expected: f64,
    pub investments_actual: f64,

    pub savings_expected: f64,
    pub savings_actual: f64,

    pub luxury_expected: f64,
    pub luxury_actual: f64,

    pub ignorable_expected: f64,
    pub ignorable_actual: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Amount,
    #[default]
    Timestamp,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Query parameters of `GET /transactions`. Unset fields are not sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListTransactionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_hint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for ListTransactionsQuery {
    fn default() -> Self {
        Self {
            start_amount: None,
            end_amount: None,
            start_time: None,
            end_time: None,
            account_id: None,
            category: None,
            notes_hint: None,
            limit: Some(DEFAULT_TRANSACTIONS_LIMIT),
            skip: None,
            sort_field: Some(SortField::default()),
            sort_order: Some(SortOrder::default()),
        }
    }
}

impl ListTransactionsQuery {
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = Some(field);
        self.sort_order = Some(order);
        self
    }
}

/// Query parameters of `GET /stats/budget`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BudgetQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}

/// Flattens a serializable struct into string query pairs, dropping nulls.
pub(crate) fn query_pairs<T: Serialize>(query: &T) -> crate::Result<Vec<(String, String)>> {
    let value = serde_json::to_value(query)?;
    let pairs = match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(pairs)
}

/// Envelope used by every successful backend payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Option<T>,
}
