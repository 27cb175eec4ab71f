//! Core value types: the request/response pair that flows through the
//! interceptor pipeline, and the Ledgerkeep backend models.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`http`] | [`HttpRequest`] descriptor and [`HttpResponse`] value |
//! | [`models`] | Accounts, transactions, budget statistics and their queries |

pub mod http;
pub mod models;

pub use http::{HttpRequest, HttpResponse};
pub use models::{
    Account, Budget, BudgetQuery, ListTransactionsQuery, SortField, SortOrder, Transaction,
    TransactionPage, DEFAULT_TRANSACTIONS_LIMIT,
};
