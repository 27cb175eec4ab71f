//! # ledgerkeep
//!
//! Client runtime for the Ledgerkeep personal-finance backend (accounts,
//! transactions, budget statistics).
//!
//! ## Overview
//!
//! Every request issued by [`LedgerClient`] flows through an interceptor
//! pipeline before it reaches the network:
//!
//! ```text
//! caller → CachingInterceptor → BackendErrorInterceptor → Transport
//! ```
//!
//! - **Caching**: backend GET responses are kept in memory until a mutating
//!   request or the periodic TTL sweep clears the whole store.
//! - **Error translation**: backend and transport failures collapse into a
//!   small set of [`DisplayableError`] values; `UNAUTHORIZED` also ends the
//!   session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledgerkeep::{LedgerClient, ListTransactionsQuery};
//!
//! #[tokio::main]
//! async fn main() -> ledgerkeep::Result<()> {
//!     let client = LedgerClient::builder().build()?;
//!     client.login("alice", "s3cret").await?;
//!
//!     let accounts = client.list_accounts().await?;
//!     let page = client
//!         .list_transactions(&ListTransactionsQuery::default())
//!         .await?;
//!     println!("{} accounts, {} transactions", accounts.len(), page.count);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | API client and builder |
//! | [`interceptors`] | Interceptor trait, pipeline, caching and error stages |
//! | [`cache`] | Response store, cache keys, TTL sweeper |
//! | [`config`] | Configuration document, sources and provider |
//! | [`auth`] | Basic-auth session and logout notifications |
//! | [`transport`] | Transport trait and `reqwest` implementation |
//! | [`error_code`] | Backend custom codes and displayable errors |
//! | [`types`] | Request/response values and backend models |

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error_code;
pub mod interceptors;
pub mod transport;
pub mod types;

pub use auth::{BasicAuthSession, SessionEvent, SessionTerminator};
pub use client::{LedgerClient, LedgerClientBuilder};
pub use config::{AppConfig, ConfigProvider};
pub use error_code::{BackendCustomCode, DisplayableError};
pub use interceptors::{Interceptor, InterceptorPipeline, Next};
pub use types::{
    Account, Budget, BudgetQuery, HttpRequest, HttpResponse, ListTransactionsQuery, Transaction,
    TransactionPage,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
