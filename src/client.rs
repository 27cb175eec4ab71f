//! Ledgerkeep API client.
//!
//! Every call goes through the standard interceptor pipeline (response cache,
//! then backend error translation) and carries the session's `Authorization`
//! header. Implementation details are split into submodules under
//! `src/client/`.

pub mod accounts;
pub mod builder;
pub mod core;
pub mod statistics;
pub mod transactions;

pub use builder::LedgerClientBuilder;
pub use core::LedgerClient;
