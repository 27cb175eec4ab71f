//! # Response Caching Module
//!
//! In-memory response cache used by
//! [`CachingInterceptor`](crate::interceptors::CachingInterceptor).
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ResponseStore`] | Shared key → response map, copied out on every read |
//! | [`CacheKey`] | Deterministic key from request headers and full URL |
//! | [`Sweeper`] | Background task that clears the whole store every TTL |
//!
//! ## Invalidation
//!
//! Entries never expire individually. The store is emptied as a whole either
//! when a mutating request passes through the interceptor or when the
//! sweeper ticks.

mod key;
mod store;
mod sweep;

pub use key::CacheKey;
pub use store::ResponseStore;
pub use sweep::Sweeper;
