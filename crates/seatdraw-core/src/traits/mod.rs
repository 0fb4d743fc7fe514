//! Core traits defined in `seatdraw-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
