//! # seatdraw-cache
//!
//! Best-effort persistence for SeatDraw. Supports two providers:
//!
//! - **file**: a single JSON document on disk, one entry per key
//! - **memory**: in-process cache using [moka](https://crates.io/crates/moka)
//!
//! The provider is selected at runtime based on configuration. The
//! [`SnapshotStore`] on top of it never fails: read and write errors are
//! logged and replaced by defaults.

#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod snapshot;

pub use provider::CacheManager;
pub use snapshot::{BoardSnapshot, SnapshotStore};
