//! JSON file cache backend.

pub mod store;

pub use store::FileCacheProvider;
