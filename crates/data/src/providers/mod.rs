//! Indexer client implementations.

mod http;

pub use http::HttpIndexer;
