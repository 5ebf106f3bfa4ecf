//! Core types for Levana perpetuals metrics.
//!
//! This crate holds the pure, I/O-free part of the workspace:
//! - Markets and chain-based market filtering
//! - UTC date buckets and the daily reporting window
//! - Exact decimal summation and the assembled metrics record
//! - The per-chain configuration table

/// Chain configuration table.
pub mod config;
/// Domain entities.
pub mod entities;
/// Error types.
pub mod error;
/// Metric values and the assembled record.
pub mod metrics;
/// Date and time value objects.
pub mod value_objects;

pub use config::{ChainConfig, ChainRegistry};
pub use error::DomainError;
