//! MySQL index/CTE benchmark seeder
//!
//! Populates a three-table schema (clients, products, orders) with synthetic
//! data, then compares an unindexed join/aggregate query against an indexed,
//! CTE-rewritten equivalent.

pub mod bench;
pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod queries;
pub mod schema;

// Re-export main types
pub use bench::{GroupRow, QueryRun};
pub use config::DbConfig;
pub use error::{BenchError, Result};
pub use generator::{DataGenerator, RowCounts};
