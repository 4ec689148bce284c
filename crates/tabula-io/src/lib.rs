//! tabula-io - In-memory tables for tabular reporting
//!
//! This crate provides the table model consumed by `tabula-stats`:
//!
//! - **Schema**: column types and descriptors
//! - **Columns**: typed, nullable column storage with the reductions a
//!   report needs (null count, distinct count, numeric view)
//! - **Tables**: ordered, uniquely named columns of equal length
//! - **CSV**: delimited text loading with type inference
//!
//! # Design
//!
//! Missing data is modelled with `Option`. Floating-point `NaN` is treated
//! as missing as well, so data round-tripped through numeric code keeps
//! its null count.

pub mod column;
pub mod config;
pub mod csv_reader;
pub mod reader;
pub mod schema;
pub mod table;

pub use column::*;
pub use config::*;
pub use csv_reader::*;
pub use reader::*;
pub use schema::*;
pub use table::*;
