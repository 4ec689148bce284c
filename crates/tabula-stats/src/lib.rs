//! tabula-stats - Column summaries and slice comparisons
//!
//! Two stateless reports over a borrowed [`DataTable`]:
//!
//! - **Feature summary**: count, distinct count, missing count and, for
//!   numeric columns, mean/min/max
//! - **Slice mean comparison**: the mean of one column in two tables and
//!   the signed difference between them
//!
//! Missing values are skipped by every reduction. A numeric reduction over
//! zero values yields `NaN`.

pub mod compare;
pub mod error;
pub mod moments;
pub mod summary;

pub use compare::*;
pub use error::*;
pub use moments::*;
pub use summary::*;

pub use tabula_io::DataTable;
