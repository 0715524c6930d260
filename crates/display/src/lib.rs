//! `doorworks-display` — display-only derivations for dimension tables.
//!
//! Everything here affects rendered text only. These transforms must never
//! feed back into filtering or into the stored records.

pub mod grouping;
pub mod units;

pub use grouping::{group_rows, total_quantity, DimensionKind, GroupedRow};
pub use units::{format_dimension, square_feet, to_inches, to_mm, MM_PER_INCH};
