//! Ion-line coordinate files (`*.in`).
//!
//! Each non-comment line describes one atom:
//!
//! ```text
//! O1  1   0.00    0.00    0.00  0
//! H1  2   -0.45    1.42    -1.07  1
//! ```
//!
//! The columns are the atom label, the species code, x/y/z in Ångström and
//! a movable flag (`0` pins the atom, `1` lets it move).

mod reader;
mod writer;

pub use reader::read;
pub use writer::write;

use super::util::format_repr;

/// File name of the grid point `(factor1, factor2, angle_increment)`.
pub fn file_name(factor1: f64, factor2: f64, angle_increment: f64) -> String {
    format!(
        "coords_{:.2}_{:.2}_{}.in",
        factor1,
        factor2,
        format_repr(angle_increment)
    )
}
