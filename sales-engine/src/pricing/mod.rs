//! Line and document amount calculation
//!
//! Lines are computed by [`line_calculator`]; document totals by
//! [`order_calculator`] from the already-rounded line values.

mod line_calculator;
mod order_calculator;

pub use line_calculator::*;
pub use order_calculator::*;
