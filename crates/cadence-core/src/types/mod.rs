//! Domain types for coupon schedule calculations.
//!
//! - [`Date`]: Calendar date at day granularity
//! - [`Frequency`]: Coupon payments per year
//! - [`Basis`]: Day count basis code

mod basis;
mod date;
mod frequency;

pub use basis::Basis;
pub use date::Date;
pub use frequency::Frequency;
