//! # Cadence Core
//!
//! Core types and day count primitives for the Cadence coupon schedule library.
//!
//! This crate provides the building blocks the coupon engine relies on:
//!
//! - **Types**: [`Date`], [`Frequency`] and [`Basis`]
//! - **Day Count Conventions**: the five spreadsheet day count bases
//! - **Calendar Arithmetic**: month offsets with end-of-month correction
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::prelude::*;
//!
//! let start = Date::from_ymd(2025, 1, 31).unwrap();
//! let end = start.add_offset(0, 6, 0, true).unwrap();
//! assert_eq!(end, Date::from_ymd(2025, 7, 31).unwrap());
//!
//! assert_eq!(Basis::UsNasd30360.day_count(start, end), 180);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::DayCount;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Basis, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Basis, Date, Frequency};
