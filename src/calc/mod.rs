//! Pure numeric calculators
//!
//! Each submodule is an independent, stateless formula layer: inputs in,
//! derived values out. Nothing here touches storage, the terminal, or any
//! other module's output. Invalid input (non-finite, out of domain, unknown
//! unit) is reported as [`ToolboxError::InvalidInput`] or
//! [`ToolboxError::UnknownUnit`] rather than leaking NaN/Infinity into
//! results.
//!
//! [`ToolboxError::InvalidInput`]: crate::error::ToolboxError::InvalidInput
//! [`ToolboxError::UnknownUnit`]: crate::error::ToolboxError::UnknownUnit

pub mod age;
pub mod bmi;
pub mod color;
pub mod loan;
pub mod sip;
pub mod units;

pub use age::{age_on, next_birthday, AgeBreakdown, NextBirthday};
pub use bmi::{bmi, imperial_to_metric, BmiCategory, BmiReading};
pub use color::{Hsl, Rgb};
pub use loan::{amortize, LoanInputs, LoanResult};
pub use sip::{project, InvestmentInputs, InvestmentResult};
pub use units::{convert, UnitCategory};
