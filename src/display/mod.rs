//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and calculator results
//! for terminal display.

pub mod calc;
pub mod note;
pub mod tools;
pub mod transaction;

pub use calc::{
    format_age, format_bmi, format_color, format_conversion, format_investment_result,
    format_loan_result, format_unit_listing,
};
pub use note::{format_note_details, format_note_list};
pub use tools::{format_strength, format_text_stats};
pub use transaction::{format_summary, format_transaction_register};
