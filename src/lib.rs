//! Toolbox - terminal multi-tool for everyday utilities
//!
//! This library provides the core functionality for the toolbox application:
//! a set of independent utilities (financial calculators, unit conversion,
//! date arithmetic, text tools) plus a small persistent layer for notes and
//! a personal finance tracker.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (notes, transactions, money)
//! - `calc`: Pure numeric calculators (loan, SIP, units, age, BMI, color)
//! - `tools`: Text utilities (statistics, Base64, passwords, JSON)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers bridging clap to the service layer
//!
//! # Example
//!
//! ```rust
//! use toolbox_cli::calc::loan::{LoanInputs, amortize};
//!
//! let result = amortize(&LoanInputs {
//!     principal: 100_000.0,
//!     annual_rate_pct: 10.0,
//!     term_months: 12,
//! }).unwrap();
//! assert!(result.total_payable > 100_000.0);
//! ```

pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tools;

pub use error::{ToolboxError, ToolboxResult};
