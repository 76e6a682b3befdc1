//! Service layer for the toolbox
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and lookup conveniences.

pub mod finance;
pub mod note;
pub mod session;

pub use finance::{AddTransactionInput, FinanceService, FinanceSummary, Period};
pub use note::NoteService;
pub use session::{Session, SessionService};
