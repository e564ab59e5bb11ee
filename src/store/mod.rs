//! In-memory ordered collections backing the dashboard views.

pub mod accounts;
pub mod payees;
pub mod payments;

pub use accounts::AccountDirectory;
pub use payees::PayeeStore;
pub use payments::{PaymentOrder, PaymentStore};
