pub mod account;
pub mod common;
pub mod payee;
pub mod payment;
pub mod transfer;

pub use common::{Displayable, Identifiable, NamedEntity};
