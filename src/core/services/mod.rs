pub mod bill_pay;
pub mod overview;
pub mod transfers;

pub use bill_pay::{BillPay, PayeeOutcome};
pub use overview::{AccountsView, Overview, SearchHit, SpendingShare};
pub use transfers::{TransferReceipt, Transfers};

use crate::validation::FieldErrors;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
    #[error("{0} not found")]
    NotFound(String),
    #[error("No transfer is awaiting confirmation")]
    NothingPending,
}

impl ServiceError {
    /// Field errors carried by a failed submission, if that is what this is.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ServiceError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
