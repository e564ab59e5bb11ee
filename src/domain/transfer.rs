use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated transfer instruction awaiting confirmation.
///
/// Serializable so a pending confirmation can be inspected or logged as data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferRequest {
    Internal(InternalTransfer),
    External(ExternalTransfer),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InternalTransfer {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalTransfer {
    pub from_account: String,
    pub recipient_name: String,
    pub recipient_account_number: String,
    pub bank_identifier: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Internal,
    External,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Internal => f.write_str("Internal"),
            TransferKind::External => f.write_str("External"),
        }
    }
}

impl TransferRequest {
    pub fn kind(&self) -> TransferKind {
        match self {
            TransferRequest::Internal(_) => TransferKind::Internal,
            TransferRequest::External(_) => TransferKind::External,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            TransferRequest::Internal(transfer) => transfer.amount,
            TransferRequest::External(transfer) => transfer.amount,
        }
    }

    pub fn from_account(&self) -> &str {
        match self {
            TransferRequest::Internal(transfer) => &transfer.from_account,
            TransferRequest::External(transfer) => &transfer.from_account,
        }
    }

    pub fn memo(&self) -> Option<&str> {
        match self {
            TransferRequest::Internal(transfer) => transfer.memo.as_deref(),
            TransferRequest::External(transfer) => transfer.memo.as_deref(),
        }
    }
}
