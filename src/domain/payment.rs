use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Lifecycle label attached to a payment instruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Scheduled,
    Pending,
    Paid,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Scheduled => "Scheduled",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Frequency {
    #[default]
    #[serde(rename = "One-time")]
    OneTime,
    Monthly,
}

impl Frequency {
    pub const LABELS: [&'static str; 2] = ["One-time", "Monthly"];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrequency(pub String);

impl fmt::Display for UnknownFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frequency `{}`", self.0)
    }
}

impl std::error::Error for UnknownFrequency {}

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "One-time" => Ok(Frequency::OneTime),
            "Monthly" => Ok(Frequency::Monthly),
            other => Err(UnknownFrequency(other.to_string())),
        }
    }
}

/// A payment instruction shown in the upcoming or history lists.
///
/// `payee_name` is captured when the payment is created and is not kept in
/// sync with later payee edits or deletions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub payee_id: String,
    pub payee_name: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
    #[serde(default)]
    pub frequency: Frequency,
}

impl Payment {
    /// Creates a `Scheduled` payment from validated input and a payee name snapshot.
    pub fn scheduled(input: ScheduledPaymentInput, payee_name: impl Into<String>) -> Self {
        Self {
            id: generate_id(PAYMENT_ID_PREFIX),
            payee_id: input.payee_id,
            payee_name: payee_name.into(),
            amount: input.amount,
            payment_date: input.payment_date,
            status: PaymentStatus::Scheduled,
            frequency: input.frequency,
        }
    }
}

/// Validated schedule-payment fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPaymentInput {
    pub payee_id: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub frequency: Frequency,
}

impl Identifiable for Payment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Payment {
    fn display_label(&self) -> String {
        format!(
            "{} ${:.2} on {} ({})",
            self.payee_name, self.amount, self.payment_date, self.status
        )
    }
}
