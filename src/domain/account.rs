use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A user-owned account. Reference data only: transfers never change `balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Already-masked number as shown to the user, e.g. `•••• 6789`.
    pub number: String,
    pub kind: AccountKind,
    pub balance: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AccountDetails>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: AccountKind,
        balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: String::new(),
            kind,
            balance,
            currency: "USD".into(),
            details: None,
            activity: Vec::new(),
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_details(mut self, details: AccountDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_activity(mut self, activity: Vec<Activity>) -> Self {
        self.activity = activity;
        self
    }
}

impl Identifiable for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    /// Selector label, e.g. `Primary Checking (•••• 6789)`.
    fn display_label(&self) -> String {
        if self.number.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.number)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Checking => "Checking",
            AccountKind::Savings => "Savings",
            AccountKind::CreditCard => "Credit Card",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub holder_name: String,
    pub opened_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityStatus {
    Completed,
    Pending,
    Failed,
}

impl ActivityStatus {
    /// Badge variant used when rendering the status.
    pub fn badge(&self) -> BadgeVariant {
        match self {
            ActivityStatus::Completed => BadgeVariant::Default,
            ActivityStatus::Pending => BadgeVariant::Secondary,
            ActivityStatus::Failed => BadgeVariant::Destructive,
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Pending => "Pending",
            ActivityStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

/// A posted or pending account transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Unsigned magnitude; direction comes from `kind`.
    pub amount: f64,
    pub currency: String,
    pub kind: ActivityKind,
    pub status: ActivityStatus,
}

impl Activity {
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            ActivityKind::Debit => -self.amount,
            ActivityKind::Credit => self.amount,
        }
    }
}

/// Data behind one dashboard account card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    pub account_name: String,
    /// Full number; masked at render time.
    pub account_number: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// One slice of the spending analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingCategory {
    pub category: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_appends_masked_number_when_present() {
        let bare = Account::new("acc_1", "Vacation Fund", AccountKind::Savings, 10.0);
        assert_eq!(bare.display_label(), "Vacation Fund");
        let numbered = bare.with_number("•••• 1234");
        assert_eq!(numbered.display_label(), "Vacation Fund (•••• 1234)");
    }

    #[test]
    fn debits_are_negative_when_signed() {
        let activity = Activity {
            id: "txn".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 29).unwrap(),
            description: "Grocery Store Run".into(),
            amount: 75.2,
            currency: "USD".into(),
            kind: ActivityKind::Debit,
            status: ActivityStatus::Completed,
        };
        assert_eq!(activity.signed_amount(), -75.2);
        assert_eq!(activity.status.badge(), BadgeVariant::Default);
    }
}
