//! Raw, unvalidated form state. Every field is the text the user typed or
//! selected; coercion happens during validation.

use chrono::NaiveDate;

use crate::domain::payee::Payee;
use crate::domain::payment::Frequency;
use crate::validation::FormDraft;

macro_rules! impl_form_draft {
    ($draft:ty { $($key:literal => $field:ident),+ $(,)? }) => {
        impl FormDraft for $draft {
            fn keys(&self) -> &'static [&'static str] {
                &[$($key),+]
            }

            fn value(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            fn set_value(&mut self, key: &str, value: String) -> bool {
                match key {
                    $($key => {
                        self.$field = value;
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayeeDraft {
    pub name: String,
    pub account_number: String,
    pub category: String,
}

impl PayeeDraft {
    pub fn new(name: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_number: account_number.into(),
            category: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl From<&Payee> for PayeeDraft {
    fn from(payee: &Payee) -> Self {
        Self {
            name: payee.name.clone(),
            account_number: payee.account_number.clone(),
            category: payee.category.clone().unwrap_or_default(),
        }
    }
}

impl_form_draft!(PayeeDraft {
    "name" => name,
    "account_number" => account_number,
    "category" => category,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDraft {
    pub payee_id: String,
    pub amount: String,
    pub payment_date: String,
    pub frequency: String,
}

impl PaymentDraft {
    /// Blank payee, zero amount, dated `today`, one-time.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            payee_id: String::new(),
            amount: "0".into(),
            payment_date: today.format("%Y-%m-%d").to_string(),
            frequency: Frequency::default().label().into(),
        }
    }
}

impl_form_draft!(PaymentDraft {
    "payee_id" => payee_id,
    "amount" => amount,
    "payment_date" => payment_date,
    "frequency" => frequency,
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalTransferDraft {
    pub from_account: String,
    pub to_account: String,
    pub amount: String,
    pub memo: String,
}

impl_form_draft!(InternalTransferDraft {
    "from_account" => from_account,
    "to_account" => to_account,
    "amount" => amount,
    "memo" => memo,
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalTransferDraft {
    pub from_account: String,
    pub recipient_name: String,
    pub recipient_account_number: String,
    pub bank_identifier: String,
    pub amount: String,
    pub memo: String,
}

impl_form_draft!(ExternalTransferDraft {
    "from_account" => from_account,
    "recipient_name" => recipient_name,
    "recipient_account_number" => recipient_account_number,
    "bank_identifier" => bank_identifier,
    "amount" => amount,
    "memo" => memo,
});
