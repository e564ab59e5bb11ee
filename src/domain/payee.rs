use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A registered billing counterparty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payee {
    pub id: String,
    pub name: String,
    pub account_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Payee {
    /// Builds a payee with a freshly generated identifier.
    pub fn new(name: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            id: generate_id(PAYEE_ID_PREFIX),
            name: name.into(),
            account_number: account_number.into(),
            category: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category label with the `N/A` fallback used by the payee table.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("N/A")
    }
}

/// Validated payee fields, not yet bound to an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeInput {
    pub name: String,
    pub account_number: String,
    pub category: Option<String>,
}

impl PayeeInput {
    pub fn into_payee(self, id: impl Into<String>) -> Payee {
        Payee {
            id: id.into(),
            name: self.name,
            account_number: self.account_number,
            category: self.category,
        }
    }
}

impl Identifiable for Payee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Payee {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Payee {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category_label())
    }
}
