use crate::domain::account::{Account, Activity};
use crate::domain::common::{matches_term, Displayable};

/// Read-only account reference data. There are deliberately no mutators.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// The account selected when the accounts view first opens.
    pub fn default_selection(&self) -> Option<&Account> {
        self.accounts.first()
    }

    /// Selector label for `id`, or the raw id when the account is unknown.
    pub fn label(&self, id: &str) -> String {
        self.get(id)
            .map(|account| account.display_label())
            .unwrap_or_else(|| id.to_string())
    }

    /// Activity entries across all accounts whose description matches `term`.
    pub fn search_activity(&self, term: &str) -> Vec<(&Account, &Activity)> {
        let needle = term.to_lowercase();
        self.accounts
            .iter()
            .flat_map(|account| account.activity.iter().map(move |entry| (account, entry)))
            .filter(|(_, entry)| matches_term(&entry.description, &needle))
            .collect()
    }
}
