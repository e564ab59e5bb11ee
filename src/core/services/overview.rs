use serde::Serialize;

use crate::domain::account::{Account, AccountSummary, Activity, SpendingCategory};
use crate::domain::payee::Payee;
use crate::domain::payment::Payment;
use crate::seed;
use crate::store::{AccountDirectory, PayeeStore, PaymentStore};

/// Category total with its share of all spending, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

/// Accounts page state: the list plus whichever account is open.
#[derive(Debug, Clone)]
pub struct AccountsView {
    directory: AccountDirectory,
    selected: Option<String>,
}

impl AccountsView {
    pub fn new(directory: AccountDirectory) -> Self {
        let selected = directory
            .default_selection()
            .map(|account| account.id.clone());
        Self {
            directory,
            selected,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        self.directory.list()
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    pub fn selected(&self) -> Option<&Account> {
        self.selected
            .as_deref()
            .and_then(|id| self.directory.get(id))
    }

    /// Switches the open account; unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if self.directory.get(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit<'a> {
    Payee(&'a Payee),
    Payment(&'a Payment),
    Activity {
        account: &'a Account,
        activity: &'a Activity,
    },
}

/// Read-only dashboard widgets: account cards, spending and recent activity.
#[derive(Debug, Clone)]
pub struct Overview {
    summaries: Vec<AccountSummary>,
    spending: Vec<SpendingCategory>,
    recent: Vec<Activity>,
}

impl Overview {
    pub fn new(
        summaries: Vec<AccountSummary>,
        spending: Vec<SpendingCategory>,
        recent: Vec<Activity>,
    ) -> Self {
        Self {
            summaries,
            spending,
            recent,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            seed::account_summaries(),
            seed::spending(),
            seed::recent_transactions(),
        )
    }

    pub fn summaries(&self) -> &[AccountSummary] {
        &self.summaries
    }

    pub fn recent_transactions(&self) -> &[Activity] {
        &self.recent
    }

    pub fn total_spending(&self) -> f64 {
        self.spending.iter().map(|slice| slice.amount).sum()
    }

    pub fn spending_shares(&self) -> Vec<SpendingShare> {
        let total = self.total_spending();
        self.spending
            .iter()
            .map(|slice| SpendingShare {
                category: slice.category.clone(),
                amount: slice.amount,
                percent: if total > 0.0 {
                    slice.amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Case-insensitive search over payees, payments and account activity.
    /// A blank term matches nothing.
    pub fn search<'a>(
        term: &str,
        payees: &'a PayeeStore,
        payments: &[&'a PaymentStore],
        accounts: &'a AccountDirectory,
    ) -> Vec<SearchHit<'a>> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<SearchHit<'a>> =
            payees.search(term).into_iter().map(SearchHit::Payee).collect();
        for store in payments {
            hits.extend(store.search(term).into_iter().map(SearchHit::Payment));
        }
        hits.extend(
            accounts
                .search_activity(term)
                .into_iter()
                .map(|(account, activity)| SearchHit::Activity { account, activity }),
        );
        tracing::debug!(term, hits = hits.len(), "search");
        hits
    }
}
