use std::sync::Arc;

use crate::config::Config;
use crate::core::services::{AccountsView, BillPay, Overview, SearchHit, Transfers};
use crate::seed;
use crate::store::AccountDirectory;
use crate::time::{Clock, SystemClock};

/// The whole in-memory session: every view's state plus user settings.
pub struct Dashboard {
    pub config: Config,
    pub overview: Overview,
    pub accounts: AccountsView,
    pub bill_pay: BillPay,
    pub transfers: Transfers,
    clock: Arc<dyn Clock>,
}

impl Dashboard {
    /// Builds a session over the mock data set.
    pub fn seeded(clock: Arc<dyn Clock>, config: Config) -> Self {
        tracing::debug!(today = %clock.today(), "seeding dashboard");
        Self {
            config,
            overview: Overview::seeded(),
            accounts: AccountsView::new(AccountDirectory::new(seed::accounts())),
            bill_pay: BillPay::seeded(Arc::clone(&clock)),
            transfers: Transfers::seeded(),
            clock,
        }
    }

    pub fn with_system_clock(config: Config) -> Self {
        Self::seeded(Arc::new(SystemClock), config)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Global header search.
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        Overview::search(
            term,
            self.bill_pay.payees(),
            &[self.bill_pay.upcoming(), self.bill_pay.history()],
            self.accounts.directory(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn seeded_session_exposes_every_view() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        let dashboard = Dashboard::seeded(Arc::new(clock), Config::default());
        assert_eq!(dashboard.overview.summaries().len(), 3);
        assert_eq!(dashboard.accounts.accounts().len(), 3);
        assert_eq!(dashboard.bill_pay.payees().len(), 4);
        assert_eq!(dashboard.transfers.accounts().list().len(), 3);
        assert_eq!(dashboard.clock().today(), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        assert!(!dashboard.search("aquaflow").is_empty());
    }
}
