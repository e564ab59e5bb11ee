use crate::domain::common::matches_term;
use crate::domain::payment::Payment;

/// How a [`PaymentStore`] keeps its entries ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOrder {
    /// Ascending by payment date, ties in insertion order.
    ByDate,
    Insertion,
}

#[derive(Debug, Clone)]
pub struct PaymentStore {
    payments: Vec<Payment>,
    order: PaymentOrder,
}

impl PaymentStore {
    /// Store for upcoming payments, kept in date order.
    pub fn upcoming(payments: Vec<Payment>) -> Self {
        let mut store = Self {
            payments,
            order: PaymentOrder::ByDate,
        };
        store.sort();
        store
    }

    /// Store for past payments, kept in the order given.
    pub fn history(payments: Vec<Payment>) -> Self {
        Self {
            payments,
            order: PaymentOrder::Insertion,
        }
    }

    pub fn order(&self) -> PaymentOrder {
        self.order
    }

    /// Inserts the payment and restores the store's ordering.
    pub fn add_sorted(&mut self, payment: Payment) -> &Payment {
        let id = payment.id.clone();
        self.payments.push(payment);
        self.sort();
        let index = self
            .payments
            .iter()
            .rposition(|candidate| candidate.id == id)
            .unwrap_or(self.payments.len() - 1);
        &self.payments[index]
    }

    fn sort(&mut self) {
        if self.order == PaymentOrder::ByDate {
            // `sort_by_key` is stable, so equal dates keep insertion order.
            self.payments.sort_by_key(|payment| payment.payment_date);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn list(&self) -> &[Payment] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Payments whose `payee_id` points at `payee_id`.
    pub fn referencing<'a>(&'a self, payee_id: &'a str) -> impl Iterator<Item = &'a Payment> + 'a {
        self.payments
            .iter()
            .filter(move |payment| payment.payee_id == payee_id)
    }

    pub fn total(&self) -> f64 {
        self.payments.iter().map(|payment| payment.amount).sum()
    }

    pub fn search(&self, term: &str) -> Vec<&Payment> {
        let needle = term.to_lowercase();
        self.payments
            .iter()
            .filter(|payment| matches_term(&payment.payee_name, &needle))
            .collect()
    }
}
