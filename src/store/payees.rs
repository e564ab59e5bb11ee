use crate::domain::common::{generate_id, matches_term, PAYEE_ID_PREFIX};
use crate::domain::payee::{Payee, PayeeInput};

/// Payees in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PayeeStore {
    payees: Vec<Payee>,
}

impl PayeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payees(payees: Vec<Payee>) -> Self {
        Self { payees }
    }

    /// Appends a payee under a freshly generated id and returns it.
    pub fn add(&mut self, input: PayeeInput) -> &Payee {
        let index = self.payees.len();
        self.payees.push(input.into_payee(generate_id(PAYEE_ID_PREFIX)));
        &self.payees[index]
    }

    /// Full-record replace keeping the id. Returns `false` when `id` is unknown.
    pub fn replace(&mut self, id: &str, input: PayeeInput) -> bool {
        match self.payees.iter_mut().find(|payee| payee.id == id) {
            Some(slot) => {
                *slot = input.into_payee(id);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the payee. Payments referencing it are left as is.
    pub fn remove(&mut self, id: &str) -> Option<Payee> {
        let index = self.payees.iter().position(|payee| payee.id == id)?;
        Some(self.payees.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Payee> {
        self.payees.iter().find(|payee| payee.id == id)
    }

    pub fn list(&self) -> &[Payee] {
        &self.payees
    }

    pub fn ids(&self) -> Vec<String> {
        self.payees.iter().map(|payee| payee.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.payees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payees.is_empty()
    }

    pub fn search(&self, term: &str) -> Vec<&Payee> {
        let needle = term.to_lowercase();
        self.payees
            .iter()
            .filter(|payee| {
                matches_term(&payee.name, &needle)
                    || payee.account_number.contains(&needle)
                    || payee
                        .category
                        .as_deref()
                        .is_some_and(|category| matches_term(category, &needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, number: &str) -> PayeeInput {
        PayeeInput {
            name: name.into(),
            account_number: number.into(),
            category: None,
        }
    }

    #[test]
    fn add_appends_with_generated_ids() {
        let mut store = PayeeStore::with_payees(vec![Payee::new("Existing", "11111").with_id("payee_1")]);
        let first = store.add(input("Gas Co", "12345")).id.clone();
        let second = store.add(input("Water Co", "54321")).id.clone();

        assert_ne!(first, second);
        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Existing", "Gas Co", "Water Co"]);
    }

    #[test]
    fn replace_swaps_the_whole_record() {
        let mut store = PayeeStore::with_payees(vec![
            Payee::new("Old", "11111").with_id("payee_1").with_category("Utilities"),
        ]);
        assert!(store.replace("payee_1", input("New", "22222")));
        let payee = store.get("payee_1").unwrap();
        assert_eq!(payee.name, "New");
        assert_eq!(payee.category, None);
    }

    #[test]
    fn replace_and_remove_of_unknown_ids_are_no_ops() {
        let mut store = PayeeStore::with_payees(vec![Payee::new("Old", "11111").with_id("payee_1")]);
        assert!(!store.replace("payee_9", input("New", "22222")));
        assert!(store.remove("payee_9").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("payee_1").unwrap().name, "Old");
    }

    #[test]
    fn search_matches_name_category_and_number() {
        let store = PayeeStore::with_payees(vec![
            Payee::new("City Electric Co.", "100200300").with_category("Utilities"),
            Payee::new("ConnectNet Broadband", "555666777").with_category("Internet"),
        ]);
        assert_eq!(store.search("electric").len(), 1);
        assert_eq!(store.search("INTERNET").len(), 1);
        assert_eq!(store.search("5556").len(), 1);
        assert!(store.search("gas").is_empty());
    }
}
