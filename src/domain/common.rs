use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

pub const PAYEE_ID_PREFIX: &str = "payee";
pub const PAYMENT_ID_PREFIX: &str = "payment";

/// Generates a `<prefix>_<uuid>` identifier.
///
/// Random suffixes keep ids unique under rapid successive creation.
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Case-insensitive substring match shared by the search helpers.
pub fn matches_term(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_do_not_collide() {
        let first = generate_id(PAYEE_ID_PREFIX);
        let second = generate_id(PAYEE_ID_PREFIX);
        assert!(first.starts_with("payee_"));
        assert_ne!(first, second);
    }
}
