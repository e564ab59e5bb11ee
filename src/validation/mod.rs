//! Declarative field validation for the dashboard forms.
//!
//! A [`FormDescriptor`] lists the fields of a form in display order. Each
//! [`FieldDescriptor`] says how the raw text is coerced ([`FieldKind`]) and
//! which [`Rule`]s the coerced value must satisfy. Running a descriptor over
//! a [`FormDraft`] either yields the coerced [`FormValues`] or a
//! [`FieldErrors`] collection carrying every failing message per field.

pub mod schemas;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

pub use schemas::{
    validate_external_transfer, validate_internal_transfer, validate_payee,
    validate_scheduled_payment,
};

/// Message for amount text that does not coerce to a finite number.
pub const NAN_MESSAGE: &str = "Expected number, received nan";
/// Message for date text that is not `YYYY-MM-DD`.
pub const DATE_FORMAT_MESSAGE: &str = "Use YYYY-MM-DD format";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keyed access to the raw text of a form.
pub trait FormDraft {
    /// Field keys in display order.
    fn keys(&self) -> &'static [&'static str];

    fn value(&self, key: &str) -> Option<&str>;

    /// Overwrites a field; returns `false` for unknown keys.
    fn set_value(&mut self, key: &str, value: String) -> bool;
}

/// Per-field validation messages, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((key, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The message displayed next to `key`: the first one recorded.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages(key).first().map(String::as_str)
    }

    pub fn messages(&self, key: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &str, message: &str) -> bool {
        self.messages(key).iter().any(|candidate| candidate == message)
    }

    pub fn has_field(&self, key: &str) -> bool {
        !self.messages(key).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .fields
            .iter()
            .filter_map(|(key, messages)| {
                messages.first().map(|message| format!("{}: {}", key, message))
            })
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// How amount text is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Blank input counts as `0`.
    BlankAsZero,
    /// Blank input is not a number.
    Strict,
}

/// Coerces amount text to a finite number.
pub fn coerce_amount(input: &str, coercion: Coercion) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return match coercion {
            Coercion::BlankAsZero => Some(0.0),
            Coercion::Strict => None,
        };
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Supported data kinds for form fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Decimal(Coercion),
    Date,
    Choice(Vec<&'static str>),
}

type RuleCallback = dyn Fn(&str) -> Result<(), String> + Send + Sync;

/// A constraint on a single field. Messages are shown verbatim.
#[derive(Clone)]
pub enum Rule {
    NonEmpty(&'static str),
    /// Minimum length in characters.
    MinLength(usize, &'static str),
    DigitsOnly(&'static str),
    Positive(&'static str),
    NotBefore(NaiveDate, &'static str),
    /// Value must be one of the field's [`FieldKind::Choice`] options.
    OneOf(&'static str),
    /// Non-empty value must differ from another field's raw value.
    DiffersFrom(&'static str, &'static str),
    Custom(Arc<RuleCallback>),
}

impl Rule {
    fn check<D: FormDraft + ?Sized>(
        &self,
        raw: &str,
        value: &FieldValue,
        kind: &FieldKind,
        draft: &D,
    ) -> Result<(), String> {
        match self {
            Rule::NonEmpty(message) => {
                if raw.trim().is_empty() {
                    return Err(message.to_string());
                }
            }
            Rule::MinLength(min, message) => {
                if raw.chars().count() < *min {
                    return Err(message.to_string());
                }
            }
            Rule::DigitsOnly(message) => {
                if raw.is_empty() || !raw.chars().all(|ch| ch.is_ascii_digit()) {
                    return Err(message.to_string());
                }
            }
            Rule::Positive(message) => {
                if let FieldValue::Number(number) = value {
                    if *number <= 0.0 {
                        return Err(message.to_string());
                    }
                }
            }
            Rule::NotBefore(min_date, message) => {
                if let FieldValue::Date(date) = value {
                    if date < min_date {
                        return Err(message.to_string());
                    }
                }
            }
            Rule::OneOf(message) => {
                if let FieldKind::Choice(options) = kind {
                    if !options.iter().any(|option| *option == raw.trim()) {
                        return Err(message.to_string());
                    }
                }
            }
            Rule::DiffersFrom(other, message) => {
                let other_raw = draft.value(other).unwrap_or("");
                if !raw.is_empty() && raw == other_raw {
                    return Err(message.to_string());
                }
            }
            Rule::Custom(callback) => return callback(raw),
        }
        Ok(())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NonEmpty(message) => write!(f, "NonEmpty({message:?})"),
            Rule::MinLength(min, message) => write!(f, "MinLength({min}, {message:?})"),
            Rule::DigitsOnly(message) => write!(f, "DigitsOnly({message:?})"),
            Rule::Positive(message) => write!(f, "Positive({message:?})"),
            Rule::NotBefore(date, message) => write!(f, "NotBefore({date}, {message:?})"),
            Rule::OneOf(message) => write!(f, "OneOf({message:?})"),
            Rule::DiffersFrom(other, message) => write!(f, "DiffersFrom({other}, {message:?})"),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Declarative description of a single form field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Blank input skips every rule and yields [`FieldValue::Empty`].
    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn coerce(&self, raw: &str) -> Result<FieldValue, &'static str> {
        match &self.kind {
            FieldKind::Text | FieldKind::Choice(_) => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Decimal(coercion) => coerce_amount(raw, *coercion)
                .map(FieldValue::Number)
                .ok_or(NAN_MESSAGE),
            FieldKind::Date => parse_date(raw)
                .map(FieldValue::Date)
                .ok_or(DATE_FORMAT_MESSAGE),
        }
    }
}

/// Metadata describing a full form, including field order.
#[derive(Debug, Clone)]
pub struct FormDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Checks every field and collects all failures before returning.
    pub fn validate<D: FormDraft + ?Sized>(&self, draft: &D) -> Result<FormValues, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut values = FormValues::default();

        for field in &self.fields {
            let raw = draft.value(field.key).unwrap_or("");
            if !field.required && raw.trim().is_empty() {
                values.insert(field.key, FieldValue::Empty);
                continue;
            }
            match field.coerce(raw) {
                Ok(value) => {
                    for rule in &field.rules {
                        if let Err(message) = rule.check(raw, &value, &field.kind, draft) {
                            errors.push(field.key, message);
                        }
                    }
                    values.insert(field.key, value);
                }
                Err(message) => errors.push(field.key, message),
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            tracing::debug!(form = self.name, %errors, "form validation failed");
            Err(errors)
        }
    }
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

/// Coerced values of a form that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    fn insert(&mut self, key: &'static str, value: FieldValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> String {
        self.optional_text(key).unwrap_or_default()
    }

    pub fn optional_text(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(FieldValue::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Result<f64, FieldErrors> {
        match self.values.get(key) {
            Some(FieldValue::Number(number)) => Ok(*number),
            _ => Err(missing(key, NAN_MESSAGE)),
        }
    }

    pub fn date(&self, key: &str) -> Result<NaiveDate, FieldErrors> {
        match self.values.get(key) {
            Some(FieldValue::Date(date)) => Ok(*date),
            _ => Err(missing(key, DATE_FORMAT_MESSAGE)),
        }
    }
}

fn missing(key: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.push(key, message);
    errors
}
