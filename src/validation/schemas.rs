//! Schemas for the bill-pay and transfer forms.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::payee::PayeeInput;
use crate::domain::payment::{Frequency, ScheduledPaymentInput};
use crate::domain::transfer::{ExternalTransfer, InternalTransfer, TransferRequest};
use crate::forms::drafts::{ExternalTransferDraft, InternalTransferDraft, PayeeDraft, PaymentDraft};
use crate::validation::{
    Coercion, FieldDescriptor, FieldErrors, FieldKind, FormDescriptor, FormValues, Rule,
};

pub const PAYEE_NAME_MIN: &str = "Payee name must be at least 2 characters.";
pub const ACCOUNT_NUMBER_MIN: &str = "Account number must be valid (min 5 digits).";
pub const ACCOUNT_NUMBER_DIGITS: &str = "Account number must be digits only.";

pub const SELECT_PAYEE: &str = "Please select a payee.";
pub const UNKNOWN_PAYEE: &str = "Please select a valid payee.";
pub const PAYMENT_AMOUNT_POSITIVE: &str = "Amount must be positive.";
pub const PAYMENT_DATE_PAST: &str = "Payment date cannot be in the past.";
pub const FREQUENCY_CHOICE: &str = "Frequency must be One-time or Monthly.";

pub const SELECT_SOURCE: &str = "Please select a source account";
pub const SELECT_DESTINATION: &str = "Please select a destination account";
pub const SAME_ACCOUNTS: &str = "Source and destination accounts cannot be the same";
pub const TRANSFER_AMOUNT_POSITIVE: &str = "Amount must be a positive number";
pub const RECIPIENT_NAME_MIN: &str = "Recipient name must be at least 2 characters";
pub const RECIPIENT_ACCOUNT_MIN: &str = "Recipient account number must be at least 5 digits";
pub const BANK_IDENTIFIER_MIN: &str = "Bank identifier (e.g., SWIFT/ABA) is required";

pub fn payee_schema() -> FormDescriptor {
    FormDescriptor::new(
        "payee",
        vec![
            FieldDescriptor::new("name", "Payee Name", FieldKind::Text)
                .with_rule(Rule::MinLength(2, PAYEE_NAME_MIN)),
            FieldDescriptor::new("account_number", "Account Number", FieldKind::Text)
                .with_rule(Rule::MinLength(5, ACCOUNT_NUMBER_MIN))
                .with_rule(Rule::DigitsOnly(ACCOUNT_NUMBER_DIGITS)),
            FieldDescriptor::new("category", "Category (Optional)", FieldKind::Text)
                .with_optional(),
        ],
    )
}

/// Schedule-payment schema bound to the payees that exist right now and to `today`.
pub fn payment_schema(known_payee_ids: &[String], today: NaiveDate) -> FormDescriptor {
    let known: HashSet<String> = known_payee_ids.iter().cloned().collect();
    let membership = Rule::Custom(Arc::new(move |input: &str| {
        if input.is_empty() || known.contains(input) {
            Ok(())
        } else {
            Err(UNKNOWN_PAYEE.to_string())
        }
    }));

    FormDescriptor::new(
        "schedule_payment",
        vec![
            FieldDescriptor::new("payee_id", "Payee", FieldKind::Text)
                .with_rule(Rule::NonEmpty(SELECT_PAYEE))
                .with_rule(membership),
            FieldDescriptor::new(
                "amount",
                "Amount ($)",
                FieldKind::Decimal(Coercion::BlankAsZero),
            )
            .with_rule(Rule::Positive(PAYMENT_AMOUNT_POSITIVE)),
            FieldDescriptor::new("payment_date", "Payment Date", FieldKind::Date)
                .with_rule(Rule::NotBefore(today, PAYMENT_DATE_PAST)),
            FieldDescriptor::new(
                "frequency",
                "Frequency",
                FieldKind::Choice(Frequency::LABELS.to_vec()),
            )
            .with_optional()
            .with_rule(Rule::OneOf(FREQUENCY_CHOICE)),
        ],
    )
}

fn transfer_amount() -> FieldDescriptor {
    FieldDescriptor::new("amount", "Amount", FieldKind::Decimal(Coercion::Strict))
        .with_rule(Rule::Positive(TRANSFER_AMOUNT_POSITIVE))
}

fn memo() -> FieldDescriptor {
    FieldDescriptor::new("memo", "Memo (Optional)", FieldKind::Text).with_optional()
}

fn source_account() -> FieldDescriptor {
    FieldDescriptor::new("from_account", "From Account", FieldKind::Text)
        .with_rule(Rule::NonEmpty(SELECT_SOURCE))
}

pub fn internal_transfer_schema() -> FormDescriptor {
    FormDescriptor::new(
        "internal_transfer",
        vec![
            source_account(),
            FieldDescriptor::new("to_account", "To Account", FieldKind::Text)
                .with_rule(Rule::NonEmpty(SELECT_DESTINATION))
                .with_rule(Rule::DiffersFrom("from_account", SAME_ACCOUNTS)),
            transfer_amount(),
            memo(),
        ],
    )
}

pub fn external_transfer_schema() -> FormDescriptor {
    FormDescriptor::new(
        "external_transfer",
        vec![
            source_account(),
            FieldDescriptor::new("recipient_name", "Recipient Name", FieldKind::Text)
                .with_rule(Rule::MinLength(2, RECIPIENT_NAME_MIN)),
            FieldDescriptor::new(
                "recipient_account_number",
                "Recipient Account Number",
                FieldKind::Text,
            )
            .with_rule(Rule::MinLength(5, RECIPIENT_ACCOUNT_MIN)),
            FieldDescriptor::new("bank_identifier", "Bank Identifier", FieldKind::Text)
                .with_rule(Rule::MinLength(3, BANK_IDENTIFIER_MIN)),
            transfer_amount(),
            memo(),
        ],
    )
}

pub fn validate_payee(draft: &PayeeDraft) -> Result<PayeeInput, FieldErrors> {
    let values = payee_schema().validate(draft)?;
    Ok(PayeeInput {
        name: values.text("name"),
        account_number: values.text("account_number"),
        category: values.optional_text("category"),
    })
}

pub fn validate_scheduled_payment(
    draft: &PaymentDraft,
    known_payee_ids: &[String],
    today: NaiveDate,
) -> Result<ScheduledPaymentInput, FieldErrors> {
    let values = payment_schema(known_payee_ids, today).validate(draft)?;
    Ok(ScheduledPaymentInput {
        payee_id: values.text("payee_id"),
        amount: values.number("amount")?,
        payment_date: values.date("payment_date")?,
        frequency: frequency_of(&values)?,
    })
}

fn frequency_of(values: &FormValues) -> Result<Frequency, FieldErrors> {
    match values.optional_text("frequency") {
        None => Ok(Frequency::default()),
        Some(label) => label.parse().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.push("frequency", FREQUENCY_CHOICE);
            errors
        }),
    }
}

pub fn validate_internal_transfer(
    draft: &InternalTransferDraft,
) -> Result<TransferRequest, FieldErrors> {
    let values = internal_transfer_schema().validate(draft)?;
    Ok(TransferRequest::Internal(InternalTransfer {
        from_account: values.text("from_account"),
        to_account: values.text("to_account"),
        amount: values.number("amount")?,
        memo: values.optional_text("memo"),
    }))
}

pub fn validate_external_transfer(
    draft: &ExternalTransferDraft,
) -> Result<TransferRequest, FieldErrors> {
    let values = external_transfer_schema().validate(draft)?;
    Ok(TransferRequest::External(ExternalTransfer {
        from_account: values.text("from_account"),
        recipient_name: values.text("recipient_name"),
        recipient_account_number: values.text("recipient_account_number"),
        bank_identifier: values.text("bank_identifier"),
        amount: values.number("amount")?,
        memo: values.optional_text("memo"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{DATE_FORMAT_MESSAGE, NAN_MESSAGE};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 10).unwrap()
    }

    fn payee_ids() -> Vec<String> {
        vec!["payee_1".into(), "payee_2".into()]
    }

    fn payment(payee_id: &str, amount: &str, date: &str) -> PaymentDraft {
        PaymentDraft {
            payee_id: payee_id.into(),
            amount: amount.into(),
            payment_date: date.into(),
            frequency: "Monthly".into(),
        }
    }

    #[test]
    fn payee_accepts_valid_draft_and_drops_blank_category() {
        let input = validate_payee(&PayeeDraft::new("Gas Co", "12345")).unwrap();
        assert_eq!(input.name, "Gas Co");
        assert_eq!(input.account_number, "12345");
        assert_eq!(input.category, None);

        let with_category =
            validate_payee(&PayeeDraft::new("Gas Co", "12345").with_category("Utilities"))
                .unwrap();
        assert_eq!(with_category.category.as_deref(), Some("Utilities"));
    }

    #[test]
    fn payee_account_number_rules_both_report() {
        let errors = validate_payee(&PayeeDraft::new("X", "12a")).unwrap_err();
        assert_eq!(errors.message("name"), Some(PAYEE_NAME_MIN));
        assert_eq!(
            errors.messages("account_number"),
            [ACCOUNT_NUMBER_MIN.to_string(), ACCOUNT_NUMBER_DIGITS.to_string()]
        );
    }

    #[test]
    fn payee_non_digit_account_numbers_always_fail_digits_rule() {
        for number in ["12345a", "a2345", "123 456", "12-345-67", "１２３４５", "-12345"] {
            let errors = validate_payee(&PayeeDraft::new("Gas Co", number)).unwrap_err();
            assert!(
                errors.contains("account_number", ACCOUNT_NUMBER_DIGITS),
                "{number} should fail the digits rule: {errors}"
            );
        }
    }

    #[test]
    fn payment_requires_a_known_payee() {
        let blank = validate_scheduled_payment(&payment("", "10", "2024-08-10"), &payee_ids(), today())
            .unwrap_err();
        assert_eq!(blank.messages("payee_id"), [SELECT_PAYEE.to_string()]);

        let unknown =
            validate_scheduled_payment(&payment("payee_9", "10", "2024-08-10"), &payee_ids(), today())
                .unwrap_err();
        assert_eq!(unknown.message("payee_id"), Some(UNKNOWN_PAYEE));
    }

    #[test]
    fn payment_amount_is_coerced_from_text() {
        let zero = validate_scheduled_payment(&payment("payee_1", "", "2024-08-10"), &payee_ids(), today())
            .unwrap_err();
        assert_eq!(zero.message("amount"), Some(PAYMENT_AMOUNT_POSITIVE));

        let garbage =
            validate_scheduled_payment(&payment("payee_1", "ten", "2024-08-10"), &payee_ids(), today())
                .unwrap_err();
        assert_eq!(garbage.message("amount"), Some(NAN_MESSAGE));

        let ok = validate_scheduled_payment(&payment("payee_1", " 42.50 ", "2024-08-10"), &payee_ids(), today())
            .unwrap();
        assert_eq!(ok.amount, 42.5);
        assert_eq!(ok.frequency, Frequency::Monthly);
    }

    #[test]
    fn payment_dates_before_today_are_rejected() {
        for date in ["2024-08-09", "2023-12-31", "1999-01-01"] {
            let errors =
                validate_scheduled_payment(&payment("payee_1", "5", date), &payee_ids(), today())
                    .unwrap_err();
            assert_eq!(errors.message("payment_date"), Some(PAYMENT_DATE_PAST));
        }
        assert!(validate_scheduled_payment(&payment("payee_1", "5", "2024-08-10"), &payee_ids(), today()).is_ok());

        let malformed =
            validate_scheduled_payment(&payment("payee_1", "5", "08/12/2024"), &payee_ids(), today())
                .unwrap_err();
        assert_eq!(malformed.message("payment_date"), Some(DATE_FORMAT_MESSAGE));
    }

    #[test]
    fn payment_frequency_defaults_and_rejects_unknown_labels() {
        let mut draft = payment("payee_1", "5", "2024-08-11");
        draft.frequency = String::new();
        let input = validate_scheduled_payment(&draft, &payee_ids(), today()).unwrap();
        assert_eq!(input.frequency, Frequency::OneTime);

        draft.frequency = "Weekly".into();
        let errors = validate_scheduled_payment(&draft, &payee_ids(), today()).unwrap_err();
        assert_eq!(errors.message("frequency"), Some(FREQUENCY_CHOICE));
    }

    #[test]
    fn internal_transfer_same_accounts_fail_on_destination_for_any_amount() {
        for amount in ["100", "0", "-5", "", "abc", "0.01"] {
            let draft = InternalTransferDraft {
                from_account: "acc_chk_001".into(),
                to_account: "acc_chk_001".into(),
                amount: amount.into(),
                memo: String::new(),
            };
            let errors = validate_internal_transfer(&draft).unwrap_err();
            assert!(errors.contains("to_account", SAME_ACCOUNTS), "amount {amount:?}");
            assert!(!errors.has_field("from_account"));
        }
    }

    #[test]
    fn internal_transfer_requires_both_accounts_and_numeric_amount() {
        let errors = validate_internal_transfer(&InternalTransferDraft::default()).unwrap_err();
        assert_eq!(errors.message("from_account"), Some(SELECT_SOURCE));
        assert_eq!(errors.messages("to_account"), [SELECT_DESTINATION.to_string()]);
        assert_eq!(errors.message("amount"), Some(NAN_MESSAGE));
        assert!(!errors.has_field("memo"));
    }

    #[test]
    fn internal_transfer_builds_request() {
        let draft = InternalTransferDraft {
            from_account: "acc_chk_001".into(),
            to_account: "acc_sav_002".into(),
            amount: "250".into(),
            memo: "rent buffer".into(),
        };
        let request = validate_internal_transfer(&draft).unwrap();
        assert_eq!(
            request,
            TransferRequest::Internal(InternalTransfer {
                from_account: "acc_chk_001".into(),
                to_account: "acc_sav_002".into(),
                amount: 250.0,
                memo: Some("rent buffer".into()),
            })
        );
    }

    #[test]
    fn external_transfer_reports_each_field() {
        let draft = ExternalTransferDraft {
            from_account: String::new(),
            recipient_name: "A".into(),
            recipient_account_number: "1234".into(),
            bank_identifier: "AB".into(),
            amount: "-1".into(),
            memo: String::new(),
        };
        let errors = validate_external_transfer(&draft).unwrap_err();
        assert_eq!(errors.message("from_account"), Some(SELECT_SOURCE));
        assert_eq!(errors.message("recipient_name"), Some(RECIPIENT_NAME_MIN));
        assert_eq!(errors.message("recipient_account_number"), Some(RECIPIENT_ACCOUNT_MIN));
        assert_eq!(errors.message("bank_identifier"), Some(BANK_IDENTIFIER_MIN));
        assert_eq!(errors.message("amount"), Some(TRANSFER_AMOUNT_POSITIVE));
    }

    #[test]
    fn external_transfer_builds_request() {
        let draft = ExternalTransferDraft {
            from_account: "acc_chk_001".into(),
            recipient_name: "Alex Kim".into(),
            recipient_account_number: "9876543".into(),
            bank_identifier: "CHASUS33".into(),
            amount: "75.25".into(),
            memo: String::new(),
        };
        match validate_external_transfer(&draft).unwrap() {
            TransferRequest::External(transfer) => {
                assert_eq!(transfer.recipient_name, "Alex Kim");
                assert_eq!(transfer.amount, 75.25);
                assert_eq!(transfer.memo, None);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }
}
