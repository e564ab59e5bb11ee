mod common;

use common::{date, setup_test_env, today};
use findash_core::{
    core::services::{PayeeOutcome, ServiceError},
    forms::{
        drafts::{PayeeDraft, PaymentDraft},
        FormPhase,
    },
    validation::schemas::{
        ACCOUNT_NUMBER_DIGITS, ACCOUNT_NUMBER_MIN, PAYEE_NAME_MIN, PAYMENT_AMOUNT_POSITIVE,
        PAYMENT_DATE_PAST, SELECT_PAYEE,
    },
};

fn payment(payee_id: &str, amount: &str, payment_date: &str, frequency: &str) -> PaymentDraft {
    PaymentDraft {
        payee_id: payee_id.into(),
        amount: amount.into(),
        payment_date: payment_date.into(),
        frequency: frequency.into(),
    }
}

#[test]
fn new_payee_can_be_paid_and_is_listed_in_date_order() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;

    let gas = match bill_pay
        .add_payee(PayeeDraft::new("Gas Co", "12345").with_category("Utilities"))
        .expect("payee is valid")
    {
        PayeeOutcome::Added(payee) => payee,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(bill_pay.payees().len(), 5);
    assert_eq!(gas.category.as_deref(), Some("Utilities"));
    assert!(!bill_pay.payee_form().is_open());

    let tomorrow = today().succ_opt().expect("next day");
    let scheduled = bill_pay
        .schedule_payment(payment(
            &gas.id,
            "42.10",
            &tomorrow.format("%Y-%m-%d").to_string(),
            "Monthly",
        ))
        .expect("payment is valid");
    assert_eq!(scheduled.payee_name, "Gas Co");
    assert_eq!(scheduled.payment_date, tomorrow);

    let dates: Vec<_> = bill_pay
        .upcoming()
        .list()
        .iter()
        .map(|payment| payment.payment_date)
        .collect();
    assert_eq!(dates, vec![tomorrow, date(2024, 8, 15), date(2024, 8, 20)]);
    assert_eq!(bill_pay.upcoming().list()[0].payee_name, "Gas Co");
}

#[test]
fn payment_snapshot_survives_payee_deletion() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;

    let removed = bill_pay.delete_payee("payee_1").expect("seeded payee");
    assert_eq!(removed.name, "City Electric Co.");
    assert!(bill_pay.payees().get("payee_1").is_none());

    let dangling: Vec<_> = bill_pay.upcoming().referencing("payee_1").collect();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].payee_name, "City Electric Co.");
}

#[test]
fn deleting_every_payee_leaves_an_empty_store() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;
    for id in ["payee_1", "payee_2", "payee_3", "payee_4"] {
        assert!(bill_pay.delete_payee(id).is_some());
    }
    assert!(bill_pay.payees().is_empty());
    assert!(bill_pay.delete_payee("payee_1").is_none());
}

#[test]
fn payee_validation_reports_each_field() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;

    let err = bill_pay
        .add_payee(PayeeDraft::new("G", "12ab"))
        .expect_err("invalid payee");
    let errors = err.field_errors().expect("field errors");
    assert!(errors.contains("name", PAYEE_NAME_MIN));
    assert!(errors.contains("account_number", ACCOUNT_NUMBER_MIN));
    assert!(errors.contains("account_number", ACCOUNT_NUMBER_DIGITS));
    assert_eq!(bill_pay.payees().len(), 4);
    assert_eq!(bill_pay.payee_form().phase(), FormPhase::Editing);
}

#[test]
fn editing_a_payee_keeps_its_identifier() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;

    let outcome = bill_pay
        .edit_payee("payee_1", PayeeDraft::new("City Power", "100200300"))
        .expect("valid edit");
    match outcome {
        PayeeOutcome::Updated(payee) => {
            assert_eq!(payee.id, "payee_1");
            assert_eq!(payee.name, "City Power");
            assert_eq!(payee.category, None);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(bill_pay.payees().len(), 4);

    assert!(matches!(
        bill_pay.open_edit_payee("payee_99"),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn payment_rules_cover_payee_amount_and_date() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;

    let err = bill_pay
        .schedule_payment(payment("", "", "2024-07-31", "One-time"))
        .expect_err("invalid payment");
    let errors = err.field_errors().expect("field errors");
    assert!(errors.contains("payee_id", SELECT_PAYEE));
    assert!(errors.contains("amount", PAYMENT_AMOUNT_POSITIVE));
    assert!(errors.contains("payment_date", PAYMENT_DATE_PAST));
    assert_eq!(bill_pay.upcoming().len(), 2);

    let same_day = bill_pay
        .schedule_payment(payment("payee_2", "10", "2024-08-01", "One-time"))
        .expect("today is allowed");
    assert_eq!(same_day.payee_name, "AquaFlow Water");
}

#[test]
fn schedule_form_defaults_to_today() {
    let (mut dashboard, _) = setup_test_env();
    let bill_pay = &mut dashboard.bill_pay;
    bill_pay.open_schedule_payment();
    let draft = bill_pay.payment_form().draft();
    assert_eq!(draft.payment_date, "2024-08-01");
    assert_eq!(draft.frequency, "One-time");
    assert!(draft.payee_id.is_empty());
}

#[test]
fn history_is_read_only_and_kept_in_seed_order() {
    let (dashboard, _) = setup_test_env();
    let ids: Vec<_> = dashboard
        .bill_pay
        .history()
        .list()
        .iter()
        .map(|payment| payment.id.as_str())
        .collect();
    assert_eq!(ids, ["ph_1", "ph_2", "ph_3"]);
}
