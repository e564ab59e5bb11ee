mod common;

use common::setup_test_env;
use findash_core::{
    core::services::ServiceError,
    domain::transfer::TransferRequest,
    forms::{
        drafts::{ExternalTransferDraft, InternalTransferDraft},
        FormPhase,
    },
    validation::schemas::{SAME_ACCOUNTS, TRANSFER_AMOUNT_POSITIVE},
    Dashboard,
};

fn fill_internal(dashboard: &mut Dashboard, from: &str, to: &str, amount: &str) {
    let form = dashboard.transfers.internal_form_mut();
    form.open_create();
    *form.draft_mut() = InternalTransferDraft {
        from_account: from.into(),
        to_account: to.into(),
        amount: amount.into(),
        memo: String::new(),
    };
}

fn balances(dashboard: &Dashboard) -> Vec<f64> {
    dashboard
        .transfers
        .accounts()
        .list()
        .iter()
        .map(|account| account.balance)
        .collect()
}

#[test]
fn internal_transfer_is_confirmed_without_moving_money() {
    let (mut dashboard, _) = setup_test_env();
    let before = balances(&dashboard);
    fill_internal(&mut dashboard, "acc_chk_001", "acc_sav_002", "250");

    let summary = dashboard
        .transfers
        .submit_internal()
        .expect("valid transfer")
        .summary
        .clone();
    assert_eq!(
        summary,
        "Transfer $250.00 from Main Checking (•••• 1234) to High-Yield Savings (•••• 5678)?"
    );
    assert_eq!(
        dashboard.transfers.internal_form().phase(),
        FormPhase::AwaitingConfirmation
    );

    let receipt = dashboard.transfers.confirm().expect("pending transfer");
    assert_eq!(receipt.notification, "Internal transfer initiated successfully!");
    assert!(matches!(receipt.request, TransferRequest::Internal(_)));
    assert_eq!(balances(&dashboard), before);
    assert!(dashboard.transfers.pending().is_none());
    assert_eq!(dashboard.transfers.internal_form().draft().amount, "");
}

#[test]
fn cancel_keeps_the_draft_and_is_idempotent() {
    let (mut dashboard, _) = setup_test_env();
    fill_internal(&mut dashboard, "acc_chk_001", "acc_bus_003", "75.5");
    dashboard.transfers.submit_internal().expect("valid transfer");

    assert!(dashboard.transfers.cancel());
    assert!(!dashboard.transfers.cancel());
    let form = dashboard.transfers.internal_form();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.draft().amount, "75.5");
    assert!(matches!(
        dashboard.transfers.confirm(),
        Err(ServiceError::NothingPending)
    ));
}

#[test]
fn same_account_and_bad_amount_are_rejected() {
    let (mut dashboard, _) = setup_test_env();
    fill_internal(&mut dashboard, "acc_chk_001", "acc_chk_001", "-3");

    let err = dashboard
        .transfers
        .submit_internal()
        .expect_err("invalid transfer");
    let errors = err.field_errors().expect("field errors");
    assert!(errors.contains("to_account", SAME_ACCOUNTS));
    assert!(errors.contains("amount", TRANSFER_AMOUNT_POSITIVE));
    assert!(dashboard.transfers.pending().is_none());
}

#[test]
fn external_transfer_summary_names_the_recipient() {
    let (mut dashboard, _) = setup_test_env();
    let form = dashboard.transfers.external_form_mut();
    form.open_create();
    *form.draft_mut() = ExternalTransferDraft {
        from_account: "acc_sav_002".into(),
        recipient_name: "Jane Doe".into(),
        recipient_account_number: "987654321".into(),
        bank_identifier: "CHASUS33".into(),
        amount: "1200".into(),
        memo: "Rent".into(),
    };

    let proposal = dashboard.transfers.submit_external().expect("valid transfer");
    assert_eq!(
        proposal.summary,
        "Transfer $1200.00 from High-Yield Savings (•••• 5678) to Jane Doe (Acc: 987654321, Bank: CHASUS33)?"
    );
    assert_eq!(proposal.action.memo(), Some("Rent"));

    let receipt = dashboard.transfers.confirm().expect("pending transfer");
    assert_eq!(receipt.notification, "External transfer initiated successfully!");
}

#[test]
fn a_second_proposal_replaces_the_first() {
    let (mut dashboard, _) = setup_test_env();
    fill_internal(&mut dashboard, "acc_chk_001", "acc_sav_002", "10");
    dashboard.transfers.submit_internal().expect("valid transfer");

    let form = dashboard.transfers.external_form_mut();
    form.open_create();
    *form.draft_mut() = ExternalTransferDraft {
        from_account: "acc_chk_001".into(),
        recipient_name: "Jo".into(),
        recipient_account_number: "12345".into(),
        bank_identifier: "ABA".into(),
        amount: "5".into(),
        memo: String::new(),
    };
    dashboard.transfers.submit_external().expect("valid transfer");

    assert_eq!(
        dashboard.transfers.internal_form().phase(),
        FormPhase::Editing
    );
    let pending = dashboard.transfers.pending().expect("pending transfer");
    assert!(matches!(pending.action, TransferRequest::External(_)));
}
