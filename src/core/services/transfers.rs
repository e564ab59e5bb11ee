use crate::confirm::{ConfirmationGate, Proposal};
use crate::currency::format_fixed;
use crate::domain::transfer::{TransferKind, TransferRequest};
use crate::forms::drafts::{ExternalTransferDraft, InternalTransferDraft};
use crate::forms::FormController;
use crate::seed;
use crate::store::AccountDirectory;
use crate::validation::{validate_external_transfer, validate_internal_transfer};

use super::{ServiceError, ServiceResult};

/// Result of confirming a pending transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub request: TransferRequest,
    pub notification: String,
}

/// Internal and external transfer forms behind one confirmation gate.
///
/// Confirming only acknowledges the request; account balances are reference
/// data and never move.
pub struct Transfers {
    accounts: AccountDirectory,
    internal_form: FormController<InternalTransferDraft>,
    external_form: FormController<ExternalTransferDraft>,
    gate: ConfirmationGate<TransferRequest>,
}

impl Transfers {
    pub fn new(accounts: AccountDirectory) -> Self {
        Self {
            accounts,
            internal_form: FormController::new(InternalTransferDraft::default()),
            external_form: FormController::new(ExternalTransferDraft::default()),
            gate: ConfirmationGate::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(AccountDirectory::new(seed::transfer_accounts()))
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    pub fn internal_form(&self) -> &FormController<InternalTransferDraft> {
        &self.internal_form
    }

    pub fn internal_form_mut(&mut self) -> &mut FormController<InternalTransferDraft> {
        &mut self.internal_form
    }

    pub fn external_form(&self) -> &FormController<ExternalTransferDraft> {
        &self.external_form
    }

    pub fn external_form_mut(&mut self) -> &mut FormController<ExternalTransferDraft> {
        &mut self.external_form
    }

    pub fn pending(&self) -> Option<&Proposal<TransferRequest>> {
        self.gate.pending()
    }

    /// Validates the internal form and opens the confirmation gate.
    pub fn submit_internal(&mut self) -> ServiceResult<&Proposal<TransferRequest>> {
        let request = self
            .internal_form
            .validate_for_confirmation(validate_internal_transfer)?;
        self.propose(request)
    }

    /// Validates the external form and opens the confirmation gate.
    pub fn submit_external(&mut self) -> ServiceResult<&Proposal<TransferRequest>> {
        let request = self
            .external_form
            .validate_for_confirmation(validate_external_transfer)?;
        self.propose(request)
    }

    fn propose(&mut self, request: TransferRequest) -> ServiceResult<&Proposal<TransferRequest>> {
        let summary = self.summary_for(&request);
        tracing::info!(kind = %request.kind(), amount = request.amount(), "transfer proposed");
        if let Some(replaced) = self.gate.propose(summary, request) {
            tracing::debug!(kind = %replaced.action.kind(), "pending transfer replaced");
            let current = self.gate.pending().map(|proposal| proposal.action.kind());
            if current != Some(replaced.action.kind()) {
                self.return_to_editing(replaced.action.kind());
            }
        }
        self.gate.pending().ok_or(ServiceError::NothingPending)
    }

    /// Confirmation sentence shown before the transfer is submitted.
    pub fn summary_for(&self, request: &TransferRequest) -> String {
        match request {
            TransferRequest::Internal(transfer) => format!(
                "Transfer ${} from {} to {}?",
                format_fixed(transfer.amount),
                self.accounts.label(&transfer.from_account),
                self.accounts.label(&transfer.to_account)
            ),
            TransferRequest::External(transfer) => format!(
                "Transfer ${} from {} to {} (Acc: {}, Bank: {})?",
                format_fixed(transfer.amount),
                self.accounts.label(&transfer.from_account),
                transfer.recipient_name,
                transfer.recipient_account_number,
                transfer.bank_identifier
            ),
        }
    }

    /// Accepts the pending transfer and resets the form it came from.
    pub fn confirm(&mut self) -> ServiceResult<TransferReceipt> {
        let proposal = self.gate.confirm().ok_or(ServiceError::NothingPending)?;
        let kind = proposal.action.kind();
        let notification = match kind {
            TransferKind::Internal => {
                self.internal_form.commit();
                "Internal transfer initiated successfully!"
            }
            TransferKind::External => {
                self.external_form.commit();
                "External transfer initiated successfully!"
            }
        };
        tracing::info!(kind = %kind, amount = proposal.action.amount(), "transfer confirmed");
        Ok(TransferReceipt {
            request: proposal.action,
            notification: notification.to_string(),
        })
    }

    /// Discards the pending transfer and keeps its draft. Safe to repeat.
    pub fn cancel(&mut self) -> bool {
        let kind = self.gate.pending().map(|proposal| proposal.action.kind());
        let cancelled = self.gate.cancel();
        if let Some(kind) = kind {
            self.return_to_editing(kind);
            tracing::info!(kind = %kind, "transfer cancelled");
        }
        cancelled
    }

    fn return_to_editing(&mut self, kind: TransferKind) {
        match kind {
            TransferKind::Internal => self.internal_form.return_to_editing(),
            TransferKind::External => self.external_form.return_to_editing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormPhase;

    fn fill_internal(transfers: &mut Transfers, from: &str, to: &str, amount: &str) {
        let form = transfers.internal_form_mut();
        form.open_create();
        form.set_field("from_account", from);
        form.set_field("to_account", to);
        form.set_field("amount", amount);
    }

    #[test]
    fn internal_summary_uses_account_labels() {
        let mut transfers = Transfers::seeded();
        fill_internal(&mut transfers, "acc_chk_001", "acc_sav_002", "100");
        let proposal = transfers.submit_internal().unwrap();
        assert_eq!(
            proposal.summary,
            "Transfer $100.00 from Main Checking (•••• 1234) to High-Yield Savings (•••• 5678)?"
        );
        assert_eq!(transfers.internal_form().phase(), FormPhase::AwaitingConfirmation);
    }

    #[test]
    fn summary_amount_rounds_ties_up() {
        let mut transfers = Transfers::seeded();
        fill_internal(&mut transfers, "acc_chk_001", "acc_sav_002", "1.125");
        let proposal = transfers.submit_internal().unwrap();
        assert_eq!(
            proposal.summary,
            "Transfer $1.13 from Main Checking (•••• 1234) to High-Yield Savings (•••• 5678)?"
        );
    }

    #[test]
    fn external_summary_names_the_recipient() {
        let mut transfers = Transfers::seeded();
        let form = transfers.external_form_mut();
        form.open_create();
        form.set_field("from_account", "acc_bus_003");
        form.set_field("recipient_name", "Alex Smith");
        form.set_field("recipient_account_number", "99887766");
        form.set_field("bank_identifier", "BOFAUS3N");
        form.set_field("amount", "250.5");

        let summary = transfers.submit_external().unwrap().summary.clone();
        assert_eq!(
            summary,
            "Transfer $250.50 from Business Account (•••• 9012) to Alex Smith (Acc: 99887766, Bank: BOFAUS3N)?"
        );

        let receipt = transfers.confirm().unwrap();
        assert_eq!(receipt.notification, "External transfer initiated successfully!");
        assert_eq!(transfers.external_form().draft(), &ExternalTransferDraft::default());
        assert!(!transfers.external_form().is_open());
    }

    #[test]
    fn unknown_accounts_fall_back_to_ids() {
        let mut transfers = Transfers::seeded();
        fill_internal(&mut transfers, "acc_gone", "acc_sav_002", "1");
        let proposal = transfers.submit_internal().unwrap();
        assert!(proposal.summary.starts_with("Transfer $1.00 from acc_gone to "));
    }

    #[test]
    fn invalid_submission_never_opens_the_gate() {
        let mut transfers = Transfers::seeded();
        fill_internal(&mut transfers, "acc_chk_001", "acc_chk_001", "10");
        assert!(transfers.submit_internal().is_err());
        assert!(transfers.pending().is_none());
        assert!(matches!(transfers.confirm(), Err(ServiceError::NothingPending)));
    }

    #[test]
    fn cancel_keeps_the_draft_and_is_idempotent() {
        let mut transfers = Transfers::seeded();
        fill_internal(&mut transfers, "acc_chk_001", "acc_sav_002", "75");
        transfers.submit_internal().unwrap();

        assert!(transfers.cancel());
        assert!(!transfers.cancel());
        assert_eq!(transfers.internal_form().phase(), FormPhase::Editing);
        assert_eq!(transfers.internal_form().draft().amount, "75");
    }
}
