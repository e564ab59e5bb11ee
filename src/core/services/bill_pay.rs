use std::sync::Arc;

use crate::domain::payee::Payee;
use crate::domain::payment::Payment;
use crate::forms::drafts::{PayeeDraft, PaymentDraft};
use crate::forms::{FormController, FormMode};
use crate::seed;
use crate::store::{PayeeStore, PaymentStore};
use crate::time::Clock;
use crate::validation::{validate_payee, validate_scheduled_payment};

use super::{ServiceError, ServiceResult};

/// What a payee submission did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum PayeeOutcome {
    Added(Payee),
    Updated(Payee),
    /// The edited payee was removed while its form was open; nothing changed.
    Missing { id: String },
}

/// Payees plus upcoming and past payments, with the two forms that edit them.
pub struct BillPay {
    clock: Arc<dyn Clock>,
    payees: PayeeStore,
    upcoming: PaymentStore,
    history: PaymentStore,
    payee_form: FormController<PayeeDraft>,
    payment_form: FormController<PaymentDraft>,
}

impl BillPay {
    pub fn new(
        clock: Arc<dyn Clock>,
        payees: PayeeStore,
        upcoming: PaymentStore,
        history: PaymentStore,
    ) -> Self {
        let payment_defaults = PaymentDraft::defaults(clock.today());
        Self {
            clock,
            payees,
            upcoming,
            history,
            payee_form: FormController::new(PayeeDraft::default()),
            payment_form: FormController::new(payment_defaults),
        }
    }

    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            clock,
            PayeeStore::with_payees(seed::payees()),
            PaymentStore::upcoming(seed::upcoming_payments()),
            PaymentStore::history(seed::payment_history()),
        )
    }

    pub fn payees(&self) -> &PayeeStore {
        &self.payees
    }

    pub fn upcoming(&self) -> &PaymentStore {
        &self.upcoming
    }

    pub fn history(&self) -> &PaymentStore {
        &self.history
    }

    pub fn payee_form(&self) -> &FormController<PayeeDraft> {
        &self.payee_form
    }

    pub fn payee_form_mut(&mut self) -> &mut FormController<PayeeDraft> {
        &mut self.payee_form
    }

    pub fn payment_form(&self) -> &FormController<PaymentDraft> {
        &self.payment_form
    }

    pub fn payment_form_mut(&mut self) -> &mut FormController<PaymentDraft> {
        &mut self.payment_form
    }

    pub fn open_add_payee(&mut self) {
        self.payee_form.open_create();
    }

    /// Opens the payee form pre-filled from the stored record.
    pub fn open_edit_payee(&mut self, id: &str) -> ServiceResult<()> {
        let payee = self
            .payees
            .get(id)
            .ok_or_else(|| ServiceError::NotFound(format!("Payee `{}`", id)))?;
        let draft = PayeeDraft::from(payee);
        self.payee_form.open_edit(id, draft);
        Ok(())
    }

    /// Validates the payee form and appends or replaces the record.
    pub fn submit_payee(&mut self) -> ServiceResult<PayeeOutcome> {
        let mode = self.payee_form.mode().clone();
        let input = self.payee_form.submit(validate_payee)?;
        let outcome = match mode {
            FormMode::Create => {
                let payee = self.payees.add(input).clone();
                tracing::info!(payee_id = %payee.id, name = %payee.name, "payee added");
                PayeeOutcome::Added(payee)
            }
            FormMode::Edit { id } => {
                if self.payees.replace(&id, input) {
                    let payee = self
                        .payees
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| ServiceError::NotFound(format!("Payee `{}`", id)))?;
                    tracing::info!(payee_id = %id, "payee updated");
                    PayeeOutcome::Updated(payee)
                } else {
                    tracing::debug!(payee_id = %id, "edit target no longer exists");
                    PayeeOutcome::Missing { id }
                }
            }
        };
        Ok(outcome)
    }

    /// Removes the payee without touching payments that reference it.
    pub fn delete_payee(&mut self, id: &str) -> Option<Payee> {
        let removed = self.payees.remove(id)?;
        let dangling = self.upcoming.referencing(id).count();
        if dangling > 0 {
            tracing::warn!(
                payee_id = %id,
                upcoming = dangling,
                "deleted payee is still referenced by upcoming payments"
            );
        }
        tracing::info!(payee_id = %id, name = %removed.name, "payee removed");
        Some(removed)
    }

    /// Opens the schedule form with defaults dated today.
    pub fn open_schedule_payment(&mut self) {
        self.payment_form
            .set_defaults(PaymentDraft::defaults(self.clock.today()));
        self.payment_form.open_create();
    }

    /// Validates the schedule form and inserts the payment into the upcoming list.
    pub fn submit_payment(&mut self) -> ServiceResult<Payment> {
        let today = self.clock.today();
        self.payment_form
            .set_defaults(PaymentDraft::defaults(today));
        let known = self.payees.ids();
        let input = self
            .payment_form
            .submit(|draft| validate_scheduled_payment(draft, &known, today))?;
        let payee_name = self
            .payees
            .get(&input.payee_id)
            .map(|payee| payee.name.clone())
            .ok_or_else(|| ServiceError::NotFound(format!("Payee `{}`", input.payee_id)))?;
        let payment = self
            .upcoming
            .add_sorted(Payment::scheduled(input, payee_name))
            .clone();
        tracing::info!(
            payment_id = %payment.id,
            payee = %payment.payee_name,
            amount = payment.amount,
            date = %payment.payment_date,
            "payment scheduled"
        );
        Ok(payment)
    }

    /// Opens the add form, fills it with `draft` and submits.
    pub fn add_payee(&mut self, draft: PayeeDraft) -> ServiceResult<PayeeOutcome> {
        self.open_add_payee();
        *self.payee_form.draft_mut() = draft;
        self.submit_payee()
    }

    /// Opens the edit form for `id`, replaces its draft and submits.
    pub fn edit_payee(&mut self, id: &str, draft: PayeeDraft) -> ServiceResult<PayeeOutcome> {
        self.open_edit_payee(id)?;
        *self.payee_form.draft_mut() = draft;
        self.submit_payee()
    }

    pub fn schedule_payment(&mut self, draft: PaymentDraft) -> ServiceResult<Payment> {
        self.open_schedule_payment();
        *self.payment_form.draft_mut() = draft;
        self.submit_payment()
    }
}
