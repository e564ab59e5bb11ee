//! Form controllers: draft state, submission and per-field error surfacing.
//!
//! A controller moves through `Editing -> Submitting -> Committed` on a valid
//! submit, or back to `Editing` with errors attached on an invalid one. Forms
//! that sit behind a confirmation step stop in `AwaitingConfirmation` until
//! the caller commits or cancels.

pub mod drafts;

use crate::validation::{FieldErrors, FormDraft};

/// Lifecycle phase of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    AwaitingConfirmation,
    Committed,
}

/// Whether the open form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Holds a draft overlaying defaults and drives it through submission.
#[derive(Debug, Clone)]
pub struct FormController<D> {
    defaults: D,
    draft: D,
    errors: FieldErrors,
    phase: FormPhase,
    mode: FormMode,
    open: bool,
}

impl<D: Clone> FormController<D> {
    pub fn new(defaults: D) -> Self {
        Self {
            draft: defaults.clone(),
            defaults,
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            mode: FormMode::Create,
            open: false,
        }
    }

    /// Opens the dialog with an empty (default) draft.
    pub fn open_create(&mut self) {
        self.draft = self.defaults.clone();
        self.errors.clear();
        self.mode = FormMode::Create;
        self.phase = FormPhase::Editing;
        self.open = true;
    }

    /// Opens the dialog pre-filled from an existing record.
    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        self.draft = draft;
        self.errors.clear();
        self.mode = FormMode::Edit { id: id.into() };
        self.phase = FormPhase::Editing;
        self.open = true;
    }

    /// Replaces the defaults used by future resets (e.g. a new "today").
    pub fn set_defaults(&mut self, defaults: D) {
        self.defaults = defaults;
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutable access for input handlers; returns the form to `Editing`.
    pub fn draft_mut(&mut self) -> &mut D {
        if self.phase != FormPhase::AwaitingConfirmation {
            self.phase = FormPhase::Editing;
        }
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Validates the draft and, on success, commits: the draft resets to
    /// defaults and the dialog closes. On failure the draft is kept and the
    /// errors are attached.
    pub fn submit<T, F>(&mut self, validate: F) -> Result<T, FieldErrors>
    where
        F: FnOnce(&D) -> Result<T, FieldErrors>,
    {
        let output = self.check(validate)?;
        self.commit();
        Ok(output)
    }

    /// Validates without committing; a valid draft waits for [`Self::commit`]
    /// or [`Self::return_to_editing`].
    pub fn validate_for_confirmation<T, F>(&mut self, validate: F) -> Result<T, FieldErrors>
    where
        F: FnOnce(&D) -> Result<T, FieldErrors>,
    {
        let output = self.check(validate)?;
        self.phase = FormPhase::AwaitingConfirmation;
        Ok(output)
    }

    fn check<T, F>(&mut self, validate: F) -> Result<T, FieldErrors>
    where
        F: FnOnce(&D) -> Result<T, FieldErrors>,
    {
        self.phase = FormPhase::Submitting;
        match validate(&self.draft) {
            Ok(output) => {
                self.errors.clear();
                Ok(output)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                Err(errors)
            }
        }
    }

    /// Resets the draft to defaults and closes the dialog.
    pub fn commit(&mut self) {
        self.draft = self.defaults.clone();
        self.errors.clear();
        self.mode = FormMode::Create;
        self.phase = FormPhase::Committed;
        self.open = false;
    }

    /// Leaves the confirmation step with the draft untouched.
    pub fn return_to_editing(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Closes the dialog and discards the draft.
    pub fn cancel(&mut self) {
        self.draft = self.defaults.clone();
        self.errors.clear();
        self.mode = FormMode::Create;
        self.phase = FormPhase::Editing;
        self.open = false;
    }
}

impl<D: Clone + FormDraft> FormController<D> {
    /// Sets one field by key; `false` for keys the draft does not have.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.draft_mut().set_value(key, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::drafts::PayeeDraft;
    use crate::validation::validate_payee;

    #[test]
    fn valid_submit_commits_and_resets() {
        let mut form = FormController::new(PayeeDraft::default());
        form.open_create();
        form.set_field("name", "Gas Co");
        form.set_field("account_number", "12345");

        let input = form.submit(validate_payee).unwrap();
        assert_eq!(input.name, "Gas Co");
        assert_eq!(form.phase(), FormPhase::Committed);
        assert_eq!(form.draft(), &PayeeDraft::default());
        assert!(!form.is_open());
    }

    #[test]
    fn invalid_submit_keeps_draft_and_errors() {
        let mut form = FormController::new(PayeeDraft::default());
        form.open_create();
        form.set_field("name", "G");
        form.set_field("account_number", "12345");

        let errors = form.submit(validate_payee).unwrap_err();
        assert!(errors.has_field("name"));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft().name, "G");
        assert_eq!(form.errors(), &errors);
        assert!(form.is_open());

        form.set_field("name", "Gas Co");
        assert!(form.submit(validate_payee).is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_mode_is_prefilled_and_cleared_on_commit() {
        let mut form = FormController::new(PayeeDraft::default());
        form.open_edit("payee_1", PayeeDraft::new("City Electric Co.", "100200300"));
        assert_eq!(form.mode(), &FormMode::Edit { id: "payee_1".into() });
        assert_eq!(form.draft().name, "City Electric Co.");

        form.submit(validate_payee).unwrap();
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[test]
    fn confirmation_step_holds_draft_until_commit() {
        let mut form = FormController::new(PayeeDraft::default());
        form.open_create();
        form.set_field("name", "Gas Co");
        form.set_field("account_number", "12345");

        form.validate_for_confirmation(validate_payee).unwrap();
        assert_eq!(form.phase(), FormPhase::AwaitingConfirmation);
        assert_eq!(form.draft().name, "Gas Co");

        form.return_to_editing();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft().name, "Gas Co");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut form = FormController::new(PayeeDraft::default());
        assert!(!form.set_field("amount", "5"));
    }
}
