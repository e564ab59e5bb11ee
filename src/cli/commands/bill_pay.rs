use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::views::{self, NO_HISTORY, NO_UPCOMING};
use crate::core::services::PayeeOutcome;
use crate::currency::format_currency;
use crate::domain::payment::Frequency;
use crate::forms::drafts::{PayeeDraft, PaymentDraft};

use super::{arg_or_blank, CommandDefinition};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("payees", "List payees", "payees", cmd_payees),
        CommandDefinition::new(
            "payee",
            "Add, edit or delete a payee",
            "payee add <name> <account-number> [category] | payee edit <id> <name> <account-number> [category] | payee delete <id>",
            cmd_payee,
        ),
        CommandDefinition::new(
            "payments",
            "List upcoming payments",
            "payments",
            cmd_payments,
        ),
        CommandDefinition::new(
            "history",
            "List past payments",
            "history",
            cmd_history,
        ),
        CommandDefinition::new(
            "pay",
            "Schedule a payment to a payee",
            "pay <payee-id> <amount> <YYYY-MM-DD> [One-time|Monthly]",
            cmd_pay,
        ),
    ]
}

fn cmd_payees(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Manage Payees");
    output::raw(views::payees(context.dashboard.bill_pay.payees().list()));
    Ok(())
}

fn payee_draft(args: &[&str]) -> PayeeDraft {
    PayeeDraft::new(arg_or_blank(args, 0), arg_or_blank(args, 1)).with_category(arg_or_blank(args, 2))
}

fn cmd_payee(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let bill_pay = &mut context.dashboard.bill_pay;
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        Some("add") => {
            if let PayeeOutcome::Added(payee) = bill_pay.add_payee(payee_draft(&args[1..]))? {
                output::success(format!("Payee `{}` added ({}).", payee.name, payee.id));
            }
            Ok(())
        }
        Some("edit") => {
            let id = args.get(1).ok_or_else(|| {
                CommandError::InvalidArguments("Usage: payee edit <id> <name> <account-number> [category]".into())
            })?;
            match bill_pay.edit_payee(id, payee_draft(&args[2..]))? {
                PayeeOutcome::Updated(payee) => {
                    output::success(format!("Payee `{}` updated.", payee.name))
                }
                PayeeOutcome::Added(_) | PayeeOutcome::Missing { .. } => {
                    output::warning(format!("Payee `{}` no longer exists.", id))
                }
            }
            Ok(())
        }
        Some("delete") => {
            let id = args.get(1).ok_or_else(|| {
                CommandError::InvalidArguments("Usage: payee delete <id>".into())
            })?;
            match bill_pay.delete_payee(id) {
                Some(payee) => output::success(format!("Payee `{}` deleted.", payee.name)),
                None => output::warning(format!("Payee `{}` not found.", id)),
            }
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: payee add|edit|delete ...".into(),
        )),
    }
}

fn cmd_payments(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Upcoming Payments");
    output::raw(views::payments(
        context.dashboard.bill_pay.upcoming().list(),
        NO_UPCOMING,
        &context.dashboard.config.currency,
    ));
    Ok(())
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Payment History");
    output::raw(views::payments(
        context.dashboard.bill_pay.history().list(),
        NO_HISTORY,
        &context.dashboard.config.currency,
    ));
    Ok(())
}

/// Accepts frequency labels in any case; unknown input is passed through so
/// validation reports it.
fn normalize_frequency(raw: &str) -> String {
    Frequency::LABELS
        .iter()
        .find(|label| label.eq_ignore_ascii_case(raw.trim()))
        .map(|label| label.to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "Usage: pay <payee-id> <amount> <YYYY-MM-DD> [One-time|Monthly]".into(),
        ));
    }
    let currency = context.dashboard.config.currency.clone();
    let bill_pay = &mut context.dashboard.bill_pay;
    bill_pay.open_schedule_payment();
    let mut draft: PaymentDraft = bill_pay.payment_form().draft().clone();
    draft.payee_id = arg_or_blank(args, 0);
    if let Some(amount) = args.get(1) {
        draft.amount = amount.to_string();
    }
    if let Some(date) = args.get(2) {
        draft.payment_date = date.to_string();
    }
    if let Some(frequency) = args.get(3) {
        draft.frequency = normalize_frequency(frequency);
    }

    let payment = bill_pay.schedule_payment(draft)?;
    output::success(format!(
        "Scheduled {} to {} on {} ({}).",
        format_currency(payment.amount, &currency),
        payment.payee_name,
        payment.payment_date,
        payment.frequency
    ));
    Ok(())
}
