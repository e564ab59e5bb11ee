use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::{Table, TableColumn};
use crate::currency::format_currency;
use crate::forms::drafts::{ExternalTransferDraft, InternalTransferDraft};

use super::{arg_or_blank, CommandDefinition};

const INTERNAL_USAGE: &str = "transfer internal <from-account> <to-account> <amount> [memo]";
const EXTERNAL_USAGE: &str =
    "transfer external <from-account> <recipient-name> <recipient-account> <bank-id> <amount> [memo]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "transfer",
            "Prepare an internal or external transfer",
            "transfer accounts | transfer internal ... | transfer external ...",
            cmd_transfer,
        ),
        CommandDefinition::new(
            "confirm",
            "Confirm the pending transfer",
            "confirm",
            cmd_confirm,
        ),
        CommandDefinition::new(
            "cancel",
            "Discard the pending transfer",
            "cancel",
            cmd_cancel,
        ),
    ]
}

fn cmd_transfer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let currency = context.dashboard.config.currency.as_str();
    let transfers = &mut context.dashboard.transfers;
    let rest = args.get(1..).unwrap_or_default();
    let proposal = match args.first().map(|kind| kind.to_lowercase()).as_deref() {
        Some("accounts") => {
            let table = Table::new(vec![
                TableColumn::left("ID"),
                TableColumn::left("Account"),
                TableColumn::right("Balance"),
            ])
            .with_rows(transfers.accounts().list().iter().map(|account| {
                vec![
                    account.id.clone(),
                    transfers.accounts().label(&account.id),
                    format_currency(account.balance, currency),
                ]
            }));
            output::section("Transfer Accounts");
            output::raw(table.render());
            return Ok(());
        }
        Some("internal") => {
            let form = transfers.internal_form_mut();
            form.open_create();
            *form.draft_mut() = InternalTransferDraft {
                from_account: arg_or_blank(rest, 0),
                to_account: arg_or_blank(rest, 1),
                amount: arg_or_blank(rest, 2),
                memo: arg_or_blank(rest, 3),
            };
            transfers.submit_internal()?
        }
        Some("external") => {
            let form = transfers.external_form_mut();
            form.open_create();
            *form.draft_mut() = ExternalTransferDraft {
                from_account: arg_or_blank(rest, 0),
                recipient_name: arg_or_blank(rest, 1),
                recipient_account_number: arg_or_blank(rest, 2),
                bank_identifier: arg_or_blank(rest, 3),
                amount: arg_or_blank(rest, 4),
                memo: arg_or_blank(rest, 5),
            };
            transfers.submit_external()?
        }
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "Usage: {} | {}",
                INTERNAL_USAGE, EXTERNAL_USAGE
            )))
        }
    };

    output::section("Confirm Transfer");
    output::raw(&proposal.summary);
    output::hint("Type `confirm` to proceed or `cancel` to go back.");
    Ok(())
}

fn cmd_confirm(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let receipt = context.dashboard.transfers.confirm()?;
    output::success(receipt.notification);
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.dashboard.transfers.cancel() {
        output::info("Transfer cancelled. Your entries were kept.");
    } else {
        output::info("No transfer is awaiting confirmation.");
    }
    Ok(())
}
