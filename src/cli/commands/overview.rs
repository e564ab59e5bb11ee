use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::views;
use crate::currency::DateStyle;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "dashboard",
            "Show account cards, spending and recent transactions",
            "dashboard",
            cmd_dashboard,
        ),
        CommandDefinition::new(
            "accounts",
            "List accounts and show the selected account's details",
            "accounts [account-id]",
            cmd_accounts,
        ),
        CommandDefinition::new(
            "search",
            "Search payees, payments and account activity",
            "search <term>",
            cmd_search,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let overview = &context.dashboard.overview;
    let currency = context.dashboard.config.currency.as_str();
    output::section("Accounts");
    output::raw(views::account_cards(overview.summaries(), currency));
    output::section("Spending Analysis");
    output::raw(views::spending(
        &overview.spending_shares(),
        overview.total_spending(),
        currency,
    ));
    output::section("Recent Transactions");
    output::raw(views::activity(
        overview.recent_transactions(),
        DateStyle::Medium,
        currency,
    ));
    Ok(())
}

fn cmd_accounts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(id) = args.first() {
        if !context.dashboard.accounts.select(id) {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown account `{}`",
                id
            )));
        }
    }

    let view = &context.dashboard.accounts;
    let currency = context.dashboard.config.currency.as_str();
    let selected = view.selected();
    output::section("My Accounts");
    output::raw(views::account_list(
        view.accounts(),
        selected.map(|account| account.id.as_str()),
        currency,
    ));

    if let Some(account) = selected {
        output::section(&account.name);
        output::raw(views::account_details(account, currency));
        output::section("Recent Activity");
        output::raw(views::activity(&account.activity, DateStyle::Short, currency));
    }
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let term = args.join(" ");
    if term.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "Usage: search <term>".into(),
        ));
    }
    let hits = context.dashboard.search(&term);
    output::section(format!("Results for \"{}\"", term.trim()));
    output::raw(views::search_results(&hits, &context.dashboard.config.currency));
    Ok(())
}
