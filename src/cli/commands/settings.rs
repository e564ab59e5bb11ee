use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::{Table, TableColumn};
use crate::config::Config;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "settings",
        "Show or change profile and preference settings",
        "settings [<key> <value>]",
        cmd_settings,
    )]
}

fn cmd_settings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let table = Table::new(vec![TableColumn::left("Setting"), TableColumn::left("Value")])
                .with_rows(
                    context
                        .dashboard
                        .config
                        .entries()
                        .into_iter()
                        .map(|(key, value)| vec![key.to_string(), value]),
                );
            output::section("Settings");
            output::raw(table.render());
            Ok(())
        }
        [key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            context.dashboard.config.set(key, &value)?;
            context.config_manager.save(&context.dashboard.config)?;
            output::success(format!("Setting `{}` updated.", key));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "Usage: settings <key> <value> (keys: {})",
            Config::KEYS.join(", ")
        ))),
    }
}
