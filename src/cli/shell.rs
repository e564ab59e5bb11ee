//! Line loop for `findash_cli`: rustyline when attached to a terminal user,
//! plain stdin lines when `FINDASH_CLI_SCRIPT` is set.

use std::io::{self, BufRead};

use rustyline::{
    completion::Completer, error::ReadlineError, history::DefaultHistory, Context, Editor,
    Helper, Highlighter, Hinter, Validator,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::config::Config;

const SCRIPT_ENV: &str = "FINDASH_CLI_SCRIPT";

/// Second-word completions for commands that take an action or a key.
const SUBCOMMANDS: &[(&str, &[&str])] = &[
    ("payee", &["add", "edit", "delete"]),
    ("transfer", &["accounts", "internal", "external"]),
    ("settings", &Config::KEYS),
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandCompleter::new(context.command_names())));
    output::info("Welcome to FinDash. Type `help` to see available commands.");

    while context.running {
        let line = match editor.readline(&context.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit() {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.trim()).ok();
        }
        step(context, &line)?;
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        step(context, &line?)?;
        if !context.running {
            break;
        }
    }
    Ok(())
}

fn step(context: &mut ShellContext, line: &str) -> Result<(), CliError> {
    match handle_line(context, line) {
        Ok(LoopControl::Continue) => Ok(()),
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(())
        }
        Err(err) => context.report_error(err),
    }
}

/// Tokenizes one input line and dispatches it; blank and unparsable lines are skipped.
pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&format!("Could not read that line: {}", err));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    context.last_command = Some(line.trim().to_string());
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(&raw.to_lowercase(), raw, &args)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}

/// Completes command names, then the action or settings key that follows them.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let start = line
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map_or(0, |(idx, ch)| idx + ch.len_utf8());
        let word = line[start..].to_ascii_lowercase();
        let preceding: Vec<&str> = line[..start].split_whitespace().collect();

        let pool: &[&str] = match preceding.as_slice() {
            [] => self.commands.as_slice(),
            [command] => SUBCOMMANDS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(command))
                .map(|(_, words)| *words)
                .unwrap_or_default(),
            _ => &[],
        };
        let matches = pool
            .iter()
            .filter(|candidate| candidate.starts_with(&word))
            .map(|candidate| candidate.to_string())
            .collect();
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter::new(vec!["payments", "pay", "payees", "payee", "history", "pay"])
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line(r#"payee add "Gas Co" 12345"#).unwrap();
        assert_eq!(tokens, ["payee", "add", "Gas Co", "12345"]);
        assert!(parse_command_line(r#"payee add "Gas Co 12345"#).is_err());
    }

    #[test]
    fn first_word_completes_command_names() {
        let (start, names) = completer().candidates("PAY");
        assert_eq!(start, 0);
        assert_eq!(names, ["pay", "payee", "payees", "payments"]);
    }

    #[test]
    fn second_word_completes_actions_and_settings_keys() {
        assert_eq!(completer().candidates("payee d"), (6, vec!["delete".to_string()]));
        let (start, keys) = completer().candidates("settings profile.");
        assert_eq!(start, 9);
        assert_eq!(keys, ["profile.name", "profile.email", "profile.phone"]);
        assert!(completer().candidates("pay payee_1 ").1.is_empty());
        assert!(completer().candidates("history ").1.is_empty());
    }
}
