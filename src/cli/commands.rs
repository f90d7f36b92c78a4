//! Command dispatch

use std::fs;
use std::io::{self, BufRead};
use std::str::FromStr;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CalculatorService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::Operator;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Eval { a, op, b }) => eval(a, op, b),
        Some(Commands::Repl) => repl(),
        Some(Commands::Config { command }) => config_command(command),
        Some(Commands::Completion { shell }) => {
            completion(*shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    }
}

#[instrument]
fn eval(a: &str, op: &str, b: &str) -> CliResult<()> {
    debug!("a: {:?}, op: {:?}, b: {:?}", a, op, b);
    let settings = Settings::load()?;
    let operator = Operator::from_str(op).map_err(ApplicationError::from)?;

    let service = CalculatorService::new(settings.result_label);
    let result = service.compute(a, b, operator)?;
    output::info(&result);
    Ok(())
}

#[instrument]
fn repl() -> CliResult<()> {
    let settings = Settings::load()?;
    let service = CalculatorService::new(settings.result_label.clone());

    output::info("Enter: NUMBER OPERATOR NUMBER (q to quit)");
    output::prompt(">");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| CliError::io("read stdin", e))?;
        let line = line.trim();

        if matches!(line, "q" | "quit" | "exit") {
            break;
        }
        if !line.is_empty() {
            eval_line(&service, &settings, line);
        }
        output::prompt(">");
    }
    Ok(())
}

/// Evaluate one repl line. Errors are printed, never propagated: a bad line
/// must not end the session.
fn eval_line(service: &CalculatorService, settings: &Settings, line: &str) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [a, op, b] => {
            let outcome = Operator::from_str(op)
                .map_err(ApplicationError::from)
                .and_then(|operator| service.compute(a, b, operator));
            match outcome {
                Ok(result) => output::info(&result),
                Err(e) => output::error_line(&settings.error_label, &e),
            }
        }
        _ => output::warning("expected: NUMBER OPERATOR NUMBER"),
    }
}

#[instrument]
fn config_command(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            let rendered =
                toml::to_string_pretty(&settings).map_err(|e| ApplicationError::Config {
                    message: format!("render config: {}", e),
                })?;
            output::header("Active configuration");
            output::info(&rendered);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("cannot determine config directory"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "cannot determine config directory".into(),
            })?;
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| CliError::io(format!("create {}", parent.display()), e))?;
            }
            fs::write(&path, Settings::template()?)
                .map_err(|e| CliError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
