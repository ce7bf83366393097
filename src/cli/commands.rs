//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, StrategyInfo, format_evaluation, format_strategies, format_tokens,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::Session;
use crate::error::Result;
use crate::eval::{DEFAULT_STRATEGY, available_strategies, create_evaluator, tokenize};
use crate::repl;
use std::io;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success. The `repl` command performs its
/// own terminal I/O and returns an empty string.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Eval { expression } => cmd_eval(expression, &cli.evaluator, cli.verbose, format),
        Commands::Tokens { expression } => cmd_tokens(expression, format),
        Commands::Strategies => cmd_strategies(format),
        Commands::Repl => cmd_repl(&cli.evaluator, cli.verbose),
    }
}

/// Evaluates a one-shot expression.
///
/// Unlike the session surface, failures here propagate to the caller so
/// the process can exit non-zero.
fn cmd_eval(expression: &str, strategy: &str, verbose: bool, format: OutputFormat) -> Result<String> {
    let evaluator = create_evaluator(strategy)?;
    let value = evaluator.evaluate(expression)?;
    Ok(format_evaluation(
        expression,
        value,
        evaluator.name(),
        verbose,
        format,
    ))
}

/// Dumps the token stream for an expression.
fn cmd_tokens(expression: &str, format: OutputFormat) -> Result<String> {
    let lexemes = tokenize(expression)?;
    Ok(format_tokens(expression, &lexemes, format))
}

/// Lists the evaluation strategies.
fn cmd_strategies(format: OutputFormat) -> Result<String> {
    let infos = available_strategies()
        .into_iter()
        .map(|name| {
            let evaluator = create_evaluator(name)?;
            Ok(StrategyInfo {
                name: evaluator.name(),
                description: evaluator.description(),
                default: evaluator.name() == DEFAULT_STRATEGY,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format_strategies(&infos, format))
}

/// Runs the interactive session on the process terminal.
fn cmd_repl(strategy: &str, verbose: bool) -> Result<String> {
    let evaluator = create_evaluator(strategy)?;
    let mut session = Session::with_evaluator(evaluator);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock(), verbose)?;

    Ok(String::new())
}
