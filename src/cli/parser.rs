//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// calc-rs: keystroke-driven arithmetic calculator.
///
/// Evaluates arithmetic expressions (numbers, `+ - * /`, parentheses)
/// with a dedicated parser, never a general-purpose code evaluator.
#[derive(Parser, Debug)]
#[command(name = "calc-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Evaluation strategy (recursive, shunting).
    #[arg(
        short,
        long,
        env = "CALC_EVALUATOR",
        default_value = crate::eval::DEFAULT_STRATEGY,
        global = true
    )]
    pub evaluator: String,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression and print the result.
    Eval {
        /// Expression text, e.g. "2+3*4".
        expression: String,
    },

    /// Show the token stream for an expression.
    Tokens {
        /// Expression text to tokenize.
        expression: String,
    },

    /// List available evaluation strategies.
    Strategies,

    /// Start an interactive calculator session.
    Repl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be created
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_strategy() {
        let cli = Cli::parse_from(["calc-rs", "eval", "2+2"]);
        assert_eq!(cli.evaluator, crate::eval::DEFAULT_STRATEGY);
        assert_eq!(cli.format, "text");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["calc-rs", "eval", "2+2", "--evaluator", "shunting"]);
        assert_eq!(cli.evaluator, "shunting");
        assert!(matches!(cli.command, Commands::Eval { .. }));
    }

    #[test]
    fn test_negative_expression_after_double_dash() {
        let cli = Cli::parse_from(["calc-rs", "eval", "--", "-5+3"]);
        match cli.command {
            Commands::Eval { expression } => assert_eq!(expression, "-5+3"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
