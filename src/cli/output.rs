//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::eval::Lexeme;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Description of an evaluation strategy, for the `strategies` listing.
#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    /// Strategy name accepted by `--evaluator`.
    pub name: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Whether this is the default strategy.
    pub default: bool,
}

/// Formats an evaluation result.
#[must_use]
pub fn format_evaluation(
    expression: &str,
    value: f64,
    strategy: &str,
    verbose: bool,
    format: OutputFormat,
) -> String {
    let result = crate::eval::format_value(value);
    match format {
        OutputFormat::Text => {
            if verbose {
                format!("{expression} = {result}\n")
            } else {
                format!("{result}\n")
            }
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct EvalOutput<'a> {
                expression: &'a str,
                result: &'a str,
                value: f64,
                strategy: &'a str,
            }
            format_json(&EvalOutput {
                expression,
                result: &result,
                value,
                strategy,
            })
        }
    }
}

/// Formats a token stream.
#[must_use]
pub fn format_tokens(expression: &str, lexemes: &[Lexeme], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_tokens_text(expression, lexemes),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TokenOutput {
                offset: usize,
                kind: &'static str,
                text: String,
            }
            let tokens: Vec<TokenOutput> = lexemes
                .iter()
                .map(|lexeme| TokenOutput {
                    offset: lexeme.offset,
                    kind: lexeme.token.kind(),
                    text: lexeme.token.to_string(),
                })
                .collect();
            format_json(&tokens)
        }
    }
}

fn format_tokens_text(expression: &str, lexemes: &[Lexeme]) -> String {
    if lexemes.is_empty() {
        return format!("No tokens in: {expression}\n");
    }

    let mut output = String::new();
    let _ = writeln!(output, "{} tokens in: {expression}", lexemes.len());
    let _ = writeln!(output, "{:<8} {:<12} Text", "Offset", "Kind");
    output.push_str(&"-".repeat(32));
    output.push('\n');

    for lexeme in lexemes {
        let _ = writeln!(
            output,
            "{:<8} {:<12} {}",
            lexeme.offset,
            lexeme.token.kind(),
            lexeme.token
        );
    }

    output
}

/// Formats the strategy listing.
#[must_use]
pub fn format_strategies(strategies: &[StrategyInfo], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Evaluation strategies:\n");
            for info in strategies {
                let marker = if info.default { " (default)" } else { "" };
                let _ = writeln!(output, "  {:<12} {}{marker}", info.name, info.description);
            }
            output
        }
        OutputFormat::Json => format_json(&strategies),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::eval::tokenize;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_evaluation_text() {
        let output = format_evaluation("2+2", 4.0, "recursive", false, OutputFormat::Text);
        assert_eq!(output, "4\n");

        let output = format_evaluation("2+2", 4.0, "recursive", true, OutputFormat::Text);
        assert_eq!(output, "2+2 = 4\n");
    }

    #[test]
    fn test_format_evaluation_json() {
        let output = format_evaluation("1/4", 0.25, "shunting", false, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["expression"], "1/4");
        assert_eq!(parsed["result"], "0.25");
        assert_eq!(parsed["value"], 0.25);
        assert_eq!(parsed["strategy"], "shunting");
    }

    #[test]
    fn test_format_tokens_text() {
        let lexemes = tokenize("2+2").unwrap();
        let output = format_tokens("2+2", &lexemes, OutputFormat::Text);
        assert!(output.contains("3 tokens"));
        assert!(output.contains("number"));
        assert!(output.contains("plus"));
    }

    #[test]
    fn test_format_tokens_empty() {
        let output = format_tokens("  ", &[], OutputFormat::Text);
        assert!(output.contains("No tokens"));
    }

    #[test]
    fn test_format_tokens_json() {
        let lexemes = tokenize("(1)").unwrap();
        let output = format_tokens("(1)", &lexemes, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let tokens = parsed.as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0]["kind"], "open-paren");
        assert_eq!(tokens[1]["kind"], "number");
        assert_eq!(tokens[2]["offset"], 2);
    }

    #[test]
    fn test_format_strategies_text() {
        let infos = [
            StrategyInfo {
                name: "recursive",
                description: "AST fold",
                default: true,
            },
            StrategyInfo {
                name: "shunting",
                description: "stack pair",
                default: false,
            },
        ];
        let output = format_strategies(&infos, OutputFormat::Text);
        assert!(output.contains("recursive"));
        assert!(output.contains("(default)"));
        assert!(output.contains("shunting"));
    }

    #[test]
    fn test_format_error_text_and_json() {
        let err: Error = EvalError::DivisionByZero.into();
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("division by zero"));

        let json = format_error(&err, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(
            parsed["error"]
                .as_str()
                .unwrap()
                .contains("division by zero")
        );
    }
}
