//! REPL (Read-Eval-Print Loop) module
//!
//! Reads lines, perturbs them, prints the result.
//!
//! - **command.rs**: Command definitions and help text
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes

pub mod command;
pub mod parser;

pub use command::ReplCommand;
pub use parser::parse_repl_input;

use command::HELP;
use crate::transformation::FinancialAmountTransformation;
use std::io::{self, BufRead, Write};

/// Run the REPL until `:q` or end of input.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    transformation: &mut FinancialAmountTransformation,
) -> io::Result<()> {
    for line in input.lines() {
        let command = parse_repl_input(&line?);
        if command.is_quit() {
            break;
        }
        execute(command, &mut output, transformation)?;
        output.flush()?;
    }
    Ok(())
}

fn execute<W: Write>(
    command: ReplCommand,
    output: &mut W,
    transformation: &mut FinancialAmountTransformation,
) -> io::Result<()> {
    match command {
        ReplCommand::Quit => Ok(()),
        ReplCommand::Help => writeln!(output, "{}", HELP),
        ReplCommand::Seed(seed) => {
            transformation.set_seed(seed);
            writeln!(output, "seed = {}", seed)
        }
        ReplCommand::TransformFile(path) => match std::fs::read_to_string(&path) {
            Ok(content) => {
                for result in transformation.generate(&content) {
                    write!(output, "{}", result)?;
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Cannot read {}: {}", path, err);
                writeln!(output, "Cannot read {}: {}", path, err)
            }
        },
        ReplCommand::Transform(text) => {
            for result in transformation.generate(&text) {
                writeln!(output, "{}", result)?;
            }
            Ok(())
        }
        ReplCommand::Unknown(input) if input.is_empty() => Ok(()),
        ReplCommand::Unknown(input) => {
            writeln!(output, "Unknown command: {} (:h for help)", input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransformConfig;
    use std::io::Cursor;

    fn run_lines(lines: &str) -> String {
        let mut transformation = FinancialAmountTransformation::default();
        let mut output = Vec::new();
        run(Cursor::new(lines), &mut output, &mut transformation).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_plain_line_echoed() {
        assert_eq!(run_lines("no money here\n"), "no money here\n");
    }

    #[test]
    fn test_quit_stops_processing() {
        assert_eq!(run_lines(":q\nnever printed\n"), "");
    }

    #[test]
    fn test_help() {
        assert!(run_lines(":h\n").contains(":seed"));
    }

    #[test]
    fn test_unknown_command() {
        assert!(run_lines(":what\n").starts_with("Unknown command: :what"));
    }

    #[test]
    fn test_empty_line_is_silent() {
        assert_eq!(run_lines("\n\n"), "");
    }

    #[test]
    fn test_seed_changes_config() {
        let mut transformation = FinancialAmountTransformation::default();
        let mut output = Vec::new();
        run(Cursor::new(":seed 12\n"), &mut output, &mut transformation).unwrap();
        assert_eq!(transformation.config().seed, 12);
        assert_eq!(String::from_utf8(output).unwrap(), "seed = 12\n");
    }

    #[test]
    fn test_line_matches_direct_generation() {
        let text = "It costs 1,200.00 USD";
        let expected = FinancialAmountTransformation::new(TransformConfig::default()).generate(text);
        assert_eq!(run_lines(&format!("{}\n", text)), format!("{}\n", expected[0]));
    }

    #[test]
    fn test_missing_file_reported() {
        let output = run_lines("@missing_file_12345.txt\n");
        assert!(output.starts_with("Cannot read missing_file_12345.txt"));
    }
}
