use super::ReplCommand;

/// Parse one REPL input line into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:seed <n>` → Seed command
/// - `@filename` → Transform file command
/// - Any other text → Transform command, with the line kept as typed
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let line = input.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim();

    // Check for empty input first
    if trimmed.is_empty() {
        return ReplCommand::Unknown(String::new());
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, _) => ReplCommand::Quit,
            (Some("h" | "help"), None, _) => ReplCommand::Help,
            (Some("seed"), Some(seed), None) => match seed.parse() {
                Ok(seed) => ReplCommand::Seed(seed),
                Err(_) => ReplCommand::Unknown(trimmed.to_string()),
            },
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            ReplCommand::Unknown(trimmed.to_string())
        } else {
            ReplCommand::TransformFile(filename.to_string())
        }
    } else {
        ReplCommand::Transform(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help\n"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_repl_input(":seed 42"), ReplCommand::Seed(42));
        assert_eq!(parse_repl_input("  :seed   7  "), ReplCommand::Seed(7));
    }

    #[test]
    fn test_parse_invalid_seed() {
        assert!(matches!(parse_repl_input(":seed x"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":seed"), ReplCommand::Unknown(_)));
        assert!(matches!(parse_repl_input(":seed 1 2"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_transform_file() {
        assert_eq!(
            parse_repl_input("@  report.txt"),
            ReplCommand::TransformFile("report.txt".to_string())
        );
    }

    #[test]
    fn test_parse_bare_at_is_unknown() {
        assert!(matches!(parse_repl_input("@"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_sentence_kept_as_typed() {
        assert_eq!(
            parse_repl_input("  It costs 15 $ \r\n"),
            ReplCommand::Transform("  It costs 15 $ ".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_repl_input(":nope"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert_eq!(parse_repl_input("   "), ReplCommand::Unknown(String::new()));
    }
}
