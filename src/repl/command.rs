/// Commands that can be parsed from REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the REPL
    Quit,

    /// Show help information
    Help,

    /// Reseed the transformation
    Seed(u64),

    /// Perturb the whole content of a file
    TransformFile(String),

    /// Perturb the line itself
    Transform(String),

    /// Unknown/invalid command
    Unknown(String),
}

pub const HELP: &str = "\
Type a sentence to perturb its financial amounts.
  :seed <n>   reseed the transformation
  @<path>     perturb the content of a file
  :h, :help   show this help
  :q, :quit   quit";

impl ReplCommand {
    /// Whether the REPL loop should stop after this command.
    pub fn is_quit(&self) -> bool {
        matches!(self, ReplCommand::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_loop() {
        assert!(ReplCommand::Quit.is_quit());
        assert!(!ReplCommand::Help.is_quit());
        assert!(!ReplCommand::Transform("15 $".to_string()).is_quit());
    }

    #[test]
    fn test_help_lists_commands() {
        for command in [":seed", "@<path>", ":help", ":quit"] {
            assert!(HELP.contains(command), "help lacks {}", command);
        }
    }
}
