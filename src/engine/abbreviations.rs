use super::error::ResourceError;
use lazy_static::lazy_static;
use std::path::Path;

const BUNDLED_ABBREVIATIONS: &str = include_str!("../../resources/currency_abbr.txt");

lazy_static! {
    static ref DEFAULT_ABBREVIATIONS: Vec<String> = parse_abbreviations(BUNDLED_ABBREVIATIONS);
}

/// Split a newline-delimited abbreviation list, one entry per line.
///
/// Only the empty entry left by a final newline is dropped; a `\r` from CRLF
/// files is stripped from each line.
pub fn parse_abbreviations(content: &str) -> Vec<String> {
    let mut abbreviations: Vec<String> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();

    if abbreviations.last().map_or(false, |last| last.is_empty()) {
        abbreviations.pop();
    }

    abbreviations
}

/// Abbreviations shipped with the crate.
pub fn default_abbreviations() -> &'static [String] {
    &DEFAULT_ABBREVIATIONS
}

pub fn load_abbreviations(path: impl AsRef<Path>) -> Result<Vec<String>, ResourceError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(ResourceError::Empty(path.to_path_buf()));
    }

    Ok(parse_abbreviations(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_parse_trims_final_newline() {
        assert_eq!(parse_abbreviations("USD\nEUR\n"), vec!["USD", "EUR"]);
    }

    #[test]
    fn test_parse_without_final_newline() {
        assert_eq!(parse_abbreviations("USD\nEUR"), vec!["USD", "EUR"]);
    }

    #[test]
    fn test_parse_crlf() {
        assert_eq!(parse_abbreviations("USD\r\nEUR\r\n"), vec!["USD", "EUR"]);
    }

    #[test]
    fn test_default_list_has_common_codes() {
        let defaults = default_abbreviations();
        for code in ["USD", "EUR", "GBP", "JPY", "CHF"] {
            assert!(defaults.iter().any(|a| a == code), "missing {}", code);
        }
        assert!(defaults.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_load_valid_file() {
        let test_file = "test_abbr_valid.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"USD\nXAU\n").unwrap();

        let result = load_abbreviations(test_file);
        assert_eq!(result.unwrap(), vec!["USD", "XAU"]);

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_load_empty_file_error() {
        let test_file = "test_abbr_empty.txt";
        File::create(test_file).unwrap();

        let result = load_abbreviations(test_file);
        match result {
            Err(ResourceError::Empty(_)) => (),
            _ => panic!("Expected Empty error"),
        }

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_load_nonexistent_file_error() {
        let result = load_abbreviations("nonexistent_abbr_12345.txt");
        match result {
            Err(ResourceError::Io { .. }) => (),
            _ => panic!("Expected Io error"),
        }
    }
}
