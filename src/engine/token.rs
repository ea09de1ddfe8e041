/// Numeric/other tag carried by every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Numeric,
    Other,
}

/// Classify a raw text fragment.
///
/// A fragment is numeric when, once trimmed and stripped of `.` and `,`, it is
/// a non-empty run of ASCII digits. `"1,200"` and `"00 "` are numeric, `","`
/// and `"15k"` are not.
pub fn classify(text: &str) -> Category {
    let mut digits = text
        .trim()
        .chars()
        .filter(|&c| c != '.' && c != ',')
        .peekable();

    if digits.peek().is_none() {
        return Category::Other;
    }

    if digits.all(|c| c.is_ascii_digit()) {
        Category::Numeric
    } else {
        Category::Other
    }
}

/// Token struct for financial amount detection
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Literal text, including the trailing whitespace found in the source.
    pub text: String,
    pub category: Category,
    /// Set by the merger on composite amount-plus-currency tokens.
    pub is_financial_amount: bool,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let category = classify(&text);
        Self {
            text,
            category,
            is_financial_amount: false,
        }
    }

    pub(crate) fn financial_amount(text: String) -> Self {
        Self {
            is_financial_amount: true,
            ..Self::new(text)
        }
    }

    /// Text without surrounding whitespace.
    pub fn value(&self) -> &str {
        self.text.trim()
    }

    pub fn is_numeric(&self) -> bool {
        self.category == Category::Numeric
    }

    /// Trailing whitespace of the literal text.
    pub fn trailing_whitespace(&self) -> &str {
        &self.text[self.text.trim_end().len()..]
    }

    /// Rewrite the literal text in place, keeping the original trailing
    /// whitespace so the surrounding text still concatenates cleanly.
    pub fn replace(&mut self, replacement: &str) {
        let mut text = replacement.trim_matches(' ').to_string();
        text.push_str(self.trailing_whitespace());
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_digits() {
        assert_eq!(classify("15"), Category::Numeric);
        assert_eq!(classify("00 "), Category::Numeric);
    }

    #[test]
    fn test_classify_ignores_separators() {
        assert_eq!(classify("1,200.00"), Category::Numeric);
        assert_eq!(classify("12.540"), Category::Numeric);
    }

    #[test]
    fn test_classify_separator_only_is_other() {
        assert_eq!(classify(","), Category::Other);
        assert_eq!(classify("."), Category::Other);
        assert_eq!(classify("   "), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn test_classify_words_and_mixed() {
        assert_eq!(classify("USD"), Category::Other);
        assert_eq!(classify("15k"), Category::Other);
        assert_eq!(classify("$15"), Category::Other);
    }

    #[test]
    fn test_new_token_is_not_financial() {
        let token = Token::new("15 ");
        assert!(token.is_numeric());
        assert!(!token.is_financial_amount);
        assert_eq!(token.value(), "15");
        assert_eq!(token.trailing_whitespace(), " ");
    }

    #[test]
    fn test_financial_amount_token_is_flagged() {
        let token = Token::financial_amount("15 $ ".to_string());
        assert!(token.is_financial_amount);
        assert_eq!(token.category, Category::Other);
    }

    #[test]
    fn test_replace_keeps_trailing_space() {
        let mut token = Token::new("15 $ ");
        token.replace("€ 17.25 ");
        assert_eq!(token.text, "€ 17.25 ");

        let mut token = Token::new("15 $");
        token.replace("€ 17.25 ");
        assert_eq!(token.text, "€ 17.25");
    }

    #[test]
    fn test_replace_keeps_trailing_newline() {
        let mut token = Token::new("USD 15\n");
        token.replace("16 euros");
        assert_eq!(token.text, "16 euros\n");
    }
}
