use super::token::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into tokens whose literal texts concatenate back to the input.
///
/// Any implementation must keep trailing whitespace on the token it follows
/// and preserve the original order and character coverage.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Default tokenizer built on Unicode word boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundTokenizer;

impl Tokenizer for WordBoundTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize_text(text)
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == ','
}

/// Digit runs like `1,200.00` come out of word segmentation as one word.
/// Split them into digit groups and separators: `1` `,` `200` `.` `00`.
fn split_number_separators<'a>(segment: &'a str, pieces: &mut Vec<&'a str>) {
    let is_grouped_number = segment.chars().any(|c| c.is_ascii_digit())
        && segment.chars().any(is_separator)
        && segment
            .chars()
            .all(|c| c.is_ascii_digit() || is_separator(c));

    if !is_grouped_number {
        pieces.push(segment);
        return;
    }

    let mut start = 0;
    for (i, c) in segment.char_indices() {
        if is_separator(c) {
            if start < i {
                pieces.push(&segment[start..i]);
            }
            pieces.push(&segment[i..i + c.len_utf8()]);
            start = i + c.len_utf8();
        }
    }
    if start < segment.len() {
        pieces.push(&segment[start..]);
    }
}

/// Tokenizes text on word boundaries, attaching whitespace to the preceding token.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    let mut pieces: Vec<&str> = Vec::new();
    for segment in text.split_word_bounds() {
        split_number_separators(segment, &mut pieces);
    }

    let mut texts: Vec<String> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let is_whitespace = piece.chars().all(char::is_whitespace);
        match texts.last_mut() {
            Some(last) if is_whitespace => last.push_str(piece),
            _ => texts.push(piece.to_string()),
        }
    }

    texts.into_iter().map(Token::new).collect()
}
