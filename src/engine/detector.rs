//! Financial amount detection over a classified token stream.
//!
//! A marker token (currency word, symbol or abbreviation) anchors the search.
//! The amount is looked for on whichever side of the marker holds a numeric
//! token, with a bounded lookahead of at most five tokens, and the resulting
//! span is collapsed into a single flagged token.

use super::abbreviations::default_abbreviations;
use super::currency::CURRENCY_MARKERS;
use super::token::Token;
use std::collections::{HashSet, VecDeque};

/// Recognised currency markers: the abbreviation list plus the registry words
/// and symbols.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    abbreviations: HashSet<String>,
}

impl MarkerSet {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_marker(&self, value: &str) -> bool {
        self.abbreviations.contains(value) || CURRENCY_MARKERS.contains(value)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(default_abbreviations().iter().cloned())
    }
}

/// Inclusive token index range of one financial amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// A marker with no adjacent amount.
    pub fn is_bare(&self) -> bool {
        self.start == self.end
    }
}

/// Indexed read access to a token stream. Out of range reads as `None`, so
/// stream edges never match a pattern.
trait TokenLookup {
    fn token(&self, index: usize) -> Option<&Token>;
}

impl TokenLookup for [Token] {
    fn token(&self, index: usize) -> Option<&Token> {
        self.get(index)
    }
}

/// Already-scanned tokens followed by the ones still to scan, seen as one stream.
struct ScanWindow<'a> {
    scanned: &'a [Token],
    pending: &'a VecDeque<Token>,
}

impl TokenLookup for ScanWindow<'_> {
    fn token(&self, index: usize) -> Option<&Token> {
        match index.checked_sub(self.scanned.len()) {
            Some(offset) => self.pending.get(offset),
            None => self.scanned.get(index),
        }
    }
}

struct Matcher<'a, S: TokenLookup + ?Sized> {
    tokens: &'a S,
    markers: &'a MarkerSet,
}

impl<S: TokenLookup + ?Sized> Matcher<'_, S> {
    fn at(&self, index: Option<usize>) -> Option<&Token> {
        index.and_then(|i| self.tokens.token(i))
    }

    fn is(&self, index: Option<usize>, value: &str) -> bool {
        self.at(index).map_or(false, |t| t.value() == value)
    }

    fn is_separator(&self, index: Option<usize>) -> bool {
        self.is(index, ".") || self.is(index, ",")
    }

    fn is_numeric(&self, index: Option<usize>) -> bool {
        self.at(index).map_or(false, Token::is_numeric)
    }

    /// Numeric token of exactly three characters, a thousands group.
    fn is_group(&self, index: Option<usize>) -> bool {
        self.at(index)
            .map_or(false, |t| t.is_numeric() && t.value().len() == 3)
    }

    fn is_marker(&self, index: Option<usize>) -> bool {
        self.at(index)
            .map_or(false, |t| self.markers.is_marker(t.value()))
    }

    fn span(&self, marker: usize) -> Span {
        if self.is_numeric(marker.checked_sub(1)) {
            self.look_behind(marker)
        } else if self.is_numeric(marker.checked_add(1)) {
            self.look_ahead(marker)
        } else {
            Span::single(marker)
        }
    }

    /// Marker precedes the amount: `USD 15`, `$12.540`, `$12,540.00`, `$ 12 540`.
    fn look_ahead(&self, marker: usize) -> Span {
        let after = |n: usize| marker.checked_add(n);

        let end = if self.is(after(2), ",")
            && self.is_group(after(3))
            && self.is(after(4), ".")
            && self.is_numeric(after(5))
        {
            marker + 5
        } else if self.is_separator(after(2)) {
            if self.is_numeric(after(3)) {
                marker + 3
            } else {
                // separator is sentence punctuation
                marker + 1
            }
        } else if self.is_numeric(after(2)) {
            marker + 2
        } else {
            marker + 1
        };

        // doubled unit: `$ 12 USD`
        let end = if self.is_marker(end.checked_add(1)) {
            end + 1
        } else {
            end
        };

        Span { start: marker, end }
    }

    /// Amount precedes the marker: `15 $`, `12.540 $`, `12,540.00 $`, `12 540 $`.
    fn look_behind(&self, marker: usize) -> Span {
        let before = |n: usize| marker.checked_sub(n);

        let start = if self.is(before(2), ".")
            && self.is_group(before(3))
            && self.is(before(4), ",")
            && self.is_numeric(before(5))
        {
            marker - 5
        } else if self.is_separator(before(2)) {
            if self.is_numeric(before(3)) {
                marker - 3
            } else {
                marker - 1
            }
        } else if self.is_numeric(before(2)) {
            marker - 2
        } else {
            marker - 1
        };

        let end = if self.is_marker(marker.checked_add(1)) {
            marker + 1
        } else {
            marker
        };

        Span { start, end }
    }
}

/// Inclusive range of the financial amount anchored on the marker at `marker`.
///
/// The range always contains `marker`; it is bare when no amount sits next to it.
pub fn detect_span(tokens: &[Token], marker: usize, markers: &MarkerSet) -> Span {
    Matcher { tokens, markers }.span(marker)
}

/// Collapse tokens into one flagged token carrying their concatenated text.
pub fn merge_tokens(tokens: impl IntoIterator<Item = Token>) -> Token {
    let text: String = tokens.into_iter().map(|t| t.text).collect();
    Token::financial_amount(text)
}

/// Single left-to-right pass replacing every detected span by a merged token.
///
/// Scanning resumes right after each merged token. Already merged tokens are
/// never markers, so running the pass again leaves the stream unchanged.
pub fn find_financial_amounts(tokens: Vec<Token>, markers: &MarkerSet) -> Vec<Token> {
    let mut pending: VecDeque<Token> = tokens.into();
    let mut scanned: Vec<Token> = Vec::with_capacity(pending.len());

    while let Some(front) = pending.front() {
        if !front.is_financial_amount && markers.is_marker(front.value()) {
            let marker = scanned.len();
            let window = ScanWindow {
                scanned: &scanned,
                pending: &pending,
            };
            let span = Matcher {
                tokens: &window,
                markers,
            }
            .span(marker);

            if !span.is_bare() {
                let consumed = span.end - marker;
                let merged = merge_tokens(
                    scanned
                        .drain(span.start..)
                        .chain(pending.drain(..=consumed)),
                );
                tracing::debug!(text = %merged.value(), "financial amount detected");
                scanned.push(merged);
                continue;
            }
        }

        if let Some(token) = pending.pop_front() {
            scanned.push(token);
        }
    }

    scanned
}
