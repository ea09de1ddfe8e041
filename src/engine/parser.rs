use super::currency::{resolve, ResolvedCurrency};
use super::error::AmountError;
use std::ops::Range;

/// Value and currency read from a financial-amount token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub currency: ResolvedCurrency,
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Byte range of the first numeric run: digits, `,`/`.` between digits,
/// blanks between digit groups, and an optional `k`/`K` suffix.
fn numeric_run(text: &str) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let digit_at = |i: usize| bytes.get(i).map_or(false, u8::is_ascii_digit);

    let mut end = start;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                i += 1;
                end = i;
            }
            b',' | b'.' if digit_at(i + 1) => i += 1,
            b if is_blank(b) => {
                let next = i + bytes[i..].iter().take_while(|b| is_blank(**b)).count();
                if !digit_at(next) {
                    break;
                }
                i = next;
            }
            _ => break,
        }
    }

    // thousands abbreviation: `15k`, `15 K`
    let suffix = if bytes.get(end).copied().map_or(false, is_blank) {
        end + 1
    } else {
        end
    };
    if matches!(bytes.get(suffix), Some(b'k' | b'K'))
        && !text[suffix + 1..]
            .chars()
            .next()
            .map_or(false, char::is_alphanumeric)
    {
        end = suffix + 1;
    }

    Some(start..end)
}

/// Numeric value of a run: blanks and `,` dropped, trailing `k` as thousands.
fn parse_value(run: &str) -> Result<f64, AmountError> {
    let compact: String = run
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>()
        .to_lowercase();

    let (digits, scale) = match compact.strip_suffix('k') {
        Some(digits) => (digits, 1000.0),
        None => (compact.as_str(), 1.0),
    };

    let value: f64 = digits.parse().map_err(|source| AmountError::InvalidNumber {
        text: run.to_string(),
        source,
    })?;

    Ok(value * scale)
}

/// Split a financial-amount text into its value and currency.
///
/// The first numeric run is the amount; whatever surrounds it is the currency
/// designator. Resolution is total: unknown designators become ad hoc units.
pub fn parse_amount(text: &str) -> Result<ParsedAmount, AmountError> {
    let text = text.trim();
    let run = numeric_run(text).ok_or_else(|| AmountError::MissingDigits(text.to_string()))?;

    let parts: Vec<&str> = [text[..run.start].trim(), text[run.end..].trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    Ok(ParsedAmount {
        value: parse_value(&text[run])?,
        currency: resolve(&parts),
    })
}
