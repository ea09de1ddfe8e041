use super::config::{sanitize_probability, DEFAULT_DECIMAL_PROBABILITY};
use super::currency::is_currency_symbol;
use rand::Rng;

const THOUSANDS_SUFFIXES: [&str; 6] = ["k", " k", "K", " K", "000", " 000"];
const GROUP_SEPARATORS: [&str; 3] = ["", " ", ","];

fn pick<'a, R: Rng>(choices: &[&'a str], rng: &mut R) -> &'a str {
    choices[rng.gen_range(0..choices.len())]
}

/// Two fractional digits, truncated from the two-digit rendering.
fn cents(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    match formatted.split_once('.') {
        Some((_, fraction)) => fraction.chars().take(2).collect(),
        None => "00".to_string(),
    }
}

/// Render an amount in a randomly chosen human style.
///
/// Between 1 000 and 1 000 000 the amount is split into thousands and a
/// three-digit remainder (`12k`, `12 540`, `12,540.35`); between 1 and 1 000 it
/// is the integer part with optional cents; anything else is the plain
/// truncated integer. Never more than two fractional digits.
pub fn format_amount<R: Rng>(amount: f64, decimal_probability: f64, rng: &mut R) -> String {
    let thousands = (amount / 1000.0).trunc() as i64;
    let remainder = (amount % 1000.0).trunc() as i64;
    let cents = cents(amount);
    let decimal_probability =
        sanitize_probability(decimal_probability, DEFAULT_DECIMAL_PROBABILITY);
    let with_cents = |rng: &mut R| rng.gen_bool(decimal_probability);

    if amount > 1000.0 && amount < 1_000_000.0 {
        if remainder == 0 && cents == "00" {
            return format!("{}{}", thousands, pick(&THOUSANDS_SUFFIXES, rng));
        }

        let mut formatted = format!(
            "{}{}{:03}",
            thousands,
            pick(&GROUP_SEPARATORS, rng),
            remainder
        );
        if cents != "00" && with_cents(rng) {
            formatted.push('.');
            formatted.push_str(&cents);
        }
        return formatted;
    }

    if amount > 1.0 && amount < 1000.0 {
        let mut formatted = remainder.to_string();
        if with_cents(rng) {
            formatted.push('.');
            formatted.push_str(&cents);
        }
        return formatted;
    }

    format!("{:.0}", amount.trunc())
}

/// Render an amount with its unit: symbols go first (`$ 12`), anything else
/// follows the amount (`12 euros`).
pub fn render_amount<R: Rng>(
    amount: f64,
    unit: &str,
    decimal_probability: f64,
    rng: &mut R,
) -> String {
    let formatted = format_amount(amount, decimal_probability, rng);
    if is_currency_symbol(unit) {
        format!("{} {}", unit, formatted)
    } else {
        format!("{} {}", formatted, unit)
    }
}
