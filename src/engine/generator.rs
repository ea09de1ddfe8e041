//! Replacement generation for one document.
//!
//! Every financial-amount token is varied by the same signed percentage, drawn
//! once per document. Registry currencies may be switched to another registry
//! currency; the decision, the display form, and every rendered value are
//! remembered in a [`DocumentState`] so repeated amounts come out identical.

use super::config::{
    sanitize_probability, TransformConfig, DEFAULT_DECIMAL_PROBABILITY,
    DEFAULT_SWITCH_PROBABILITY,
};
use super::currency::{convert, vary, Currency, ResolvedCurrency, CURRENCIES};
use super::error::AmountError;
use super::format::render_amount;
use super::parser::parse_amount;
use super::state::{CurrencyEntry, DocumentState};
use super::token::Token;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Signed variation percentage: magnitude drawn from `magnitude`, random sign.
pub fn draw_variation<R: Rng>(rng: &mut R, magnitude: &RangeInclusive<u32>) -> i32 {
    let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
    if magnitude.is_empty() {
        return 0;
    }
    sign * rng.gen_range(magnitude.clone()) as i32
}

pub struct ReplacementGenerator<R: Rng> {
    rng: R,
    variation_percent: i32,
    switch_probability: f64,
    decimal_probability: f64,
    state: DocumentState,
}

impl ReplacementGenerator<StdRng> {
    /// Generator seeded from `config.seed`.
    pub fn from_config(config: &TransformConfig) -> Self {
        Self::new(StdRng::seed_from_u64(config.seed), config)
    }
}

impl<R: Rng> ReplacementGenerator<R> {
    pub fn new(mut rng: R, config: &TransformConfig) -> Self {
        let variation_percent = draw_variation(&mut rng, &config.variation_percent);
        Self {
            rng,
            variation_percent,
            switch_probability: sanitize_probability(
                config.switch_probability,
                DEFAULT_SWITCH_PROBABILITY,
            ),
            decimal_probability: sanitize_probability(
                config.decimal_probability,
                DEFAULT_DECIMAL_PROBABILITY,
            ),
            state: DocumentState::new(),
        }
    }

    pub fn variation_percent(&self) -> i32 {
        self.variation_percent
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// Replacement text for one financial-amount token.
    ///
    /// Tokens are expected in document order: earlier calls decide what later
    /// occurrences of the same currency and value become.
    pub fn replacement(&mut self, token: &Token) -> Result<String, AmountError> {
        let parsed = parse_amount(token.value())?;
        // keep a separating space when the unit was written apart from the amount
        let spaced = token.text.contains(' ');

        let rendered = match parsed.currency {
            ResolvedCurrency::Registered(currency) => {
                self.registered_replacement(parsed.value, currency, spaced)
            }
            ResolvedCurrency::AdHoc(adhoc) => {
                self.ad_hoc_replacement(parsed.value, &adhoc.unit, spaced)
            }
        };

        Ok(rendered)
    }

    fn render(&mut self, amount: f64, unit: &str) -> String {
        render_amount(amount, unit, self.decimal_probability, &mut self.rng)
    }

    /// Varied amount in the original unit; repeated values reuse their rendering.
    fn ad_hoc_replacement(&mut self, value: f64, unit: &str, spaced: bool) -> String {
        if let Some(previous) = self.state.ad_hoc_rendered_for(unit, value) {
            return previous.to_string();
        }

        let varied = vary(value, self.variation_percent);
        let rendered = with_trailing_space(self.render(varied, unit), spaced);
        self.state.record_ad_hoc(unit, value, rendered.clone());
        rendered
    }

    fn registered_replacement(
        &mut self,
        value: f64,
        currency: &'static Currency,
        spaced: bool,
    ) -> String {
        if let Some(entry) = self.state.entry(currency.name) {
            if let Some(previous) = entry.rendered_for(value) {
                return previous.to_string();
            }

            let target = entry.target;
            let symbol = entry.symbol.clone();
            let amount = convert(
                vary(value, self.variation_percent),
                currency.rate,
                target.rate,
            );
            let rendered = with_trailing_space(self.render(amount, &symbol), spaced);
            if let Some(entry) = self.state.entry_mut(currency.name) {
                entry.record(value, rendered.clone());
            }
            return rendered;
        }

        let varied = vary(value, self.variation_percent);
        let switch = self.state.is_target(currency.name) || self.rng.gen_bool(self.switch_probability);

        let (target, amount) = match switch.then(|| self.switch_target(currency)).flatten() {
            Some(target) => (target, convert(varied, currency.rate, target.rate)),
            None => (currency, varied),
        };

        let symbol = target
            .synonyms
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(target.name);
        tracing::debug!(
            source = currency.name,
            target = target.name,
            symbol,
            "currency decided"
        );

        let rendered = with_trailing_space(self.render(amount, symbol), spaced);
        self.state
            .entry_or_insert(currency.name, CurrencyEntry::new(target, symbol))
            .record(value, rendered.clone());
        rendered
    }

    /// Random registry currency other than `current` and not already a target
    /// in this document. `None` once the pool is exhausted.
    fn switch_target(&mut self, current: &Currency) -> Option<&'static Currency> {
        let candidates: Vec<&'static Currency> = CURRENCIES
            .iter()
            .copied()
            .filter(|c| c.name != current.name && !self.state.is_target(c.name))
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}

fn with_trailing_space(mut rendered: String, spaced: bool) -> String {
    if spaced && !rendered.ends_with(' ') {
        rendered.push(' ');
    }
    rendered
}
