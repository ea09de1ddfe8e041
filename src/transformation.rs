//! Sentence-level driver: repair, tokenize, detect, replace, reassemble.

use crate::engine::detector::{find_financial_amounts, MarkerSet};
use crate::engine::generator::ReplacementGenerator;
use crate::engine::repair::repair_text;
use crate::engine::tokenizer::{Tokenizer, WordBoundTokenizer};
use crate::engine::TransformConfig;

/// Replaces financial amounts in a sentence with plausible, different ones.
pub struct FinancialAmountTransformation {
    config: TransformConfig,
    markers: MarkerSet,
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
}

impl FinancialAmountTransformation {
    pub fn new(config: TransformConfig) -> Self {
        Self::with_markers(config, MarkerSet::default())
    }

    pub fn with_markers(config: TransformConfig, markers: MarkerSet) -> Self {
        Self {
            config,
            markers,
            tokenizer: Box::new(WordBoundTokenizer),
        }
    }

    /// Swap the tokenizer, e.g. for one backed by an NLP pipeline.
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + Send + Sync + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    /// Perturb every financial amount in `sentence`.
    ///
    /// The random source and the document state are built fresh for each
    /// call from `config.seed`, so the same sentence and seed always give the
    /// same output. Exactly one output is returned whatever `max_outputs` says.
    pub fn generate(&self, sentence: &str) -> Vec<String> {
        let text = repair_text(sentence);
        let mut tokens =
            find_financial_amounts(self.tokenizer.tokenize(&text), &self.markers);

        let mut generator = ReplacementGenerator::from_config(&self.config);
        tracing::debug!(
            seed = self.config.seed,
            variation = generator.variation_percent(),
            "transforming sentence"
        );

        for token in tokens.iter_mut().filter(|t| t.is_financial_amount) {
            match generator.replacement(token) {
                Ok(replacement) => token.replace(&replacement),
                Err(err) => {
                    tracing::warn!(text = %token.value(), "Amount left unchanged: {}", err)
                }
            }
        }

        let result: String = tokens.iter().map(|t| t.text.as_str()).collect();
        tracing::debug!("Perturbed input from {:?}: {:?}", sentence, result);

        vec![result]
    }
}

impl Default for FinancialAmountTransformation {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::token::Token;

    struct WhitespaceTokenizer;

    impl Tokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            text.split_inclusive(' ').map(Token::new).collect()
        }
    }

    #[test]
    fn test_text_without_amounts_unchanged() {
        let transformation = FinancialAmountTransformation::default();
        let text = "Nothing costs anything here, 42 times over.";
        assert_eq!(transformation.generate(text), vec![text.to_string()]);
    }

    #[test]
    fn test_single_output_regardless_of_max_outputs() {
        let config = TransformConfig {
            max_outputs: 5,
            ..TransformConfig::default()
        };
        let outputs = FinancialAmountTransformation::new(config).generate("It costs 15 $");
        assert_eq!(outputs.len(), 1);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let transformation = FinancialAmountTransformation::new(TransformConfig::with_seed(9));
        let text = "Pay 10 € or 1,200.00 USD.";
        assert_eq!(transformation.generate(text), transformation.generate(text));
    }

    #[test]
    fn test_set_seed() {
        let mut transformation = FinancialAmountTransformation::default();
        transformation.set_seed(77);
        assert_eq!(transformation.config().seed, 77);
    }

    #[test]
    fn test_custom_tokenizer() {
        let transformation =
            FinancialAmountTransformation::default().with_tokenizer(WhitespaceTokenizer);
        let output = &transformation.generate("costs 15 $ today")[0];
        assert!(output.starts_with("costs "));
        assert!(output.ends_with(" today"));
        assert_ne!(output, "costs 15 $ today");
    }

    #[test]
    fn test_repaired_before_tokenizing() {
        let transformation = FinancialAmountTransformation::default();
        let output = &transformation.generate("It is 10 â‚¬ now")[0];
        assert!(!output.contains("â‚¬"));
        assert!(output.starts_with("It is "));
    }
}
