//! Financial amount perturbation for text data augmentation.
//!
//! Detects amount-plus-currency expressions in a sentence and rewrites each
//! one to a plausible but different amount and/or currency, keeping repeated
//! values consistent within the sentence.

pub mod engine;
pub mod repl;
pub mod transformation;

pub use engine::{
    find_financial_amounts, parse_amount, tokenize_text, AmountError, DocumentState, MarkerSet,
    ReplacementGenerator, ResourceError, Token, TransformConfig,
};
pub use transformation::FinancialAmountTransformation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
