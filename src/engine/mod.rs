pub mod abbreviations;
pub mod config;
pub mod currency;
pub mod detector;
pub mod error;
pub mod format;
pub mod generator;
pub mod parser;
pub mod repair;
pub mod state;
pub mod token;
pub mod tokenizer;

pub use config::TransformConfig;
pub use currency::{AdHocCurrency, Currency, ResolvedCurrency, CURRENCIES};
pub use detector::{detect_span, find_financial_amounts, merge_tokens, MarkerSet, Span};
pub use error::{AmountError, ResourceError};
pub use generator::ReplacementGenerator;
pub use parser::{parse_amount, ParsedAmount};
pub use state::{CurrencyEntry, DocumentState};
pub use token::{classify, Category, Token};
pub use tokenizer::{tokenize_text, Tokenizer, WordBoundTokenizer};
