// Configuration for one financial amount transformation

use std::ops::RangeInclusive;

pub const DEFAULT_SWITCH_PROBABILITY: f64 = 0.5;
pub const DEFAULT_DECIMAL_PROBABILITY: f64 = 0.5;

/// Clamp a probability into `0.0..=1.0`; non-finite values fall back to `default`.
pub fn sanitize_probability(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        default
    }
}

/// Settings for a transformation call
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    /// Seed for the call-scoped random source (default 0)
    pub seed: u64,

    /// Requested number of outputs (default 1). A call always yields one
    /// output regardless of this value.
    pub max_outputs: usize,

    /// Magnitude range of the variation percentage (default 1..=20)
    pub variation_percent: RangeInclusive<u32>,

    /// Chance that a first-seen registry currency is switched (default 0.5)
    pub switch_probability: f64,

    /// Chance that cents are rendered when present (default 0.5)
    pub decimal_probability: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_outputs: 1,
            variation_percent: 1..=20,
            switch_probability: DEFAULT_SWITCH_PROBABILITY,
            decimal_probability: DEFAULT_DECIMAL_PROBABILITY,
        }
    }
}

impl TransformConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.max_outputs, 1);
        assert_eq!(config.variation_percent, 1..=20);
        assert_eq!(config.switch_probability, 0.5);
    }

    #[test]
    fn test_with_seed_keeps_other_defaults() {
        let config = TransformConfig::with_seed(42);
        assert_eq!(config.seed, 42);
        assert_eq!(config.variation_percent, TransformConfig::default().variation_percent);
    }

    #[test]
    fn test_sanitize_probability() {
        assert_eq!(sanitize_probability(0.3, 0.5), 0.3);
        assert_eq!(sanitize_probability(1.7, 0.5), 1.0);
        assert_eq!(sanitize_probability(-2.0, 0.5), 0.0);
        assert_eq!(sanitize_probability(f64::NAN, 0.5), 0.5);
        assert_eq!(sanitize_probability(f64::INFINITY, 0.25), 0.25);
    }
}
