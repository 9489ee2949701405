//! # Pricing Module
//!
//! Static per-model pricing used to derive USD cost from token counts.
//!
//! Rates are USD per million tokens, one row per exact model identifier.
//! Unknown models are not an error: they price at zero so their token samples
//! still import, just without a cost series.

use crate::models::TokenCounts;

#[derive(Clone, Copy, Debug)]
pub struct Pricing {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
    pub cache_write_per_mtok: f64,
    pub cache_read_per_mtok: f64,
}

/// Exact-match lookup. Cache write ≈ 1.25× input, cache read ≈ 0.1× input.
pub fn pricing_for_model(model_id: &str) -> Option<Pricing> {
    match model_id {
        "claude-sonnet-4-5-20250929" | "claude-sonnet-3-5-20241022"
        | "claude-sonnet-3-5-20240620" => Some(Pricing {
            input_per_mtok: 3.00,
            output_per_mtok: 15.00,
            cache_write_per_mtok: 3.75,
            cache_read_per_mtok: 0.30,
        }),
        "claude-haiku-4-5-20251001" => Some(Pricing {
            input_per_mtok: 1.00,
            output_per_mtok: 5.00,
            cache_write_per_mtok: 1.25,
            cache_read_per_mtok: 0.10,
        }),
        "claude-opus-4-20250514" => Some(Pricing {
            input_per_mtok: 15.00,
            output_per_mtok: 75.00,
            cache_write_per_mtok: 18.75,
            cache_read_per_mtok: 1.50,
        }),
        _ => None,
    }
}

/// USD cost for one response: Σ(count / 1M × category rate).
/// Unknown model → 0.0, never an error.
pub fn calculate_cost(model_id: &str, tokens: &TokenCounts) -> f64 {
    let Some(p) = pricing_for_model(model_id) else {
        return 0.0;
    };
    tokens.input as f64 / 1e6 * p.input_per_mtok
        + tokens.output as f64 / 1e6 * p.output_per_mtok
        + tokens.cache_creation as f64 / 1e6 * p.cache_write_per_mtok
        + tokens.cache_read as f64 / 1e6 * p.cache_read_per_mtok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_for_known_models() {
        let sonnet = pricing_for_model("claude-sonnet-4-5-20250929").unwrap();
        assert!((sonnet.input_per_mtok - 3.00).abs() < 1e-10);
        assert!((sonnet.output_per_mtok - 15.00).abs() < 1e-10);
        assert!((sonnet.cache_write_per_mtok - 3.75).abs() < 1e-10);
        assert!((sonnet.cache_read_per_mtok - 0.30).abs() < 1e-10);

        let opus = pricing_for_model("claude-opus-4-20250514").unwrap();
        assert!((opus.input_per_mtok - 15.00).abs() < 1e-10);
        assert!((opus.output_per_mtok - 75.00).abs() < 1e-10);

        let haiku = pricing_for_model("claude-haiku-4-5-20251001").unwrap();
        assert!((haiku.input_per_mtok - 1.00).abs() < 1e-10);
        assert!((haiku.output_per_mtok - 5.00).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_model_has_no_pricing() {
        assert!(pricing_for_model("unknown-model").is_none());
        // Family prefixes alone are not enough; the table is exact-match.
        assert!(pricing_for_model("claude-sonnet-4-5").is_none());
    }

    #[test]
    fn test_cost_formula() {
        let tokens = TokenCounts {
            input: 1_000_000,
            output: 1_000_000,
            cache_creation: 0,
            cache_read: 0,
        };
        let cost = calculate_cost("claude-haiku-4-5-20251001", &tokens);
        assert!((cost - 6.0).abs() < 1e-9);

        let tokens = TokenCounts {
            input: 500_000,
            output: 100_000,
            cache_creation: 200_000,
            cache_read: 1_000_000,
        };
        let cost = calculate_cost("claude-sonnet-4-5-20250929", &tokens);
        // 0.5*3 + 0.1*15 + 0.2*3.75 + 1.0*0.30
        assert!((cost - (1.5 + 1.5 + 0.75 + 0.30)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_model_costs_zero() {
        let tokens = TokenCounts {
            input: 9_999_999,
            output: 9_999_999,
            cache_creation: 9_999_999,
            cache_read: 9_999_999,
        };
        assert_eq!(calculate_cost("some-future-model", &tokens), 0.0);
    }
}
