//! Display of shares as short fractions

use crate::core::config::EngineConfig;
use crate::core::types::{share_to_f64, Share};

/// Render a share in `[0, 1]` as `"n/d"`
///
/// Preferred denominators are tried first, then every denominator up to
/// the configured bound; the first `d` with `|round(v*d)/d - v| < tolerance`
/// wins. Values that match nothing print with four decimals.
pub fn format_fraction(value: f64, config: &EngineConfig) -> String {
    short_fraction(value, config).unwrap_or_else(|| format!("{:.4}", value))
}

/// Exact share rendered like [`format_fraction`]
///
/// A share no bounded denominator matches prints as its reduced ratio, so
/// the text always parses back to the share.
pub fn format_share(value: &Share, config: &EngineConfig) -> String {
    short_fraction(share_to_f64(value), config)
        .unwrap_or_else(|| format!("{}/{}", value.numer(), value.denom()))
}

fn short_fraction(value: f64, config: &EngineConfig) -> Option<String> {
    if value == 0.0 {
        return Some("0".to_string());
    }
    if value >= config.whole_threshold {
        return Some("1/1".to_string());
    }

    let preferred = config.preferred_denominators.iter().copied();
    let fallback = 1..=config.max_fallback_denominator;

    preferred.chain(fallback).find_map(|denom| {
        match_denominator(value, denom, config.fraction_tolerance)
            .map(|numer| format!("{}/{}", numer, denom))
    })
}

fn match_denominator(value: f64, denom: u32, tolerance: f64) -> Option<i64> {
    let d = denom as f64;
    let numer = (value * d).round();
    ((numer / d - value).abs() < tolerance).then_some(numer as i64)
}
