//! Prometheus exposition-format rendering.
//!
//! One line per non-zero (record, token-category) pair plus one cost line per
//! record with non-zero cost, each carrying the original millisecond
//! timestamp so VictoriaMetrics backfills the series at the right points.

use crate::models::MetricPoint;

pub const TOKEN_METRIC: &str = "claude_code_token_usage_tokens_total";
pub const COST_METRIC: &str = "claude_code_cost_usage_USD_total";

/// Render all points in input order. No sorting, no deduplication, no
/// `# HELP`/`# TYPE` comments; zero-valued samples are suppressed. The
/// payload ends with a trailing newline.
pub fn render_prometheus(points: &[MetricPoint]) -> String {
    let mut lines = Vec::new();

    for point in points {
        for (category, count) in point.tokens.by_category() {
            if count > 0 {
                lines.push(format!(
                    "{TOKEN_METRIC}{{model=\"{}\",type=\"{}\"}} {} {}",
                    point.model, category, count, point.timestamp_ms
                ));
            }
        }
        if point.cost > 0.0 {
            lines.push(format!(
                "{COST_METRIC}{{model=\"{}\"}} {:.6} {}",
                point.model, point.cost, point.timestamp_ms
            ));
        }
    }

    lines.join("\n") + "\n"
}

/// Count of non-blank, non-comment lines in a rendered payload.
pub fn sample_count(payload: &str) -> usize {
    payload
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .count()
}
