//! # Usage Module
//!
//! Scans the Claude projects directory for conversation logs and extracts
//! per-response token and cost metrics from them.
//!
//! ## Key Functions
//!
//! - `find_conversation_files`: enumerates `<root>/*/conversation.jsonl`
//! - `parse_conversation_file`: line-by-line JSONL parse, bad lines skipped
//! - `extract_metrics`: filters `api_response` records into `MetricPoint`s

use anyhow::{Context, Result};
use chrono::DateTime;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::display;
use crate::models::{LogLine, MetricPoint, TokenCounts};
use crate::pricing::calculate_cost;

pub const CONVERSATION_FILE: &str = "conversation.jsonl";

/// Result of extracting one batch of records. `dropped` counts `api_response`
/// records discarded for a missing or unparsable timestamp.
#[derive(Debug, Default)]
pub struct Extraction {
    pub points: Vec<MetricPoint>,
    pub dropped: usize,
}

/// One `conversation.jsonl` per immediate project subdirectory. Sorted so
/// repeated runs over unchanged input render byte-identical payloads.
pub fn find_conversation_files(projects_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("read projects directory {}", projects_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let candidate = entry.path().join(CONVERSATION_FILE);
        if candidate.is_file() {
            files.push(candidate);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one log file into raw JSON records, one per non-blank line. Lines
/// that are not valid JSON are skipped; an unreadable file is reported and
/// contributes nothing, the run continues.
pub fn parse_conversation_file(path: &Path) -> Vec<Value> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            display::warn(&format!("Error reading {}: {}", path.display(), err));
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                display::warn(&format!("Error reading {}: {}", path.display(), err));
                return Vec::new();
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            records.push(value);
        }
    }
    records
}

/// Keep only `api_response` records, convert their timestamps to epoch
/// milliseconds, and derive cost from the pricing table. Token counts default
/// to 0, a missing model renders as "unknown" (token samples still import,
/// cost prices at zero).
pub fn extract_metrics(records: &[Value]) -> Extraction {
    let mut extraction = Extraction::default();

    for record in records {
        if record.get("type").and_then(|v| v.as_str()) != Some("api_response") {
            continue;
        }
        let Ok(line) = serde_json::from_value::<LogLine>(record.clone()) else {
            continue;
        };

        // RFC 3339 accepts both the trailing "Z" and an explicit "+00:00".
        let Some(ts) = line.timestamp.as_deref() else {
            extraction.dropped += 1;
            continue;
        };
        let Ok(dt) = DateTime::parse_from_rfc3339(ts) else {
            extraction.dropped += 1;
            continue;
        };

        let usage = line.usage.unwrap_or_default();
        let tokens = TokenCounts {
            input: usage.input_tokens.unwrap_or(0),
            output: usage.output_tokens.unwrap_or(0),
            cache_creation: usage.cache_creation_input_tokens.unwrap_or(0),
            cache_read: usage.cache_read_input_tokens.unwrap_or(0),
        };
        let model = line.model.unwrap_or_else(|| "unknown".to_string());
        let cost = calculate_cost(&model, &tokens);

        extraction.points.push(MetricPoint {
            timestamp_ms: dt.timestamp_millis(),
            model,
            tokens,
            cost,
        });
    }

    extraction
}
