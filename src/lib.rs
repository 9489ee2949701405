//! # Claude History Import
//!
//! One-shot importer that reads Claude Code conversation logs
//! (`~/.claude/projects/*/conversation.jsonl`), derives per-response token
//! and cost metrics, and pushes them into VictoriaMetrics through its
//! Prometheus text-format bulk-import endpoint.
//!
//! ## Pipeline
//!
//! 1. Scan the projects directory for conversation logs
//! 2. Parse each log line-by-line, skipping anything malformed
//! 3. Extract token counts and derived cost from `api_response` records
//! 4. Render Prometheus exposition lines with the original timestamps
//! 5. POST the payload once; HTTP 204 means accepted
//!
//! ## Features
//!
//! - `colors` (default): terminal color output via owo-colors

/// Command-line argument parsing and configuration
pub mod cli;

/// Console progress and summary output
pub mod display;

/// HTTP delivery to the VictoriaMetrics import endpoint
pub mod import;

/// Data models for log lines and extracted metric points
pub mod models;

/// Model-specific pricing and cost calculation
pub mod pricing;

/// Prometheus exposition-format rendering
pub mod render;

/// Log discovery, parsing, and metric extraction
pub mod usage;
