use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use claude_history_import::cli::Args;
use claude_history_import::display::{self, format_count};
use claude_history_import::import::{ImportStatus, import_prometheus};
use claude_history_import::render::{render_prometheus, sample_count};
use claude_history_import::usage::{
    extract_metrics, find_conversation_files, parse_conversation_file,
};

fn default_projects_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".claude")
        .join("projects")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let projects_dir = args
        .projects_dir
        .clone()
        .unwrap_or_else(default_projects_dir);

    display::print_header(&args.victoria_url, &projects_dir);

    if !projects_dir.is_dir() {
        display::warn(&format!(
            "Projects directory not found: {}",
            projects_dir.display()
        ));
        return Ok(());
    }

    let files = find_conversation_files(&projects_dir).context("scan projects directory")?;
    display::info(&format!("Found {} conversation files", files.len()));

    let mut points = Vec::new();
    let mut total_messages = 0u64;
    let mut dropped = 0usize;
    let mut token_totals: BTreeMap<&'static str, u64> = BTreeMap::new();
    let mut total_cost = 0.0f64;

    for path in &files {
        let records = parse_conversation_file(path);
        total_messages += records.len() as u64;
        let extraction = extract_metrics(&records);
        if args.debug {
            eprintln!(
                "{}: {} records, {} metric points, {} dropped",
                path.display(),
                records.len(),
                extraction.points.len(),
                extraction.dropped
            );
        }
        dropped += extraction.dropped;
        for point in &extraction.points {
            for (category, count) in point.tokens.by_category() {
                *token_totals.entry(category).or_insert(0) += count;
            }
            total_cost += point.cost;
        }
        points.extend(extraction.points);
    }

    display::print_summary(total_messages, &token_totals, total_cost);
    if args.debug && dropped > 0 {
        eprintln!("dropped {dropped} api_response records with missing or unparsable timestamps");
    }

    display::info("Generating Prometheus format...");
    let payload = render_prometheus(&points);
    display::info(&format!(
        "Generated {} metric samples",
        format_count(sample_count(&payload) as u64)
    ));
    println!();

    display::info("Importing to VictoriaMetrics...");
    match import_prometheus(&args.victoria_url, &payload)? {
        ImportStatus::Accepted => display::success("Import successful!"),
        ImportStatus::Rejected { status, body } => {
            display::warn(&format!("Import failed: HTTP {status}"));
            display::warn(&format!("Response: {body}"));
        }
    }
    Ok(())
}
