// Colored terminal output for analysis results.
//
// This module handles all terminal-specific formatting: colors and the
// claim table. main.rs delegates here for every human-readable command.

use colored::Colorize;

use super::{format_percent, ResultRow};
use crate::pipeline::analyze::{AnalysisResult, ScoredClaim};
use crate::scoring::similarity::TrustLabel;

/// Display a full analysis: overall score, claim table, and label summary.
pub fn display_analysis(result: &AnalysisResult) {
    let aggregate = result.aggregate_trust();
    println!(
        "\n{} {}",
        "Overall Trust Score:".bold(),
        colorize_percent(aggregate)
    );
    println!(
        "{}",
        format!(
            "Word overlap against {}-sentence Wikipedia summaries, {}",
            result.max_sentences(),
            result.analyzed_at().format("%Y-%m-%d %H:%M:%S UTC"),
        )
        .dimmed()
    );

    println!(
        "\n{}",
        format!("=== Claim Analysis ({} claims) ===", result.claims().len()).bold()
    );
    display_header();
    for scored in result.claims() {
        display_row(scored);
    }

    let counts = result.label_counts();
    println!("\n{}", "=== Summary ===".bold());
    println!("  {} {} likely true", "+".green().bold(), counts.likely_true);
    println!("  {} {} need review", "~".yellow(), counts.needs_review);
    println!("  {} {} likely false", "!".red().bold(), counts.likely_false);
    if counts.no_reference > 0 {
        println!("  {} {} without a reference", "?".dimmed(), counts.no_reference);
    }
}

/// Display a single scored claim (used by `lookup`).
pub fn display_scored_claim(scored: &ScoredClaim) {
    display_header();
    display_row(scored);
}

/// Display the extracted claims without scoring them.
pub fn display_claims(claims: &[String]) {
    if claims.is_empty() {
        println!("No valid claims found. Use complete sentences.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Extracted Claims ({}) ===", claims.len()).bold()
    );
    for (i, claim) in claims.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, claim);
    }
}

fn display_header() {
    println!();
    println!(
        "  {:>3}  {:<14} {:>7}  {:>10}  {}",
        "#".dimmed(),
        "Status".dimmed(),
        "Trust".dimmed(),
        "Similarity".dimmed(),
        "Wikipedia Source".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());
}

fn display_row(scored: &ScoredClaim) {
    let row = ResultRow::from(scored);
    let status = format!("{:<14}", row.status);

    println!(
        "  {:>3}  {} {:>7}  {:>10}  {}",
        row.position,
        colorize_label(scored.label, &status),
        row.trust_score,
        row.similarity,
        row.source.bold(),
    );
    println!("       {}", row.claim);
    println!("       {}", row.reference.dimmed());
}

/// Colorize text according to a trust label.
fn colorize_label(label: TrustLabel, text: &str) -> colored::ColoredString {
    match label {
        TrustLabel::LikelyTrue => text.green(),
        TrustLabel::NeedsReview => text.yellow(),
        TrustLabel::LikelyFalse => text.red(),
        TrustLabel::NoReference => text.dimmed(),
    }
}

/// Colorize an aggregate percentage using the same buckets as the labels.
fn colorize_percent(value: f64) -> colored::ColoredString {
    let label = TrustLabel::from_similarity(value / 100.0);
    colorize_label(label, &format_percent(value)).bold()
}
