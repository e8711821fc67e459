// Colored terminal output for keyword rankings.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary lines. The main.rs display paths delegate here.

use colored::Colorize;

use crate::db::models::RankingRow;
use crate::output::truncate_chars;

/// Display the ranked keyword table in the terminal.
pub fn display_rankings(rows: &[RankingRow]) {
    if rows.is_empty() {
        println!("No keywords ranked yet. Run `headliner update` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Keyword Ranking ({} keywords) ===", rows.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<20} {:>9}  {:>9}  {}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Freq".dimmed(),
        "Closeness".dimmed(),
        "Link".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, row) in rows.iter().enumerate() {
        let closeness = format!("{:.3}", row.closeness);
        let colored_closeness = if row.closeness >= 0.75 {
            closeness.bright_green()
        } else if row.closeness >= 0.4 {
            closeness.bright_yellow()
        } else {
            closeness.dimmed()
        };

        let link = if row.link.is_empty() {
            "-".dimmed().to_string()
        } else {
            truncate_chars(&row.link, 40).dimmed().to_string()
        };

        println!(
            "  {:>4}. {:<20} {:>9} {:>10}  {}",
            i + 1,
            truncate_chars(&row.keyword, 20).bold(),
            row.frequency,
            colored_closeness,
            link,
        );
    }

    println!();

    let unlinked = rows.iter().filter(|r| r.link.is_empty()).count();
    if unlinked > 0 {
        println!(
            "  {} {} keywords without a source link",
            "~".yellow(),
            unlinked
        );
    }
}

/// Display a generated headline summary.
pub fn display_summary(summary: &str, headline_count: usize) {
    println!(
        "\n{}",
        format!("=== Digest of {headline_count} headlines ===").bold()
    );
    println!();
    for line in summary.lines() {
        println!("  {line}");
    }
    println!();
}
