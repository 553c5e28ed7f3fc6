//! Repository statistics command

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use logsmith_changelog::i18n::labels;
use logsmith_changelog::{analyze_commits, RepositoryStats};
use logsmith_core::config::{load_config, ConfigOverrides};
use logsmith_core::Language;

use crate::cli::output::{header, key_value};
use crate::cli::Cli;

const MAX_BAR: usize = 20;
const RECENT_DAYS: usize = 7;
const TOP_CONTRIBUTORS: usize = 5;

/// Show commit statistics for a range
#[derive(Debug, Clone, Args)]
pub struct StatsCommand {
    /// Start commit reference (default: latest reachable tag)
    #[arg(long, value_name = "REF")]
    pub from: Option<String>,

    /// End commit reference (default: HEAD)
    #[arg(long, value_name = "REF")]
    pub to: Option<String>,

    /// Path to the git repository (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Language for labels
    #[arg(long)]
    pub language: Option<Language>,

    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    /// Execute the stats command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(from = ?self.from, to = ?self.to, "executing stats command");

        let overrides = ConfigOverrides {
            verbose: cli.verbose.then_some(true),
            from: self.from.clone(),
            to: self.to.clone(),
            dir: self.dir.clone(),
            language: self.language,
            ..ConfigOverrides::default()
        };
        let (config, _) = load_config(overrides)?;
        let stats = analyze_commits(&config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print!("{}", render_stats(&stats, config.language));
        }

        Ok(())
    }
}

fn bar(symbol: &str, len: usize) -> String {
    symbol.repeat(len.min(MAX_BAR))
}

/// Render repository statistics for the terminal
pub fn render_stats(stats: &RepositoryStats, language: Language) -> String {
    let l = labels(language);
    let trends = &stats.trends;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header(&format!("📊 {}", l.repository_stats)));
    let range = format!(
        "{} → {}",
        stats.from.as_deref().unwrap_or("first commit"),
        stats.to
    );
    let _ = writeln!(out, "{}", key_value(l.range, range));
    let _ = writeln!(out, "{}", key_value(l.total_commits, stats.total_commits));
    let _ = writeln!(out, "{}", key_value(l.contributors, stats.contributors));
    let _ = writeln!(
        out,
        "{}",
        key_value(l.breaking_changes_count, stats.breaking_changes)
    );

    let frequency = &trends.commit_frequency;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header(&format!("📈 {}", l.commit_frequency)));
    let _ = writeln!(out, "{}", key_value(l.total_days, frequency.total_days));
    let _ = writeln!(
        out,
        "{}",
        key_value(l.average_per_day, frequency.average_per_day)
    );
    if frequency.peak_day.commits > 0 {
        let peak = format!(
            "{} ({} {})",
            frequency.peak_day.date, frequency.peak_day.commits, l.commits
        );
        let _ = writeln!(out, "{}", key_value(l.peak_day, peak));
    }
    if !frequency.daily.is_empty() {
        let _ = writeln!(out, "{}:", l.recent_activity);
        for (date, count) in frequency.daily.iter().rev().take(RECENT_DAYS) {
            let _ = writeln!(out, "  {}: {} {}", date, bar("█", *count), count);
        }
    }

    let growth = &trends.contributor_growth;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header(&format!("👥 {}", l.contributors)));
    if growth.most_active_contributor.commits > 0 {
        let active = format!(
            "{} ({} {})",
            growth.most_active_contributor.name, growth.most_active_contributor.commits, l.commits
        );
        let _ = writeln!(out, "{}", key_value(l.most_active, active));
    }
    let _ = writeln!(
        out,
        "{}",
        key_value(l.new_contributors, growth.new_contributors.len())
    );

    let mut top: Vec<_> = growth.contributor_commits.iter().collect();
    top.sort_by(|a, b| b.1.cmp(a.1));
    if !top.is_empty() {
        let _ = writeln!(out, "{}:", l.top_contributors);
        for (author, count) in top.into_iter().take(TOP_CONTRIBUTORS) {
            let name = author.split(" <").next().unwrap_or(author);
            let share = if stats.total_commits > 0 {
                *count as f64 / stats.total_commits as f64 * 100.0
            } else {
                0.0
            };
            let _ = writeln!(out, "  {}: {} {} ({:.1}%)", name, count, l.commits, share);
        }
    }

    let distribution = &trends.type_distribution;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header("📋 Commit Types"));
    let most = &distribution.most_common_type;
    if !most.commit_type.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            key_value(l.most_common, format!("{} ({}%)", most.commit_type, most.percentage))
        );
    }
    let least = &distribution.least_common_type;
    if !least.commit_type.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            key_value(l.least_common, format!("{} ({}%)", least.commit_type, least.percentage))
        );
    }

    let mut shares: Vec<_> = distribution.percentages.iter().collect();
    shares.sort_by(|a, b| b.1.total_cmp(a.1));
    if !shares.is_empty() {
        let _ = writeln!(out, "{}:", l.distribution);
        for (commit_type, percentage) in shares {
            let count = stats.commit_types.get(commit_type).copied().unwrap_or(0);
            let width = (percentage / 2.0).round() as usize;
            let _ = writeln!(
                out,
                "  {:<10}: {} {}% ({})",
                commit_type,
                bar("▓", width),
                percentage,
                count
            );
        }
    }

    let _ = writeln!(out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsmith_changelog::compute_stats;
    use logsmith_changelog::parser::parse_commit;
    use logsmith_git::RawCommit;

    fn sample() -> RepositoryStats {
        let commits: Vec<_> = [
            ("feat: a", "Alice", "2024-03-01"),
            ("feat: b", "Alice", "2024-03-01"),
            ("fix!: c", "Bob", "2024-03-02"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (subject, name, date))| {
            parse_commit(&RawCommit::new(
                format!("{:07}", i),
                *subject,
                *name,
                format!("{}@example.com", name.to_lowercase()),
                *date,
            ))
        })
        .collect();
        compute_stats(&commits, Some("v1.0.0".to_string()), "HEAD".to_string())
    }

    #[test]
    fn test_render_stats_sections() {
        console::set_colors_enabled(false);
        let text = render_stats(&sample(), Language::En);

        assert!(text.contains("📊 Repository Statistics"));
        assert!(text.contains("Range: v1.0.0 → HEAD"));
        assert!(text.contains("Total commits: 3"));
        assert!(text.contains("Breaking changes: 1"));
        assert!(text.contains("Peak day: 2024-03-01 (2 commits)"));
        assert!(text.contains("  2024-03-02: █ 1"));
        assert!(text.contains("  Alice: 2 commits (66.7%)"));
        assert!(text.contains("Most common: feat (66.67%)"));
        assert!(text.contains("  feat      : ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ 66.67% (2)"));
        assert!(text.contains("  fix       : ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ 33.33% (1)"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_recent_activity_newest_first() {
        console::set_colors_enabled(false);
        let text = render_stats(&sample(), Language::En);
        let newer = text.find("  2024-03-02").unwrap();
        let older = text.find("  2024-03-01").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_localized_labels() {
        console::set_colors_enabled(false);
        let text = render_stats(&sample(), Language::Fr);
        assert!(text.contains(labels(Language::Fr).repository_stats));
    }
}
