//! Repository statistics over a commit range

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use logsmith_core::{Config, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::generator::collect_commits;
use crate::parser::FALLBACK_TYPE;
use crate::types::CommitInfo;

/// Statistics for a commit range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub total_commits: usize,
    /// Distinct `name <email>` identities
    pub contributors: usize,
    pub breaking_changes: usize,
    pub commit_types: BTreeMap<String, usize>,
    pub trends: Trends,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub commit_frequency: CommitFrequency,
    pub contributor_growth: ContributorGrowth,
    pub type_distribution: TypeDistribution,
}

/// Commit counts per day, ISO week and month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitFrequency {
    pub daily: BTreeMap<String, usize>,
    pub weekly: BTreeMap<String, usize>,
    pub monthly: BTreeMap<String, usize>,
    /// Distinct days with at least one commit
    pub total_days: usize,
    pub average_per_day: f64,
    pub peak_day: PeakDay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: String,
    pub commits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorGrowth {
    /// Contributors keyed by the day they first appear
    pub timeline: BTreeMap<String, Vec<String>>,
    pub total_contributors: usize,
    /// Contributors in the order they were first seen
    pub new_contributors: Vec<String>,
    pub most_active_contributor: ActiveContributor,
    pub contributor_commits: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveContributor {
    pub name: String,
    pub commits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDistribution {
    /// Share of each type, in percent with two decimals
    pub percentages: BTreeMap<String, f64>,
    pub most_common_type: TypeShare,
    pub least_common_type: TypeShare,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub count: usize,
    pub percentage: f64,
}

/// Counter that remembers first-seen order for tie breaking
#[derive(Debug, Default)]
struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn bump(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Highest count, earliest key on ties
    fn max(&self) -> Option<(&str, usize)> {
        self.entries.iter().fold(None, |best, (k, c)| match best {
            Some((_, bc)) if *c <= bc => best,
            _ => Some((k.as_str(), *c)),
        })
    }

    /// Lowest count, earliest key on ties
    fn min(&self) -> Option<(&str, usize)> {
        self.entries.iter().fold(None, |best, (k, c)| match best {
            Some((_, bc)) if *c >= bc => best,
            _ => Some((k.as_str(), *c)),
        })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn to_map(&self) -> BTreeMap<String, usize> {
        self.entries.iter().cloned().collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_commit_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    DateTime::parse_from_rfc3339(date)
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

/// ISO week key, e.g. `2024-W01`; the year is the ISO week-based year
fn week_key(date: &DateTime<Utc>) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Compute statistics for already parsed commits
pub fn compute_stats(commits: &[CommitInfo], from: Option<String>, to: String) -> RepositoryStats {
    let mut types = Tally::default();
    let mut contributors = Tally::default();
    let mut daily = Tally::default();
    let mut weekly = Tally::default();
    let mut monthly = Tally::default();
    let mut timeline: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut new_contributors: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut breaking_changes = 0;

    for commit in commits {
        let commit_type = if commit.commit_type.is_empty() {
            FALLBACK_TYPE
        } else {
            commit.commit_type.as_str()
        };
        let contributor = format!("{} <{}>", commit.author.name, commit.author.email);

        types.bump(commit_type);
        contributors.bump(&contributor);
        if commit.breaking {
            breaking_changes += 1;
        }

        let Some(date) = parse_commit_date(&commit.date) else {
            continue;
        };

        let day = date.format("%Y-%m-%d").to_string();
        daily.bump(&day);
        weekly.bump(&week_key(&date));
        monthly.bump(&date.format("%Y-%m").to_string());

        if seen.insert(contributor.clone()) {
            timeline.entry(day).or_default().push(contributor.clone());
            new_contributors.push(contributor);
        }
    }

    let total = commits.len();
    let total_days = daily.len();

    let peak_day = daily
        .max()
        .map(|(date, commits)| PeakDay {
            date: date.to_string(),
            commits,
        })
        .unwrap_or_default();

    let most_active_contributor = contributors
        .max()
        .map(|(name, commits)| ActiveContributor {
            name: name.to_string(),
            commits,
        })
        .unwrap_or_default();

    let percentage = |count: usize| round2(count as f64 / total as f64 * 100.0);
    let share = |(commit_type, count): (&str, usize)| TypeShare {
        commit_type: commit_type.to_string(),
        count,
        percentage: percentage(count),
    };

    RepositoryStats {
        from,
        to,
        total_commits: total,
        contributors: contributors.len(),
        breaking_changes,
        commit_types: types.to_map(),
        trends: Trends {
            commit_frequency: CommitFrequency {
                daily: daily.to_map(),
                weekly: weekly.to_map(),
                monthly: monthly.to_map(),
                total_days,
                average_per_day: if total_days > 0 {
                    round2(total as f64 / total_days as f64)
                } else {
                    0.0
                },
                peak_day,
            },
            contributor_growth: ContributorGrowth {
                timeline,
                total_contributors: contributors.len(),
                new_contributors,
                most_active_contributor,
                contributor_commits: contributors.to_map(),
            },
            type_distribution: TypeDistribution {
                percentages: types
                    .entries
                    .iter()
                    .map(|(t, c)| (t.clone(), percentage(*c)))
                    .collect(),
                most_common_type: types.max().map(share).unwrap_or_default(),
                least_common_type: types.min().map(share).unwrap_or_default(),
            },
        },
    }
}

/// Analyze the configured commit range.
///
/// The range starts at `config.from`, or the latest tag reachable from
/// `config.to` when unset.
#[instrument(skip_all, fields(dir = %config.dir.display()))]
pub fn analyze_commits(config: &Config) -> Result<RepositoryStats> {
    let (from, commits) = collect_commits(config)?;
    info!(count = commits.len(), "analyzing commits");
    Ok(compute_stats(&commits, from, config.to.clone()))
}
