//! Literal `{{placeholder}}` substitution

use logsmith_core::Config;

use crate::types::{ChangelogEntry, GitReference, ReferenceType};

/// Replace every `{{name}}` in `template` with its value.
///
/// Unknown placeholders are left untouched.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{{{}}}}}", name), value)
        })
}

/// Render one entry line from a commit template
pub fn render_entry(template: &str, entry: &ChangelogEntry, repo_url: &str) -> String {
    let scope = entry
        .scope
        .as_ref()
        .map(|s| format!("**{}**: ", s))
        .unwrap_or_default();

    fill(
        template,
        &[
            ("description", &entry.description),
            ("hash", &entry.hash),
            ("author", entry.author.as_deref().unwrap_or_default()),
            ("scope", &scope),
            ("repoUrl", repo_url),
        ],
    )
}

/// Link target for a reference, when linkification applies to its kind
pub fn reference_link(reference: &GitReference, repo_url: &str, config: &Config) -> Option<String> {
    match reference.ref_type {
        ReferenceType::Issue if config.linkify_issues => {
            Some(format!("{}/issues/{}", repo_url, reference.id))
        }
        ReferenceType::Pr if config.linkify_prs => {
            Some(format!("{}/pull/{}", repo_url, reference.id))
        }
        _ => None,
    }
}

/// Markdown rendering of a reference: `[#N](url)` or `#N`
pub fn markdown_reference(reference: &GitReference, repo_url: &str, config: &Config) -> String {
    match reference_link(reference, repo_url, config) {
        Some(url) => format!("[#{}]({})", reference.id, url),
        None => format!("#{}", reference.id),
    }
}
