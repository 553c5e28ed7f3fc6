//! Language listing command

use std::fmt::Write as _;

use clap::Args;
use tracing::info;

use logsmith_changelog::i18n::native_name;
use logsmith_core::Language;

use crate::cli::output::{hint_style, key_style};
use crate::cli::Cli;

/// List supported languages
#[derive(Debug, Clone, Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    /// Execute the languages command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!("executing languages command");
        print!("{}", render_languages());
        Ok(())
    }
}

fn render_languages() -> String {
    let mut out = String::from("\n🌐 Supported Languages:\n\n");
    for language in Language::ALL {
        let _ = writeln!(
            out,
            "  {} - {}",
            key_style().apply_to(format!("{:<4}", language.code())),
            native_name(language)
        );
    }
    let _ = writeln!(
        out,
        "\n{}",
        hint_style().apply_to("Use --language <code> to localize the changelog")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_language() {
        console::set_colors_enabled(false);
        let text = render_languages();
        assert!(text.contains("  en   - English"));
        assert!(text.contains("  ja   - 日本語"));
        assert_eq!(text.matches(" - ").count(), Language::ALL.len());
    }
}
