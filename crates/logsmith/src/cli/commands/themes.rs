//! Theme listing command

use std::fmt::Write as _;

use clap::Args;
use tracing::info;

use logsmith_changelog::themes::available_themes;

use crate::cli::output::{hint_style, key_style};
use crate::cli::Cli;

/// List available themes
#[derive(Debug, Clone, Args)]
pub struct ThemesCommand {}

impl ThemesCommand {
    /// Execute the themes command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!("executing themes command");
        print!("{}", render_themes());
        Ok(())
    }
}

fn render_themes() -> String {
    let mut out = String::from("\n🎨 Available Themes:\n\n");
    for (theme, name, description) in available_themes() {
        let key = format!("{:<12}", theme.key());
        let _ = writeln!(
            out,
            "  {} - {}: {}",
            key_style().apply_to(key),
            name,
            description
        );
    }
    let _ = writeln!(
        out,
        "\n{}",
        hint_style().apply_to("Use --theme <name> to apply a theme")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsmith_core::Theme;

    #[test]
    fn test_lists_every_theme() {
        console::set_colors_enabled(false);
        let text = render_themes();
        for theme in Theme::ALL {
            assert!(text.contains(&format!("  {:<12} - ", theme.key())));
        }
        assert!(text.trim_end().ends_with("Use --theme <name> to apply a theme"));
    }
}
