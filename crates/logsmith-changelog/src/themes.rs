//! Emoji and style themes

use logsmith_core::Theme;

/// Per-type symbols of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEmojis {
    pub feat: &'static str,
    pub fix: &'static str,
    pub docs: &'static str,
    pub style: &'static str,
    pub refactor: &'static str,
    pub perf: &'static str,
    pub test: &'static str,
    pub build: &'static str,
    pub ci: &'static str,
    pub chore: &'static str,
    pub revert: &'static str,
    pub misc: &'static str,
    pub breaking: &'static str,
}

impl ThemeEmojis {
    /// Symbol for a commit type or `breaking`, if the theme defines one
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let emoji = match key {
            "feat" => self.feat,
            "fix" => self.fix,
            "docs" => self.docs,
            "style" => self.style,
            "refactor" => self.refactor,
            "perf" => self.perf,
            "test" => self.test,
            "build" => self.build,
            "ci" => self.ci,
            "chore" => self.chore,
            "revert" => self.revert,
            "misc" => self.misc,
            "breaking" => self.breaking,
            _ => return None,
        };
        Some(emoji)
    }

    fn all(&self) -> [&'static str; 13] {
        [
            self.feat,
            self.fix,
            self.docs,
            self.style,
            self.refactor,
            self.perf,
            self.test,
            self.build,
            self.ci,
            self.chore,
            self.revert,
            self.misc,
            self.breaking,
        ]
    }
}

/// Markdown style hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownStyles {
    pub header_prefix: &'static str,
    pub list_item_prefix: &'static str,
    pub emphasis: &'static str,
    pub code_style: &'static str,
}

/// HTML style hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlStyles {
    pub color_scheme: &'static str,
    pub font_size: &'static str,
    pub font_family: &'static str,
    /// Extra CSS appended to the page stylesheet
    pub custom_css: Option<&'static str>,
}

/// A named theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub emojis: ThemeEmojis,
    pub markdown: MarkdownStyles,
    pub html: HtmlStyles,
}

const SYSTEM_FONTS: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#;

static DEFAULT: ThemeConfig = ThemeConfig {
    name: "Default",
    description: "Standard emoji theme with colorful icons",
    emojis: ThemeEmojis {
        feat: "🚀",
        fix: "🐛",
        docs: "📚",
        style: "💅",
        refactor: "♻️",
        perf: "⚡",
        test: "🧪",
        build: "📦",
        ci: "🤖",
        chore: "🧹",
        revert: "⏪",
        misc: "📄",
        breaking: "💥",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "-",
        emphasis: "bold",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "medium",
        font_family: SYSTEM_FONTS,
        custom_css: None,
    },
};

static MINIMAL: ThemeConfig = ThemeConfig {
    name: "Minimal",
    description: "Clean theme with minimal symbols",
    emojis: ThemeEmojis {
        feat: "✨",
        fix: "🔧",
        docs: "📖",
        style: "🎨",
        refactor: "🔄",
        perf: "⚡",
        test: "✅",
        build: "📦",
        ci: "🔄",
        chore: "🔧",
        revert: "↩️",
        misc: "📝",
        breaking: "⚠️",
    },
    markdown: MarkdownStyles {
        header_prefix: "###",
        list_item_prefix: "*",
        emphasis: "none",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "small",
        font_family: "Georgia, serif",
        custom_css: None,
    },
};

static GITHUB: ThemeConfig = ThemeConfig {
    name: "GitHub",
    description: "GitHub-inspired theme with familiar styling",
    emojis: ThemeEmojis {
        feat: "✨",
        fix: "🐛",
        docs: "📝",
        style: "💄",
        refactor: "♻️",
        perf: "⚡",
        test: "✅",
        build: "👷",
        ci: "💚",
        chore: "🔧",
        revert: "⏪",
        misc: "🎉",
        breaking: "💥",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "-",
        emphasis: "bold",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "medium",
        font_family: SYSTEM_FONTS,
        custom_css: Some(
            "    .commit-type { color: #0969da; }
    .breaking-change { color: #d1242f; }
    .commit-hash { color: #656d76; font-family: monospace; }",
        ),
    },
};

static GITMOJI: ThemeConfig = ThemeConfig {
    name: "Gitmoji",
    description: "Complete gitmoji emoji set for commit types",
    emojis: ThemeEmojis {
        feat: "✨",
        fix: "🐛",
        docs: "📝",
        style: "🎨",
        refactor: "♻️",
        perf: "⚡️",
        test: "✅",
        build: "👷",
        ci: "💚",
        chore: "🔧",
        revert: "⏪️",
        misc: "🎉",
        breaking: "💥",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "-",
        emphasis: "bold",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "auto",
        font_size: "medium",
        font_family: "system-ui, sans-serif",
        custom_css: None,
    },
};

static UNICODE: ThemeConfig = ThemeConfig {
    name: "Unicode",
    description: "Unicode symbols instead of emojis for better compatibility",
    emojis: ThemeEmojis {
        feat: "→",
        fix: "✗",
        docs: "◉",
        style: "◈",
        refactor: "↻",
        perf: "▲",
        test: "✓",
        build: "■",
        ci: "●",
        chore: "○",
        revert: "←",
        misc: "◦",
        breaking: "‼",
    },
    markdown: MarkdownStyles {
        header_prefix: "###",
        list_item_prefix: "•",
        emphasis: "italic",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "medium",
        font_family: "monospace",
        custom_css: None,
    },
};

static SIMPLE: ThemeConfig = ThemeConfig {
    name: "Simple",
    description: "Text-only theme without any symbols or emojis",
    emojis: ThemeEmojis {
        feat: "",
        fix: "",
        docs: "",
        style: "",
        refactor: "",
        perf: "",
        test: "",
        build: "",
        ci: "",
        chore: "",
        revert: "",
        misc: "",
        breaking: "",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "-",
        emphasis: "none",
        code_style: "none",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "medium",
        font_family: "serif",
        custom_css: None,
    },
};

static COLORFUL: ThemeConfig = ThemeConfig {
    name: "Colorful",
    description: "Vibrant and expressive emoji theme",
    emojis: ThemeEmojis {
        feat: "🎊",
        fix: "🔨",
        docs: "📚",
        style: "🌈",
        refactor: "🔄",
        perf: "🚀",
        test: "🧪",
        build: "🏗️",
        ci: "🔄",
        chore: "🧽",
        revert: "🔙",
        misc: "🎭",
        breaking: "💢",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "🔹",
        emphasis: "bold",
        code_style: "fenced",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "large",
        font_family: "Comic Sans MS, cursive, sans-serif",
        custom_css: Some(
            "    .changelog-container { background: linear-gradient(45deg, #f0f8ff, #fff8f0); }
    .commit-type { font-weight: bold; text-shadow: 1px 1px 2px rgba(0,0,0,0.1); }
    .breaking-change { background: #ffebee; border-left: 4px solid #f44336; padding-left: 8px; }",
        ),
    },
};

static CORPORATE: ThemeConfig = ThemeConfig {
    name: "Corporate",
    description: "Professional theme suitable for business environments",
    emojis: ThemeEmojis {
        feat: "▶",
        fix: "▼",
        docs: "●",
        style: "◆",
        refactor: "◈",
        perf: "▲",
        test: "◇",
        build: "■",
        ci: "●",
        chore: "○",
        revert: "◀",
        misc: "◦",
        breaking: "⚠",
    },
    markdown: MarkdownStyles {
        header_prefix: "##",
        list_item_prefix: "-",
        emphasis: "bold",
        code_style: "backticks",
    },
    html: HtmlStyles {
        color_scheme: "light",
        font_size: "medium",
        font_family: "Arial, sans-serif",
        custom_css: Some(
            "    .changelog-container {
      font-family: Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
    }
    .commit-type {
      color: #2c5aa0;
      font-weight: 600;
    }
    .breaking-change {
      background: #fff3cd;
      border: 1px solid #ffeaa7;
      padding: 8px;
      border-radius: 4px;
      margin: 4px 0;
    }
    .commit-hash {
      color: #6c757d;
      font-family: 'Courier New', monospace;
      font-size: 0.9em;
    }",
        ),
    },
};

/// Get theme configuration
pub fn theme_config(theme: Theme) -> &'static ThemeConfig {
    match theme {
        Theme::Default => &DEFAULT,
        Theme::Minimal => &MINIMAL,
        Theme::Github => &GITHUB,
        Theme::Gitmoji => &GITMOJI,
        Theme::Unicode => &UNICODE,
        Theme::Simple => &SIMPLE,
        Theme::Colorful => &COLORFUL,
        Theme::Corporate => &CORPORATE,
    }
}

/// Symbol for a commit type (or `breaking`) in a theme.
///
/// Unknown types and empty symbols fall back to the theme's `misc` symbol,
/// which may itself be empty.
pub fn theme_emoji(key: &str, theme: Theme) -> &'static str {
    let emojis = &theme_config(theme).emojis;
    match emojis.get(key) {
        Some(emoji) if !emoji.is_empty() => emoji,
        _ => emojis.misc,
    }
}

/// All themes with their display names and descriptions
pub fn available_themes() -> Vec<(Theme, &'static str, &'static str)> {
    Theme::ALL
        .iter()
        .map(|&theme| {
            let config = theme_config(theme);
            (theme, config.name, config.description)
        })
        .collect()
}

/// Markdown style hints of a theme
pub fn markdown_styles(theme: Theme) -> &'static MarkdownStyles {
    &theme_config(theme).markdown
}

/// HTML style hints of a theme
pub fn html_styles(theme: Theme) -> &'static HtmlStyles {
    &theme_config(theme).html
}

/// Whether a theme has any non-empty symbol
pub fn theme_has_emojis(theme: Theme) -> bool {
    theme_config(theme)
        .emojis
        .all()
        .iter()
        .any(|emoji| !emoji.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_emoji_lookup() {
        assert_eq!(theme_emoji("feat", Theme::Default), "🚀");
        assert_eq!(theme_emoji("feat", Theme::Github), "✨");
        assert_eq!(theme_emoji("breaking", Theme::Unicode), "‼");
    }

    #[test]
    fn test_unknown_type_uses_misc() {
        assert_eq!(theme_emoji("wip", Theme::Default), "📄");
        assert_eq!(theme_emoji("wip", Theme::Corporate), "◦");
    }

    #[test]
    fn test_simple_theme_is_text_only() {
        assert_eq!(theme_emoji("feat", Theme::Simple), "");
        assert_eq!(theme_emoji("breaking", Theme::Simple), "");
        assert!(!theme_has_emojis(Theme::Simple));
        assert!(theme_has_emojis(Theme::Unicode));
    }

    #[test]
    fn test_available_themes() {
        let themes = available_themes();
        assert_eq!(themes.len(), 8);
        assert_eq!(themes[0], (Theme::Default, "Default", "Standard emoji theme with colorful icons"));
        assert!(themes.iter().any(|(t, name, _)| *t == Theme::Github && *name == "GitHub"));
    }

    #[test]
    fn test_style_hints() {
        assert_eq!(markdown_styles(Theme::Minimal).list_item_prefix, "*");
        assert_eq!(markdown_styles(Theme::Colorful).code_style, "fenced");
        assert_eq!(html_styles(Theme::Gitmoji).color_scheme, "auto");
        assert!(html_styles(Theme::Corporate).custom_css.is_some());
        assert!(html_styles(Theme::Default).custom_css.is_none());
    }
}
