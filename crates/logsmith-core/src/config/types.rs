//! Configuration types

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::defaults;

/// Main configuration for logsmith
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit progress information while generating
    pub verbose: bool,

    /// Output file; `None` prints to the console only
    pub output: Option<PathBuf>,

    /// Rendered output format
    pub format: OutputFormat,

    /// Language for labels, section titles and dates
    pub language: Language,

    /// Emoji and style theme
    pub theme: Theme,

    /// Start reference (exclusive); defaults to the latest reachable tag
    pub from: Option<String>,

    /// End reference (inclusive)
    pub to: String,

    /// Repository directory
    pub dir: PathBuf,

    /// Refuse to run when the working tree has uncommitted changes
    pub clean: bool,

    /// Authors (name or email) left out of the contributor list
    pub exclude_authors: Vec<String>,

    /// When non-empty, only these authors (name or email) are listed
    pub include_authors: Vec<String>,

    /// Omit the contributors block entirely
    pub exclude_email: bool,

    /// Show authors as `Name` instead of `Name <email>`
    pub hide_author_email: bool,

    /// Commit types dropped from the changelog
    pub exclude_commit_types: Vec<String>,

    /// When non-empty, only these commit types are kept
    pub include_commit_types: Vec<String>,

    /// Minimum bucket size for a type section to be emitted
    pub min_commits_for_section: usize,

    /// Maximum entries per section (0 = unlimited)
    pub max_commits_per_section: usize,

    /// Scopes dropped from the changelog
    pub exclude_scopes: Vec<String>,

    /// When non-empty, only scoped commits with these scopes are kept
    pub include_scopes: Vec<String>,

    /// Substrings that drop a commit when found in its subject
    pub exclude_messages: Vec<String>,

    /// Collect breaking changes in a dedicated leading section
    pub group_breaking_changes: bool,

    /// Render the release date under the version heading
    pub include_dates: bool,

    /// Render a total commit count line
    pub include_commit_count: bool,

    /// Prefix placed before the version in headings
    pub version_prefix: String,

    /// Version the changelog is generated for
    pub version: Option<String>,

    /// Carry commit bodies into rendered entries
    pub include_commit_body: bool,

    /// Maximum description length (0 = unlimited)
    pub max_description_length: usize,

    /// Render issue references as links
    pub linkify_issues: bool,

    /// Render pull request references as links
    pub linkify_prs: bool,

    /// Repository browse URL; resolved from the `origin` remote when unset
    pub repo: Option<String>,

    /// Output templates
    pub templates: TemplatesConfig,

    /// Apply markdown clean-up fixes to markdown output
    pub markdown_lint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            output: Some(PathBuf::from(defaults::DEFAULT_OUTPUT_FILE)),
            format: OutputFormat::default(),
            language: Language::default(),
            theme: Theme::default(),
            from: None,
            to: defaults::DEFAULT_TO_REF.to_string(),
            dir: PathBuf::from("."),
            clean: false,
            exclude_authors: Vec::new(),
            include_authors: Vec::new(),
            exclude_email: false,
            hide_author_email: false,
            exclude_commit_types: Vec::new(),
            include_commit_types: Vec::new(),
            min_commits_for_section: 1,
            max_commits_per_section: 0,
            exclude_scopes: Vec::new(),
            include_scopes: Vec::new(),
            exclude_messages: Vec::new(),
            group_breaking_changes: true,
            include_dates: true,
            include_commit_count: false,
            version_prefix: "v".to_string(),
            version: None,
            include_commit_body: false,
            max_description_length: 0,
            linkify_issues: true,
            linkify_prs: true,
            repo: None,
            templates: TemplatesConfig::default(),
            markdown_lint: true,
        }
    }
}

impl Config {
    /// Apply a layer of overrides on top of this configuration.
    ///
    /// Only fields that are set in `overrides` replace the current values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            verbose,
            output,
            format,
            language,
            theme,
            from,
            to,
            dir,
            clean,
            exclude_authors,
            include_authors,
            exclude_email,
            hide_author_email,
            exclude_commit_types,
            include_commit_types,
            min_commits_for_section,
            max_commits_per_section,
            exclude_scopes,
            include_scopes,
            exclude_messages,
            group_breaking_changes,
            include_dates,
            include_commit_count,
            version_prefix,
            version,
            include_commit_body,
            max_description_length,
            linkify_issues,
            linkify_prs,
            repo,
            templates,
            markdown_lint,
        } = overrides;

        set(&mut self.verbose, verbose);
        set(&mut self.format, format);
        set(&mut self.language, language);
        set(&mut self.theme, theme);
        set(&mut self.to, to);
        set(&mut self.dir, dir);
        set(&mut self.clean, clean);
        set(&mut self.exclude_authors, exclude_authors);
        set(&mut self.include_authors, include_authors);
        set(&mut self.exclude_email, exclude_email);
        set(&mut self.hide_author_email, hide_author_email);
        set(&mut self.exclude_commit_types, exclude_commit_types);
        set(&mut self.include_commit_types, include_commit_types);
        set(&mut self.min_commits_for_section, min_commits_for_section);
        set(&mut self.max_commits_per_section, max_commits_per_section);
        set(&mut self.exclude_scopes, exclude_scopes);
        set(&mut self.include_scopes, include_scopes);
        set(&mut self.exclude_messages, exclude_messages);
        set(&mut self.group_breaking_changes, group_breaking_changes);
        set(&mut self.include_dates, include_dates);
        set(&mut self.include_commit_count, include_commit_count);
        set(&mut self.version_prefix, version_prefix);
        set(&mut self.include_commit_body, include_commit_body);
        set(&mut self.max_description_length, max_description_length);
        set(&mut self.linkify_issues, linkify_issues);
        set(&mut self.linkify_prs, linkify_prs);
        set(&mut self.markdown_lint, markdown_lint);

        if from.is_some() {
            self.from = from;
        }
        if version.is_some() {
            self.version = version;
        }
        if repo.is_some() {
            self.repo = repo;
        }

        match output {
            Some(OutputTarget::File(path)) => self.output = Some(path),
            Some(OutputTarget::Enabled(false)) => self.output = None,
            Some(OutputTarget::Enabled(true)) => {
                if self.output.is_none() {
                    self.output = Some(PathBuf::from(defaults::DEFAULT_OUTPUT_FILE));
                }
            }
            None => {}
        }

        if let Some(templates) = templates {
            self.templates.apply(templates);
        }
    }

    /// Builder-style variant of [`Config::apply`]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.apply(overrides);
        self
    }

    /// Resolve the output path against the repository directory
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.dir.join(p)
            }
        })
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Output templates using literal `{{placeholder}}` substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Line template for a regular commit entry
    pub commit_format: String,

    /// Line template for entries inside the dedicated breaking section
    pub breaking_change_format: String,

    /// Section heading template (`{{title}}`)
    pub group_format: String,

    /// Date line template (`{{date}}`)
    pub date_format: String,

    /// Per-type section title overrides
    pub type_format: BTreeMap<String, String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            commit_format: defaults::COMMIT_FORMAT.to_string(),
            breaking_change_format: defaults::BREAKING_CHANGE_FORMAT.to_string(),
            group_format: defaults::GROUP_FORMAT.to_string(),
            date_format: defaults::DATE_FORMAT.to_string(),
            type_format: BTreeMap::new(),
        }
    }
}

impl TemplatesConfig {
    fn apply(&mut self, overrides: TemplateOverrides) {
        set(&mut self.commit_format, overrides.commit_format);
        set(
            &mut self.breaking_change_format,
            overrides.breaking_change_format,
        );
        set(&mut self.group_format, overrides.group_format);
        set(&mut self.date_format, overrides.date_format);
        if let Some(type_format) = overrides.type_format {
            self.type_format.extend(type_format);
        }
    }
}

/// A partial configuration layer.
///
/// Used both for the parsed configuration file and for caller-supplied
/// overrides. Unset fields never replace values from lower layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub verbose: Option<bool>,
    pub output: Option<OutputTarget>,
    pub format: Option<OutputFormat>,
    pub language: Option<Language>,
    pub theme: Option<Theme>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub dir: Option<PathBuf>,
    pub clean: Option<bool>,
    pub exclude_authors: Option<Vec<String>>,
    pub include_authors: Option<Vec<String>>,
    pub exclude_email: Option<bool>,
    pub hide_author_email: Option<bool>,
    pub exclude_commit_types: Option<Vec<String>>,
    pub include_commit_types: Option<Vec<String>>,
    pub min_commits_for_section: Option<usize>,
    pub max_commits_per_section: Option<usize>,
    pub exclude_scopes: Option<Vec<String>>,
    pub include_scopes: Option<Vec<String>>,
    pub exclude_messages: Option<Vec<String>>,
    pub group_breaking_changes: Option<bool>,
    pub include_dates: Option<bool>,
    pub include_commit_count: Option<bool>,
    pub version_prefix: Option<String>,
    pub version: Option<String>,
    pub include_commit_body: Option<bool>,
    pub max_description_length: Option<usize>,
    pub linkify_issues: Option<bool>,
    pub linkify_prs: Option<bool>,
    pub repo: Option<String>,
    pub templates: Option<TemplateOverrides>,
    pub markdown_lint: Option<bool>,
}

/// Partial template layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOverrides {
    pub commit_format: Option<String>,
    pub breaking_change_format: Option<String>,
    pub group_format: Option<String>,
    pub date_format: Option<String>,
    pub type_format: Option<BTreeMap<String, String>>,
}

/// Output destination as written in a configuration layer.
///
/// `output = false` disables file output, `output = "path"` selects a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputTarget {
    /// `true` keeps (or restores) the default file, `false` disables output
    Enabled(bool),
    /// Explicit output file
    File(PathBuf),
}

/// Rendered changelog format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown document
    #[default]
    Markdown,
    /// JSON document
    Json,
    /// Standalone HTML page
    Html,
}

impl OutputFormat {
    /// All supported formats
    pub const ALL: [OutputFormat; 3] = [Self::Markdown, Self::Json, Self::Html];

    /// Configuration name of this format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Default file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Infer a format from an output file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|f| f.as_str()).collect();
                ConfigError::one_of("format", s, &valid)
            })
    }
}

/// Supported output languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
    Ja,
    Ko,
    Ru,
    Pt,
    It,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 10] = [
        Self::En,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::Zh,
        Self::Ja,
        Self::Ko,
        Self::Ru,
        Self::Pt,
        Self::It,
    ];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Ru => "ru",
            Self::Pt => "pt",
            Self::It => "it",
        }
    }

    /// Look up a language by code, falling back to English
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|l| l.code()).collect();
                ConfigError::one_of("language", s, &valid)
            })
    }
}

/// Supported themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Minimal,
    Github,
    Gitmoji,
    Unicode,
    Simple,
    Colorful,
    Corporate,
}

impl Theme {
    /// All supported themes
    pub const ALL: [Theme; 8] = [
        Self::Default,
        Self::Minimal,
        Self::Github,
        Self::Gitmoji,
        Self::Unicode,
        Self::Simple,
        Self::Colorful,
        Self::Corporate,
    ];

    /// Configuration key of this theme
    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Github => "github",
            Self::Gitmoji => "gitmoji",
            Self::Unicode => "unicode",
            Self::Simple => "simple",
            Self::Colorful => "colorful",
            Self::Corporate => "corporate",
        }
    }

    /// Look up a theme by key, falling back to the default theme
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|t| t.key()).collect();
                ConfigError::one_of("theme", s, &valid)
            })
    }
}
