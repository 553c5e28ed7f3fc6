//! Formatter registry

use std::sync::Arc;

use logsmith_core::OutputFormat;

use super::{ChangelogFormatter, HtmlFormatter, JsonFormatter, MarkdownFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(MarkdownFormatter::new()),
                Arc::new(JsonFormatter::new()),
                Arc::new(HtmlFormatter::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter, replacing any existing one for the same format
    pub fn register<F: ChangelogFormatter + 'static>(&mut self, formatter: F) {
        let format = formatter.output_format();
        self.formatters.retain(|f| f.output_format() != format);
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter for an output format
    pub fn get(&self, format: OutputFormat) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.output_format() == format)
            .cloned()
    }

    /// Get formatter by file extension
    pub fn by_extension(&self, extension: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn ChangelogFormatter>] {
        &self.formatters
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneratedChangelog;
    use logsmith_core::Config;

    struct PlainText;

    impl ChangelogFormatter for PlainText {
        fn format(&self, changelog: &GeneratedChangelog, _config: &Config) -> String {
            format!("{} sections", changelog.sections.len())
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Markdown
        }
    }

    #[test]
    fn test_registry_has_every_format() {
        let registry = FormatterRegistry::new();
        for format in OutputFormat::ALL {
            assert!(registry.get(format).is_some(), "{}", format);
        }
    }

    #[test]
    fn test_get_by_extension() {
        let registry = FormatterRegistry::new();
        assert!(registry.by_extension("md").is_some());
        assert!(registry.by_extension("html").is_some());
        assert!(registry.by_extension("pdf").is_none());
    }

    #[test]
    fn test_register_replaces_same_format() {
        let mut registry = FormatterRegistry::new();
        registry.register(PlainText);
        assert_eq!(registry.all().len(), 3);

        let changelog = GeneratedChangelog {
            version: None,
            date: "2024-01-01".to_string(),
            sections: Vec::new(),
            contributors: Vec::new(),
            compare_url: None,
        };
        let formatter = registry.get(OutputFormat::Markdown).unwrap();
        assert_eq!(formatter.format(&changelog, &Config::default()), "0 sections");
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatterRegistry::empty();
        assert!(registry.all().is_empty());
        assert!(registry.get(OutputFormat::Json).is_none());
    }
}
