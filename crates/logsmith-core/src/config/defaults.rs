//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "logsmith.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "logsmith.yaml";

/// Default changelog file written by the generate command
pub const DEFAULT_OUTPUT_FILE: &str = "CHANGELOG.md";

/// Default end reference
pub const DEFAULT_TO_REF: &str = "HEAD";

/// Default line template for a commit entry
pub const COMMIT_FORMAT: &str = "- {{scope}}{{description}} ([{{hash}}]({{repoUrl}}/commit/{{hash}}))";

/// Default line template for entries in the breaking changes section
pub const BREAKING_CHANGE_FORMAT: &str =
    "- **{{scope}}{{description}}** ([{{hash}}]({{repoUrl}}/commit/{{hash}}))";

/// Default section heading template
pub const GROUP_FORMAT: &str = "### {{title}}";

/// Default date line template
pub const DATE_FORMAT: &str = "_{{date}}_";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        "logsmith.yml",
        ".logsmith.toml",
        ".logsmith.yaml",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_names_come_first() {
        let names = config_file_names();
        assert_eq!(names[0], "logsmith.toml");
        assert!(names.contains(&".logsmith.yaml"));
    }
}
