//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the application's
//! [`InteractionConfig`] together with any [`ConfigIssue`]s found on the way.

mod copy;
mod logging;
mod output;
mod page;
mod timings;

pub use copy::FileCopyConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use page::{FilePageConfig, FileSectionConfig};
pub use timings::FileTimingsConfig;

use folio_application::InteractionConfig;
use folio_domain::{ConfigIssue, NavigationLayout};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Feedback lifetimes and submission delays
    pub timings: FileTimingsConfig,
    /// User-visible form text
    pub copy: FileCopyConfig,
    /// Header and scroll spy offsets
    pub layout: NavigationLayout,
    /// Form inputs, sections, nav links and tiles
    pub page: FilePageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_interaction_config().1
    }

    /// Convert to the application configuration.
    ///
    /// Checks, in order:
    /// 1. Zero feedback lifetimes
    /// 2. Empty copy strings
    /// 3. Form input types and layout
    /// 4. Sections
    /// 5. Nav links that point nowhere
    pub fn to_interaction_config(&self) -> (InteractionConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (timings, timing_issues) = self.timings.to_timings();
        issues.extend(timing_issues);

        let (copy, copy_issues) = self.copy.to_copy();
        issues.extend(copy_issues);

        let (inputs, input_issues) = self.page.parse_inputs();
        issues.extend(input_issues);

        let (outline, outline_issues) = self.page.parse_outline(self.layout);
        issues.extend(outline_issues);

        let (nav_links, link_issues) = self.page.parse_nav_links(&outline);
        issues.extend(link_issues);

        let config = InteractionConfig {
            timings,
            copy,
            inputs,
            outline,
            nav_links,
            skills: self.page.skills.clone(),
            projects: self.page.projects.clone(),
        };
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[timings]
notification_ms = 6000
submit_delay_ms = 500

[copy]
sent = "Thanks, talk soon."

[layout]
header_offset = 64.0

[page]
inputs = ["text", "email", "textarea"]
projects = ["Compiler", "Game"]

[[page.sections]]
id = "home"
top = 0.0
height = 500.0

[[page.sections]]
id = "contact"
top = 500.0
height = 400.0

[output]
color = false

[logging]
interaction_log = "interactions.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timings.notification_ms, 6000);
        assert_eq!(config.timings.field_error_ms, 3000);
        assert!(!config.output.color);
        assert_eq!(config.page.sections.len(), 2);

        let (interaction, issues) = config.to_interaction_config();
        assert!(issues.is_empty());
        assert_eq!(interaction.timings.submit_delay_ms, 500);
        assert_eq!(interaction.copy.sent, "Thanks, talk soon.");
        assert_eq!(interaction.outline.layout().header_offset, 64.0);
        assert_eq!(interaction.outline.layout().scroll_spy_offset, 100.0);
        assert_eq!(interaction.nav_links, vec!["#home", "#contact"]);
        assert_eq!(interaction.project_name(1), "Game");
        assert_eq!(interaction.project_name(5), "Project");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[timings]
reset_delay_ms = 1000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timings.reset_delay_ms, 1000);
        // Defaults should apply
        assert!(config.output.color);
        assert_eq!(config.page.inputs, vec!["text", "email", "text"]);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_matches_application_default() {
        let (interaction, _) = FileConfig::default().to_interaction_config();
        let expected = InteractionConfig::default();
        assert_eq!(interaction.timings, expected.timings);
        assert_eq!(interaction.copy, expected.copy);
        assert_eq!(interaction.inputs, expected.inputs);
        assert_eq!(interaction.outline, expected.outline);
        assert_eq!(interaction.nav_links, expected.nav_links);
        assert_eq!(interaction.skills, expected.skills);
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r##"
[timings]
notification_ms = 0

[copy]
rejected = ""

[page]
inputs = ["text", "textarea"]
nav_links = ["#home", "#blog"]
"##;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
    }
}
