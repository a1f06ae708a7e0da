//! Page structure from TOML (`[page]` section)
//!
//! Describes what the markup would contain: the contact form inputs,
//! the sections anchors and the scroll spy target, the nav links and
//! the skill and project tiles.

use folio_application::InteractionConfig;
use folio_domain::{
    ConfigIssue, ConfigIssueCode, ContactForm, DomainError, InputKind, NavigationLayout, PageOutline,
    Section,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw section entry (`[[page.sections]]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSectionConfig {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Raw page configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePageConfig {
    /// Input types of the contact form in page order ("text", "email", "textarea")
    pub inputs: Vec<String>,
    pub sections: Vec<FileSectionConfig>,
    /// Nav link hrefs; empty means one link per section
    pub nav_links: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

impl Default for FilePageConfig {
    fn default() -> Self {
        let defaults = InteractionConfig::default();
        Self {
            inputs: defaults
                .inputs
                .iter()
                .map(|kind| input_kind_name(*kind).to_string())
                .collect(),
            sections: defaults
                .outline
                .sections()
                .iter()
                .map(|s| FileSectionConfig {
                    id: s.id.clone(),
                    top: s.top,
                    height: s.height,
                })
                .collect(),
            nav_links: Vec::new(),
            skills: defaults.skills,
            projects: defaults.projects,
        }
    }
}

fn input_kind_name(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "text",
        InputKind::Email => "email",
        InputKind::TextArea => "textarea",
    }
}

impl FilePageConfig {
    /// Parse input kinds, falling back to `text` for unknown values,
    /// then check the result can host a contact form.
    pub fn parse_inputs(&self) -> (Vec<InputKind>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let kinds: Vec<InputKind> = self
            .inputs
            .iter()
            .enumerate()
            .map(|(i, raw)| match raw.parse::<InputKind>() {
                Ok(kind) => kind,
                Err(_) => {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::InvalidEnumValue {
                            field: format!("page.inputs[{}]", i),
                            value: raw.clone(),
                            valid_values: vec![
                                "text".to_string(),
                                "email".to_string(),
                                "textarea".to_string(),
                            ],
                        },
                        format!(
                            "page.inputs[{}]: unknown input type '{}', treating it as 'text'",
                            i, raw
                        ),
                    ));
                    InputKind::Text
                }
            })
            .collect();

        if let Err(e) = ContactForm::from_inputs(&kinds) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidFormLayout {
                    reason: e.to_string(),
                },
                format!("page.inputs: {}", e),
            ));
        }

        (kinds, issues)
    }

    /// Build the page outline; falls back to the default outline on error
    pub fn parse_outline(&self, layout: NavigationLayout) -> (PageOutline, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidSection {
                        id: section.id.clone(),
                        reason: "duplicate section id".to_string(),
                    },
                    format!("page.sections: duplicate section id '{}'", section.id),
                ));
            }
        }

        let sections = self
            .sections
            .iter()
            .map(|s| Section::new(s.id.clone(), s.top, s.height))
            .collect();

        let outline = match PageOutline::new(sections, layout) {
            Ok(outline) => outline,
            Err(e) => {
                let message = format!("page.sections: {}", e);
                let code = match e {
                    DomainError::InvalidSection { id, reason } => {
                        ConfigIssueCode::InvalidSection { id, reason }
                    }
                    other => ConfigIssueCode::InvalidSection {
                        id: String::new(),
                        reason: other.to_string(),
                    },
                };
                issues.push(ConfigIssue::error(code, message));
                PageOutline::portfolio()
            }
        };

        (outline, issues)
    }

    /// Resolve nav links against the outline; links to unknown sections are kept but reported
    pub fn parse_nav_links(&self, outline: &PageOutline) -> (Vec<String>, Vec<ConfigIssue>) {
        if self.nav_links.is_empty() {
            return (
                outline.sections().iter().map(|s| s.href()).collect(),
                Vec::new(),
            );
        }

        let issues = self
            .nav_links
            .iter()
            .filter(|href| {
                href.strip_prefix('#')
                    .is_none_or(|id| outline.section(id).is_none())
            })
            .map(|href| {
                ConfigIssue::warning(
                    ConfigIssueCode::DanglingLink { href: href.clone() },
                    format!("page.nav_links: '{}' does not point at a section", href),
                )
            })
            .collect();

        (self.nav_links.clone(), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_valid() {
        let page = FilePageConfig::default();
        let (kinds, issues) = page.parse_inputs();
        assert!(issues.is_empty());
        assert_eq!(kinds, InteractionConfig::default().inputs);

        let (outline, issues) = page.parse_outline(NavigationLayout::default());
        assert!(issues.is_empty());
        assert_eq!(outline, PageOutline::portfolio());

        let (links, issues) = page.parse_nav_links(&outline);
        assert!(issues.is_empty());
        assert_eq!(links[0], "#home");
        assert_eq!(links.len(), 5);
    }

    // ==================== Inputs ====================

    #[test]
    fn test_unknown_input_kind_falls_back_to_text() {
        let page = FilePageConfig {
            inputs: vec!["text".into(), "EMAIL".into(), "checkbox".into()],
            ..Default::default()
        };
        let (kinds, issues) = page.parse_inputs();
        assert_eq!(
            kinds,
            vec![InputKind::Text, InputKind::Email, InputKind::Text]
        );
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_form_without_email_is_error() {
        let page = FilePageConfig {
            inputs: vec!["text".into(), "textarea".into()],
            ..Default::default()
        };
        let (_, issues) = page.parse_inputs();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidFormLayout { .. }
        ));
    }

    #[test]
    fn test_form_with_two_emails_is_error() {
        let page = FilePageConfig {
            inputs: vec!["email".into(), "email".into()],
            ..Default::default()
        };
        let (_, issues) = page.parse_inputs();
        assert!(issues.iter().any(|i| i.is_error()));
    }

    // ==================== Sections ====================

    #[test]
    fn test_duplicate_section_is_error() {
        let page = FilePageConfig {
            sections: vec![
                FileSectionConfig {
                    id: "home".into(),
                    top: 0.0,
                    height: 100.0,
                },
                FileSectionConfig {
                    id: "home".into(),
                    top: 100.0,
                    height: 100.0,
                },
            ],
            ..Default::default()
        };
        let (_, issues) = page.parse_outline(NavigationLayout::default());
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidSection { id, .. } if id == "home"
        ));
    }

    #[test]
    fn test_negative_height_is_error() {
        let page = FilePageConfig {
            sections: vec![FileSectionConfig {
                id: "about".into(),
                top: 0.0,
                height: -5.0,
            }],
            ..Default::default()
        };
        let (outline, issues) = page.parse_outline(NavigationLayout::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidSection { id, reason }
                if id == "about" && reason.contains("height -5")
        ));
        assert_eq!(outline, PageOutline::portfolio());
    }

    // ==================== Nav links ====================

    #[test]
    fn test_dangling_nav_link_is_warning() {
        let page = FilePageConfig {
            nav_links: vec!["#about".into(), "#blog".into(), "/cv.pdf".into()],
            ..Default::default()
        };
        let (outline, _) = page.parse_outline(NavigationLayout::default());
        let (links, issues) = page.parse_nav_links(&outline);
        assert_eq!(links.len(), 3);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
    }
}
