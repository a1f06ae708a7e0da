//! Section geometry, anchor navigation and scroll spy.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A page section that anchors and the scroll spy can target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Offset of the section from the top of the document, in px
    pub top: f64,
    /// Rendered height in px
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// True when `y` lies within `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// The nav link href that points at this section
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// What an anchor click resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorTarget {
    /// Bare `#`: nothing to do
    Ignore,
    /// No section with that id; the default behavior applies
    NotFound,
    /// Scroll the window so the section clears the fixed header
    ScrollTo { section: String, offset: f64 },
}

/// Layout constants for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationLayout {
    /// Height of the fixed header subtracted from anchor targets
    pub header_offset: f64,
    /// Distance below the viewport top used to pick the active section
    pub scroll_spy_offset: f64,
}

impl Default for NavigationLayout {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_spy_offset: 100.0,
        }
    }
}

/// Sections of the page, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageOutline {
    sections: Vec<Section>,
    layout: NavigationLayout,
}

impl PageOutline {
    pub fn new(sections: Vec<Section>, layout: NavigationLayout) -> Result<Self, DomainError> {
        for section in &sections {
            if section.id.is_empty() {
                return Err(DomainError::InvalidSection {
                    id: String::new(),
                    reason: "empty section id".to_string(),
                });
            }
            if section.height.is_nan() || section.height < 0.0 || !section.top.is_finite() {
                return Err(DomainError::InvalidSection {
                    id: section.id.clone(),
                    reason: format!("top {} height {}", section.top, section.height),
                });
            }
        }
        Ok(Self { sections, layout })
    }

    /// Section layout of the portfolio page the layer was written for
    pub fn portfolio() -> Self {
        Self {
            sections: vec![
                Section::new("home", 0.0, 700.0),
                Section::new("about", 700.0, 600.0),
                Section::new("skills", 1300.0, 800.0),
                Section::new("projects", 2100.0, 900.0),
                Section::new("contact", 3000.0, 700.0),
            ],
            layout: NavigationLayout::default(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn layout(&self) -> &NavigationLayout {
        &self.layout
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Resolve an anchor href such as `#about`
    pub fn resolve_anchor(&self, href: &str) -> AnchorTarget {
        if href == "#" {
            return AnchorTarget::Ignore;
        }
        let Some(id) = href.strip_prefix('#') else {
            return AnchorTarget::NotFound;
        };
        match self.section(id) {
            Some(section) => AnchorTarget::ScrollTo {
                section: section.id.clone(),
                offset: section.top - self.layout.header_offset,
            },
            None => AnchorTarget::NotFound,
        }
    }

    /// Section under the scroll marker for a window scrolled to `scroll_y`.
    ///
    /// When sections overlap the last one in document order wins.
    pub fn active_section(&self, scroll_y: f64) -> Option<&Section> {
        let marker = scroll_y + self.layout.scroll_spy_offset;
        self.sections.iter().rev().find(|s| s.contains(marker))
    }
}
