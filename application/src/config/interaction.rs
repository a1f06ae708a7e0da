//! Interaction configuration container.

use folio_domain::{FormCopy, InputKind, InteractionTimings, PageOutline};

/// Configuration for the whole interaction layer.
///
/// Built from defaults or from a parsed config file; the controllers read
/// it once at construction and never mutate it.
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    pub timings: InteractionTimings,
    pub copy: FormCopy,
    /// Markup types of the contact form inputs, in page order
    pub inputs: Vec<InputKind>,
    pub outline: PageOutline,
    /// Hrefs of the links in the navigation list
    pub nav_links: Vec<String>,
    /// Skill tile labels, in page order
    pub skills: Vec<String>,
    /// Project names, in page order; used when a project button is clicked
    pub projects: Vec<String>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        let outline = PageOutline::portfolio();
        let nav_links = outline.sections().iter().map(|s| s.href()).collect();
        Self {
            timings: InteractionTimings::default(),
            copy: FormCopy::default(),
            inputs: vec![InputKind::Text, InputKind::Email, InputKind::Text],
            outline,
            nav_links,
            skills: ["HTML", "CSS", "JavaScript", "React", "Node.js", "Git"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects: ["Portfolio Website", "Weather App", "Task Manager"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl InteractionConfig {
    pub fn with_timings(mut self, timings: InteractionTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_copy(mut self, copy: FormCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<InputKind>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outline(mut self, outline: PageOutline) -> Self {
        self.outline = outline;
        self
    }

    /// Name shown for a project button; "Project" when the page has no name for it
    pub fn project_name(&self, index: usize) -> &str {
        self.projects
            .get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or("Project")
    }
}
