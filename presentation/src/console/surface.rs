//! Console rendering of the page
//!
//! [`ConsoleSurface`] implements every surface port by printing one line per
//! visual change, so a terminal session shows what a browser would animate.

use colored::Colorize;
use folio_application::{
    FeedbackSurface, FormSurface, PageSurface, SubmitControl, SubmitStyle,
};
use folio_domain::{Animation, Field, FieldError, Notification, Severity, TileId, TileVisual, Tint};
use std::io::Write;
use std::sync::Mutex;

/// Writes every surface call as a line of terminal output.
pub struct ConsoleSurface {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSurface {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Print one line; output errors are dropped
    pub fn line(&self, text: impl AsRef<str>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text.as_ref());
            let _ = out.flush();
        }
    }
}

fn animation_name(animation: Animation) -> &'static str {
    match animation {
        Animation::FadeIn => "fade in",
        Animation::FadeOut => "fade out",
        Animation::SlideIn => "slide in",
        Animation::SlideOut => "slide out",
    }
}

fn tint_name(tint: Tint) -> &'static str {
    match tint {
        Tint::Base => "base",
        Tint::Highlight => "highlight",
        Tint::Pressed => "pressed",
    }
}

impl FeedbackSurface for ConsoleSurface {
    fn attach_field_error(&self, error: &FieldError) {
        self.line(format!(
            "  {} field {}: {}",
            "✗".red().bold(),
            error.field,
            error.message.red()
        ));
    }

    fn animate_field_error(&self, error: &FieldError, animation: Animation) {
        self.line(
            format!("    field {} error {}", error.field, animation_name(animation))
                .dimmed()
                .to_string(),
        );
    }

    fn detach_field_error(&self, error: &FieldError) {
        self.line(
            format!("    field {} error removed", error.field)
                .dimmed()
                .to_string(),
        );
    }

    fn attach_notification(&self, notification: &Notification) {
        let tag = format!("[{}]", notification.severity);
        let tag = match notification.severity {
            Severity::Success => tag.green().bold(),
            Severity::Error => tag.red().bold(),
            Severity::Info => tag.blue().bold(),
        };
        self.line(format!("{} {}", tag, notification.message));
    }

    fn animate_notification(&self, notification: &Notification, animation: Animation) {
        self.line(
            format!(
                "    {} notification {}",
                notification.severity,
                animation_name(animation)
            )
            .dimmed()
            .to_string(),
        );
    }

    fn detach_notification(&self, notification: &Notification) {
        self.line(
            format!("    {} notification removed", notification.severity)
                .dimmed()
                .to_string(),
        );
    }
}

impl FormSurface for ConsoleSurface {
    fn render_field(&self, field: &Field) {
        let mut flags = String::new();
        if field.focused {
            flags.push_str(" [focused]");
        }
        if field.invalid {
            flags.push_str(" [invalid]");
        }
        self.line(format!(
            "  field {} {} = {:?}{}",
            field.id,
            field.role.to_string().cyan(),
            field.value,
            flags
        ));
    }

    fn render_submit(&self, control: &SubmitControl) {
        let label = match control.style {
            SubmitStyle::Normal => control.label.normal(),
            SubmitStyle::Pressed => control.label.yellow(),
            SubmitStyle::Success => control.label.green(),
        };
        let state = if control.enabled { "enabled" } else { "disabled" };
        self.line(format!("  submit [{}] {}", label, state.dimmed()));
    }
}

impl PageSurface for ConsoleSurface {
    fn render_menu(&self, open: bool, scroll_locked: bool) {
        let text = match (open, scroll_locked) {
            (true, true) => "menu open, scroll locked",
            (true, false) => "menu open",
            (false, _) => "menu closed",
        };
        self.line(format!("  {}", text.magenta()));
    }

    fn scroll_to(&self, offset: f64) {
        self.line(format!("  scroll to {}px", offset));
    }

    fn highlight_link(&self, href: Option<&str>) {
        match href {
            Some(href) => self.line(format!("  nav {} active", href.cyan().bold())),
            None => self.line("  nav highlight cleared".to_string()),
        }
    }

    fn render_tile(&self, tile: TileId, visual: &TileVisual) {
        self.line(format!(
            "  {} lift {}px scale {} tint {}",
            tile,
            visual.lift,
            visual.scale,
            tint_name(visual.tint)
        ));
    }
}
