//! Site dispatcher
//!
//! Wires the contact form controller and the page controller to one shared
//! [`TimerQueue`] and routes [`UiEvent`]s and due timers to their owner.
//! Everything runs to completion on the caller's thread; the only suspension
//! points are the timers, and they only fire when the host advances time.

use crate::config::InteractionConfig;
use crate::ports::interaction_logger::InteractionLogger;
use crate::ports::scheduler::{Scheduler, TimerTask};
use crate::ports::surface::{FeedbackSurface, FormSurface, PageSurface};
use crate::scheduling::TimerQueue;
use crate::use_cases::contact_form::{ContactFormController, SubmitOutcome};
use crate::use_cases::page::PageController;
use folio_domain::{AnchorTarget, ContactForm, DomainError, Key, SubmissionStatus, UiEvent};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while building or driving the site
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SiteError {
    #[error("Page layout cannot host the contact form: {0}")]
    Layout(DomainError),

    #[error("Event rejected: {0}")]
    Event(#[from] DomainError),
}

/// What handling one event led to.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Handled,
    Submit(SubmitOutcome),
    Anchor(AnchorTarget),
    /// The event had no effect (e.g. Enter outside the last field)
    Ignored,
}

pub struct Site {
    timers: Arc<TimerQueue>,
    form: ContactFormController,
    page: PageController,
}

impl Site {
    /// Build the site over one surface that renders everything.
    pub fn new<S>(config: &InteractionConfig, surface: Arc<S>) -> Result<Self, SiteError>
    where
        S: FeedbackSurface + FormSurface + PageSurface + 'static,
    {
        let form = ContactForm::from_inputs(&config.inputs).map_err(SiteError::Layout)?;
        let timers = Arc::new(TimerQueue::new());
        let scheduler: Arc<dyn Scheduler> = timers.clone();

        let form = ContactFormController::new(
            form,
            config.copy.clone(),
            config.timings,
            surface.clone(),
            surface.clone(),
            scheduler.clone(),
        );
        let page = PageController::new(config, surface, scheduler);

        Ok(Self { timers, form, page })
    }

    /// Record submissions through an interaction logger
    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.form = self.form.with_logger(logger);
        self
    }

    pub fn form(&self) -> &ContactFormController {
        &self.form
    }

    pub fn page(&self) -> &PageController {
        &self.page
    }

    pub fn status(&self) -> SubmissionStatus {
        self.form.status()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Draw the initial state of every element
    pub fn mount(&self) {
        self.form.mount();
        self.page.mount();
    }

    /// Handle one user interface event.
    pub fn handle(&mut self, event: UiEvent) -> Result<EventOutcome, SiteError> {
        trace!(?event, "Handling event");
        let outcome = match event {
            UiEvent::FieldFocused(id) => {
                self.form.focus(id)?;
                EventOutcome::Handled
            }
            UiEvent::FieldBlurred(id) => {
                self.form.blur(id)?;
                EventOutcome::Handled
            }
            UiEvent::FieldInput { field, value } => {
                self.form.input(field, value)?;
                EventOutcome::Handled
            }
            UiEvent::KeyPressed { field, key } => {
                if key == Key::Escape {
                    self.page.key_pressed(key);
                }
                match self.form.key_pressed(field, key) {
                    Some(outcome) => EventOutcome::Submit(outcome),
                    None if key == Key::Escape => EventOutcome::Handled,
                    None => EventOutcome::Ignored,
                }
            }
            UiEvent::SubmitClicked => EventOutcome::Submit(self.form.submit()),
            UiEvent::MenuButtonClicked => {
                self.page.toggle_menu();
                EventOutcome::Handled
            }
            UiEvent::OverlayClicked => {
                self.page.close_menu();
                EventOutcome::Handled
            }
            UiEvent::NavLinkClicked { href } => {
                EventOutcome::Anchor(self.page.nav_link_clicked(&href))
            }
            UiEvent::AnchorClicked { href } => EventOutcome::Anchor(self.page.anchor_clicked(&href)),
            UiEvent::Scrolled { y } => {
                self.page.scrolled(y);
                EventOutcome::Handled
            }
            UiEvent::TileEntered(id) => {
                self.page.tile_entered(id)?;
                EventOutcome::Handled
            }
            UiEvent::TileLeft(id) => {
                self.page.tile_left(id)?;
                EventOutcome::Handled
            }
            UiEvent::TileClicked(id) => {
                self.page.tile_clicked(id)?;
                EventOutcome::Handled
            }
        };
        Ok(outcome)
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Returns the number of timers fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(task) = self.timers.pop_due(now) {
            self.dispatch_timer(task);
            fired += 1;
        }
        self.timers.settle(now);
        fired
    }

    pub fn advance_by(&mut self, delta: Duration) -> usize {
        let target = self.timers.now() + delta;
        self.advance_to(target)
    }

    /// Fire timers until none are pending
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.timers.next_deadline() {
            fired += self.advance_to(deadline);
        }
        fired
    }

    fn dispatch_timer(&mut self, task: TimerTask) {
        debug!(?task, at_ms = self.timers.now().as_millis() as u64, "Timer fired");
        let handled = if task.is_form_task() {
            self.form.on_timer(&task)
        } else {
            self.page.on_timer(&task)
        };
        if !handled {
            debug!(?task, "Timer had no owner");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, SurfaceCall};
    use folio_domain::{FieldId, InputKind, Severity, TileId};

    fn site() -> (Site, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::new());
        let site = Site::new(&InteractionConfig::default(), surface.clone()).unwrap();
        (site, surface)
    }

    fn type_into(site: &mut Site, field: usize, value: &str) {
        site.handle(UiEvent::FieldInput {
            field: FieldId(field),
            value: value.to_string(),
        })
        .unwrap();
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ==================== Construction ====================

    #[test]
    fn test_missing_email_field_is_a_layout_error() {
        let config =
            InteractionConfig::default().with_inputs(vec![InputKind::Text, InputKind::Text]);
        let err = Site::new(&config, Arc::new(RecordingSurface::new())).err();
        assert_eq!(err, Some(SiteError::Layout(DomainError::MissingEmailField)));
    }

    #[test]
    fn test_mount_renders_fields_and_control() {
        let (site, surface) = site();
        site.mount();
        let calls = surface.calls();
        let fields = calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::RenderField(_)))
            .count();
        assert_eq!(fields, 3);
        assert_eq!(surface.last_submit().unwrap().label, "Send message");
        assert!(calls.contains(&SurfaceCall::RenderMenu {
            open: false,
            scroll_locked: false
        }));
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_full_submission_scenario() {
        let (mut site, surface) = site();
        type_into(&mut site, 0, "Bob");
        type_into(&mut site, 1, "bob@x.com");
        type_into(&mut site, 2, "hello");

        let outcome = site.handle(UiEvent::SubmitClicked).unwrap();
        assert_eq!(outcome, EventOutcome::Submit(SubmitOutcome::Submitting));

        site.advance_by(ms(1500));
        assert_eq!(site.status(), SubmissionStatus::Succeeded);
        assert_eq!(
            site.form().feedback().notification().unwrap().severity,
            Severity::Success
        );
        assert!(site.form().form().fields().iter().all(|f| f.value.is_empty()));

        site.advance_by(ms(2000));
        assert_eq!(site.status(), SubmissionStatus::Idle);
        assert!(surface.last_submit().unwrap().enabled);

        // Notification exits at 5.5 s and is removed at 5.8 s
        site.run_until_idle();
        assert_eq!(site.now(), ms(5800));
        assert!(surface.mounted_notifications().is_empty());
    }

    #[test]
    fn test_rapid_submits_only_send_once() {
        let (mut site, surface) = site();
        type_into(&mut site, 0, "Bob");
        type_into(&mut site, 1, "bob@x.com");
        type_into(&mut site, 2, "hello");

        site.handle(UiEvent::SubmitClicked).unwrap();
        for _ in 0..5 {
            let outcome = site.handle(UiEvent::SubmitClicked).unwrap();
            assert_eq!(
                outcome,
                EventOutcome::Submit(SubmitOutcome::Ignored(SubmissionStatus::Submitting))
            );
        }
        site.run_until_idle();
        let successes = surface
            .calls()
            .iter()
            .filter(|c| {
                matches!(c, SurfaceCall::AttachNotification(n) if n.severity == Severity::Success)
            })
            .count();
        assert_eq!(successes, 1);
    }

    #[test]
    fn test_enter_in_message_field_submits() {
        let (mut site, _) = site();
        type_into(&mut site, 0, "Bob");
        type_into(&mut site, 1, "bob@x.com");
        type_into(&mut site, 2, "hello");

        let outcome = site
            .handle(UiEvent::KeyPressed {
                field: Some(FieldId(2)),
                key: Key::Enter,
            })
            .unwrap();
        assert_eq!(outcome, EventOutcome::Submit(SubmitOutcome::Submitting));
    }

    #[test]
    fn test_escape_closes_menu_even_from_a_field() {
        let (mut site, _) = site();
        site.handle(UiEvent::MenuButtonClicked).unwrap();
        let outcome = site
            .handle(UiEvent::KeyPressed {
                field: Some(FieldId(0)),
                key: Key::Escape,
            })
            .unwrap();
        assert_eq!(outcome, EventOutcome::Handled);
        assert!(!site.page().menu().is_open());
    }

    #[test]
    fn test_only_one_notification_in_page() {
        let (mut site, surface) = site();
        site.handle(UiEvent::SubmitClicked).unwrap();
        site.advance_by(ms(100));
        site.handle(UiEvent::SubmitClicked).unwrap();
        assert_eq!(surface.mounted_notifications().len(), 1);
    }

    #[test]
    fn test_field_errors_expire_while_notification_remains() {
        let (mut site, surface) = site();
        site.handle(UiEvent::SubmitClicked).unwrap();
        assert_eq!(surface.mounted_field_errors().len(), 3);

        site.advance_to(ms(3300));
        assert!(surface.mounted_field_errors().is_empty());
        assert_eq!(surface.mounted_notifications().len(), 1);

        site.advance_to(ms(4300));
        assert!(surface.mounted_notifications().is_empty());
    }

    #[test]
    fn test_unknown_field_is_an_event_error() {
        let (mut site, _) = site();
        let err = site.handle(UiEvent::FieldFocused(FieldId(10))).unwrap_err();
        assert_eq!(err, SiteError::Event(DomainError::UnknownField(FieldId(10))));
    }

    #[test]
    fn test_tile_press_is_released_by_timer() {
        let (mut site, _) = site();
        site.handle(UiEvent::TileClicked(TileId::skill(0))).unwrap();
        assert!(site.page().tile_state(TileId::skill(0)).unwrap().pressed);
        assert_eq!(site.advance_by(ms(200)), 1);
        assert!(!site.page().tile_state(TileId::skill(0)).unwrap().pressed);
    }

    #[test]
    fn test_anchor_event() {
        let (mut site, _) = site();
        let outcome = site
            .handle(UiEvent::AnchorClicked {
                href: "#contact".to_string(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            EventOutcome::Anchor(AnchorTarget::ScrollTo {
                section: "contact".to_string(),
                offset: 2920.0
            })
        );
    }
}
