//! Contact form controller
//!
//! Drives the submission state machine of the contact form:
//!
//! 1. **Idle**: a submit trigger clears old errors and validates. Failing
//!    fields get a field error, the page gets an error notification, and the
//!    machine stays idle.
//! 2. **Submitting**: the control is disabled and shows the sending label
//!    until the simulated send completes.
//! 3. **Succeeded**: the control shows the sent label, a success notification
//!    appears and the fields are cleared. After the reset delay the control is
//!    re-enabled and the machine is idle again.
//!
//! The disabled control during `Submitting` is the only mutual exclusion:
//! triggers outside `Idle` are ignored.

use crate::ports::interaction_logger::{InteractionLogger, InteractionRecord, NoInteractionLog};
use crate::ports::scheduler::{Scheduler, TimerTask};
use crate::ports::surface::{FeedbackSurface, FormSurface, SubmitControl, SubmitStyle};
use crate::use_cases::feedback::FeedbackRenderer;
use folio_domain::{
    ContactForm, DomainError, FieldId, FormCopy, InteractionTimings, Key, Severity,
    SubmissionStatus, ValidationReport,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a submit trigger led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The control is disabled; nothing happened
    Ignored(SubmissionStatus),
    /// Validation failed; the machine stays idle
    Rejected(ValidationReport),
    /// Validation passed; the simulated send is running
    Submitting,
}

/// Owns the contact form and its submission lifecycle.
pub struct ContactFormController {
    form: ContactForm,
    status: SubmissionStatus,
    control: SubmitControl,
    copy: FormCopy,
    timings: InteractionTimings,
    surface: Arc<dyn FormSurface>,
    scheduler: Arc<dyn Scheduler>,
    feedback: FeedbackRenderer,
    logger: Arc<dyn InteractionLogger>,
}

impl ContactFormController {
    pub fn new(
        form: ContactForm,
        copy: FormCopy,
        timings: InteractionTimings,
        surface: Arc<dyn FormSurface>,
        feedback_surface: Arc<dyn FeedbackSurface>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            form,
            status: SubmissionStatus::Idle,
            control: SubmitControl::idle(copy.label_idle.clone()),
            copy,
            timings,
            surface,
            feedback: FeedbackRenderer::new(feedback_surface, scheduler.clone(), timings),
            scheduler,
            logger: Arc::new(NoInteractionLog),
        }
    }

    /// Record submissions through an interaction logger
    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn feedback(&self) -> &FeedbackRenderer {
        &self.feedback
    }

    /// Draw every field and the submit control in their current state
    pub fn mount(&self) {
        for field in self.form.fields() {
            self.surface.render_field(field);
        }
        self.surface.render_submit(&self.control);
    }

    // ==================== Field events ====================

    pub fn focus(&mut self, id: FieldId) -> Result<(), DomainError> {
        let field = self.form.field_mut(id)?;
        field.focused = true;
        self.surface.render_field(field);
        Ok(())
    }

    /// Blur a field; a non-empty value clears its stale error coloring
    pub fn blur(&mut self, id: FieldId) -> Result<(), DomainError> {
        let field = self.form.field_mut(id)?;
        field.focused = false;
        if !field.is_blank() {
            field.invalid = false;
        }
        self.surface.render_field(field);
        Ok(())
    }

    /// Replace a field's value; typing clears its error coloring
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), DomainError> {
        let field = self.form.field_mut(id)?;
        field.value = value.into();
        field.invalid = false;
        self.surface.render_field(field);
        Ok(())
    }

    /// Enter in the last field submits; other keys are not the form's concern
    pub fn key_pressed(&mut self, field: Option<FieldId>, key: Key) -> Option<SubmitOutcome> {
        match (key, field) {
            (Key::Enter, Some(id)) if id == self.form.last_field() => Some(self.submit()),
            _ => None,
        }
    }

    // ==================== Submission ====================

    /// Validate and, when everything passes, start the simulated send.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.status.accepts_submit() {
            debug!(status = %self.status, "Submit ignored while control is disabled");
            return SubmitOutcome::Ignored(self.status);
        }

        self.feedback.clear_field_errors();
        self.form.clear_error_flags();

        let report = self.form.validate();
        if !report.is_clean() {
            self.reject(&report);
            return SubmitOutcome::Rejected(report);
        }

        match self.status.begin() {
            Ok(next) => self.status = next,
            Err(e) => {
                warn!("{}", e);
                return SubmitOutcome::Ignored(self.status);
            }
        }

        for field in self.form.fields() {
            self.surface.render_field(field);
        }
        self.set_control(false, self.copy.label_sending.clone(), SubmitStyle::Pressed);
        self.scheduler
            .schedule(self.timings.submit_delay(), TimerTask::SubmissionSettled);

        info!("Contact form submitted");
        self.logger.log(InteractionRecord::SubmissionStarted {
            fields: self.form.len(),
        });
        SubmitOutcome::Submitting
    }

    fn reject(&mut self, report: &ValidationReport) {
        for issue in &report.issues {
            if let Ok(field) = self.form.field_mut(issue.field) {
                field.invalid = true;
            }
            let message = self.copy.issue_message(issue.kind).to_string();
            self.feedback.show_field_error(issue.field, message);
        }
        for field in self.form.fields() {
            self.surface.render_field(field);
        }
        self.feedback
            .show_notification(self.copy.rejected.clone(), Severity::Error);

        info!(issues = report.issues.len(), "Contact form rejected");
        self.logger.log(InteractionRecord::SubmissionRejected {
            issues: report.issues.clone(),
        });
    }

    /// Handle a due form or feedback timer. Returns false for tasks it does not own.
    pub fn on_timer(&mut self, task: &TimerTask) -> bool {
        match task {
            TimerTask::SubmissionSettled => {
                self.settle();
                true
            }
            TimerTask::SubmitControlReset => {
                self.reset();
                true
            }
            other => self.feedback.on_timer(other),
        }
    }

    fn settle(&mut self) {
        match self.status.settle() {
            Ok(next) => self.status = next,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        }

        self.set_control(false, self.copy.label_sent.clone(), SubmitStyle::Success);
        self.feedback
            .show_notification(self.copy.sent.clone(), Severity::Success);
        self.form.clear_values();
        for field in self.form.fields() {
            self.surface.render_field(field);
        }
        self.scheduler
            .schedule(self.timings.reset_delay(), TimerTask::SubmitControlReset);

        info!("Contact form sent");
        self.logger.log(InteractionRecord::SubmissionSucceeded {
            at_ms: self.scheduler.now().as_millis() as u64,
        });
    }

    fn reset(&mut self) {
        match self.status.reset() {
            Ok(next) => self.status = next,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        }
        self.set_control(true, self.copy.label_idle.clone(), SubmitStyle::Normal);
        debug!("Submit control reset");
    }

    fn set_control(&mut self, enabled: bool, label: String, style: SubmitStyle) {
        self.control = SubmitControl {
            enabled,
            label,
            style,
        };
        self.surface.render_submit(&self.control);
    }
}
