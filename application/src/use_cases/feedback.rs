//! Feedback renderer
//!
//! Creates and dismisses transient feedback: inline field errors and the
//! page-level notification. It knows nothing about validation; the contact
//! form controller decides what to show.
//!
//! Both operations are fire-and-forget. A newer artifact of the same kind
//! supersedes the older one: its pending timers are cancelled and it is
//! removed at once, without an exit animation. A timer that still arrives for
//! an artifact that is gone does nothing.

use crate::ports::scheduler::{Scheduler, TimerHandle, TimerTask};
use crate::ports::surface::FeedbackSurface;
use folio_domain::{
    Animation, FieldError, FieldErrorId, FieldId, InteractionTimings, Notification,
    NotificationId, Severity,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

struct Active<T> {
    item: T,
    /// The one pending timer of this artifact (exit, then removal)
    timer: TimerHandle,
}

/// Owns every visible field error and the visible notification.
pub struct FeedbackRenderer {
    surface: Arc<dyn FeedbackSurface>,
    scheduler: Arc<dyn Scheduler>,
    timings: InteractionTimings,
    notification: Option<Active<Notification>>,
    field_errors: BTreeMap<FieldId, Active<FieldError>>,
    next_notification: u64,
    next_field_error: u64,
}

impl FeedbackRenderer {
    pub fn new(
        surface: Arc<dyn FeedbackSurface>,
        scheduler: Arc<dyn Scheduler>,
        timings: InteractionTimings,
    ) -> Self {
        Self {
            surface,
            scheduler,
            timings,
            notification: None,
            field_errors: BTreeMap::new(),
            next_notification: 1,
            next_field_error: 1,
        }
    }

    /// The notification currently in the page
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|a| &a.item)
    }

    /// The error currently attached to `field`
    pub fn field_error(&self, field: FieldId) -> Option<&FieldError> {
        self.field_errors.get(&field).map(|a| &a.item)
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.field_errors.values().map(|a| &a.item)
    }

    pub fn field_error_count(&self) -> usize {
        self.field_errors.len()
    }

    /// Show an inline error under `field`, replacing any error already there.
    pub fn show_field_error(&mut self, field: FieldId, message: impl Into<String>) {
        if let Some(previous) = self.field_errors.remove(&field) {
            self.scheduler.cancel(previous.timer);
            self.surface.detach_field_error(&previous.item);
        }

        let error = FieldError {
            id: FieldErrorId(self.next_field_error),
            field,
            message: message.into(),
        };
        self.next_field_error += 1;

        self.surface.attach_field_error(&error);
        self.surface.animate_field_error(&error, Animation::FadeIn);
        let timer = self.scheduler.schedule(
            self.timings.field_error(),
            TimerTask::FieldErrorExit {
                field,
                error: error.id,
            },
        );
        debug!(field = %field, message = %error.message, "Field error shown");
        self.field_errors.insert(field, Active { item: error, timer });
    }

    /// Show a page-level notification, replacing the current one.
    pub fn show_notification(&mut self, message: impl Into<String>, severity: Severity) {
        self.dismiss_notification();

        let notification = Notification {
            id: NotificationId(self.next_notification),
            message: message.into(),
            severity,
            created_at: self.scheduler.now(),
        };
        self.next_notification += 1;

        self.surface.attach_notification(&notification);
        self.surface
            .animate_notification(&notification, Animation::SlideIn);
        let timer = self.scheduler.schedule(
            self.timings.notification(),
            TimerTask::NotificationExit(notification.id),
        );
        debug!(severity = %severity, message = %notification.message, "Notification shown");
        self.notification = Some(Active {
            item: notification,
            timer,
        });
    }

    /// Remove every field error at once, without exit animations.
    pub fn clear_field_errors(&mut self) {
        for (_, active) in std::mem::take(&mut self.field_errors) {
            self.scheduler.cancel(active.timer);
            self.surface.detach_field_error(&active.item);
        }
    }

    fn dismiss_notification(&mut self) {
        if let Some(previous) = self.notification.take() {
            self.scheduler.cancel(previous.timer);
            self.surface.detach_notification(&previous.item);
        }
    }

    /// Handle a due feedback timer. Returns false for tasks it does not own.
    pub fn on_timer(&mut self, task: &TimerTask) -> bool {
        match *task {
            TimerTask::FieldErrorExit { field, error } => {
                self.field_error_exit(field, error);
                true
            }
            TimerTask::FieldErrorRemove { field, error } => {
                if self
                    .field_errors
                    .get(&field)
                    .is_some_and(|a| a.item.id == error)
                    && let Some(active) = self.field_errors.remove(&field)
                {
                    self.surface.detach_field_error(&active.item);
                } else {
                    debug!(field = %field, "Stale field error removal ignored");
                }
                true
            }
            TimerTask::NotificationExit(id) => {
                self.notification_exit(id);
                true
            }
            TimerTask::NotificationRemove(id) => {
                if self.notification.as_ref().is_some_and(|a| a.item.id == id) {
                    self.dismiss_notification();
                } else {
                    debug!(id = id.0, "Stale notification removal ignored");
                }
                true
            }
            _ => false,
        }
    }

    fn field_error_exit(&mut self, field: FieldId, error: FieldErrorId) {
        let Some(active) = self
            .field_errors
            .get_mut(&field)
            .filter(|a| a.item.id == error)
        else {
            debug!(field = %field, "Stale field error exit ignored");
            return;
        };
        self.surface
            .animate_field_error(&active.item, Animation::FadeOut);
        active.timer = self.scheduler.schedule(
            self.timings.exit_animation(),
            TimerTask::FieldErrorRemove { field, error },
        );
    }

    fn notification_exit(&mut self, id: NotificationId) {
        let Some(active) = self.notification.as_mut().filter(|a| a.item.id == id) else {
            debug!(id = id.0, "Stale notification exit ignored");
            return;
        };
        self.surface
            .animate_notification(&active.item, Animation::SlideOut);
        active.timer = self.scheduler.schedule(
            self.timings.exit_animation(),
            TimerTask::NotificationRemove(id),
        );
    }
}
