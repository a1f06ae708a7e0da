//! Shared test doubles for the use case tests.

use crate::ports::interaction_logger::{InteractionLogger, InteractionRecord};
use crate::ports::surface::{FeedbackSurface, FormSurface, PageSurface, SubmitControl};
use folio_domain::{
    Animation, Field, FieldError, FieldId, Notification, NotificationId, TileId, TileVisual,
};
use std::sync::Mutex;

/// One call made on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    AttachFieldError(FieldError),
    AnimateFieldError(FieldId, Animation),
    DetachFieldError(FieldError),
    AttachNotification(Notification),
    AnimateNotification(NotificationId, Animation),
    DetachNotification(NotificationId),
    RenderField(Field),
    RenderSubmit(SubmitControl),
    RenderMenu { open: bool, scroll_locked: bool },
    ScrollTo(f64),
    HighlightLink(Option<String>),
    RenderTile(TileId, TileVisual),
}

/// Surface that records every call and tracks which artifacts are mounted.
#[derive(Default)]
pub struct RecordingSurface {
    calls: Mutex<Vec<SurfaceCall>>,
    notifications: Mutex<Vec<NotificationId>>,
    field_errors: Mutex<Vec<FieldError>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Notifications currently in the page
    pub fn mounted_notifications(&self) -> Vec<NotificationId> {
        self.notifications.lock().unwrap().clone()
    }

    /// Field errors currently in the page
    pub fn mounted_field_errors(&self) -> Vec<FieldError> {
        self.field_errors.lock().unwrap().clone()
    }

    pub fn last_submit(&self) -> Option<SubmitControl> {
        self.calls().into_iter().rev().find_map(|c| match c {
            SurfaceCall::RenderSubmit(control) => Some(control),
            _ => None,
        })
    }

    pub fn last_field(&self, id: FieldId) -> Option<Field> {
        self.calls().into_iter().rev().find_map(|c| match c {
            SurfaceCall::RenderField(field) if field.id == id => Some(field),
            _ => None,
        })
    }

    pub fn last_tile(&self, tile: TileId) -> Option<TileVisual> {
        self.calls().into_iter().rev().find_map(|c| match c {
            SurfaceCall::RenderTile(t, visual) if t == tile => Some(visual),
            _ => None,
        })
    }

    fn push(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl FeedbackSurface for RecordingSurface {
    fn attach_field_error(&self, error: &FieldError) {
        self.field_errors.lock().unwrap().push(error.clone());
        self.push(SurfaceCall::AttachFieldError(error.clone()));
    }

    fn animate_field_error(&self, error: &FieldError, animation: Animation) {
        self.push(SurfaceCall::AnimateFieldError(error.field, animation));
    }

    fn detach_field_error(&self, error: &FieldError) {
        self.field_errors.lock().unwrap().retain(|e| e.id != error.id);
        self.push(SurfaceCall::DetachFieldError(error.clone()));
    }

    fn attach_notification(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.id);
        self.push(SurfaceCall::AttachNotification(notification.clone()));
    }

    fn animate_notification(&self, notification: &Notification, animation: Animation) {
        self.push(SurfaceCall::AnimateNotification(notification.id, animation));
    }

    fn detach_notification(&self, notification: &Notification) {
        self.notifications
            .lock()
            .unwrap()
            .retain(|id| *id != notification.id);
        self.push(SurfaceCall::DetachNotification(notification.id));
    }
}

impl FormSurface for RecordingSurface {
    fn render_field(&self, field: &Field) {
        self.push(SurfaceCall::RenderField(field.clone()));
    }

    fn render_submit(&self, control: &SubmitControl) {
        self.push(SurfaceCall::RenderSubmit(control.clone()));
    }
}

impl PageSurface for RecordingSurface {
    fn render_menu(&self, open: bool, scroll_locked: bool) {
        self.push(SurfaceCall::RenderMenu {
            open,
            scroll_locked,
        });
    }

    fn scroll_to(&self, offset: f64) {
        self.push(SurfaceCall::ScrollTo(offset));
    }

    fn highlight_link(&self, href: Option<&str>) {
        self.push(SurfaceCall::HighlightLink(href.map(str::to_string)));
    }

    fn render_tile(&self, tile: TileId, visual: &TileVisual) {
        self.push(SurfaceCall::RenderTile(tile, *visual));
    }
}

/// Logger that keeps records in memory
#[derive(Default)]
pub struct RecordingLogger {
    pub records: Mutex<Vec<InteractionRecord>>,
}

impl RecordingLogger {
    pub fn types(&self) -> Vec<&'static str> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(InteractionRecord::record_type)
            .collect()
    }

    pub fn records(&self) -> Vec<InteractionRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl InteractionLogger for RecordingLogger {
    fn log(&self, record: InteractionRecord) {
        self.records.lock().unwrap().push(record);
    }
}
