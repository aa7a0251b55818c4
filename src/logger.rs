//! The gesture logger itself.
//!
//! [`GestureLogger`] owns all interaction state — the [`GestureSession`], the
//! [`VisualMarker`], the color [`Palette`], and the [`SinkBus`] — and exposes one
//! handler per event kind. Handlers are total: an identifier with no tracked
//! origin or an empty batch degrades to a skipped line or a fallback message,
//! never an error. Event delivery is strictly serialized by the host, so no
//! handler ever observes another mid-mutation.

use crate::config::Palette;
use crate::event::{Contact, InputEvent, InputKind, Point};
use crate::marker::VisualMarker;
use crate::session::GestureSession;
use crate::sink::{Category, LogRecord, LogSink, RecordFilter, SinkBus};
use std::time::Instant;

/// What the host should do with its native default handling after an event.
///
/// Touch move sequences must suppress the native default (scroll/zoom would
/// fight the gesture); everything else leaves it alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultPolicy {
    Allow,
    Prevent,
}

/// Tracks contacts, derives motion metrics, and reports them as log lines and
/// marker updates.
pub struct GestureLogger {
    session: GestureSession,
    marker: VisualMarker,
    palette: Palette,
    sinks: SinkBus,
}

impl Default for GestureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureLogger {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            session: GestureSession::new(),
            marker: VisualMarker::new(palette.idle.clone()),
            palette,
            sinks: SinkBus::new(),
        }
    }

    /// Registers a log sink, returning its handle.
    pub fn add_sink(&mut self, sink: impl LogSink + 'static, filter: RecordFilter) -> u64 {
        self.sinks.add_sink(sink, filter)
    }

    /// The sink registry, for enable/disable/remove by handle.
    pub fn sinks_mut(&mut self) -> &mut SinkBus {
        &mut self.sinks
    }

    /// Current marker position and color.
    pub fn marker(&self) -> &VisualMarker {
        &self.marker
    }

    /// Current gesture tracking state (read-only).
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Routes one timestamped event to its handler.
    pub fn dispatch(&mut self, event: &InputEvent) -> DefaultPolicy {
        match &event.kind {
            InputKind::TouchStart(contacts) => self.on_touch_start(event.at, contacts),
            InputKind::TouchMove(contacts) => return self.on_touch_move(contacts),
            InputKind::TouchEnd(contacts) => self.on_touch_end(event.at, contacts),
            InputKind::TouchCancel => self.on_touch_cancel(),
            InputKind::PointerDown(p) => self.on_pointer_down(*p),
            InputKind::PointerMove(p) => self.on_pointer_move(*p),
            InputKind::PointerUp(p) => self.on_pointer_up(*p),
            InputKind::PointerCancel => self.on_pointer_cancel(),
        }
        DefaultPolicy::Allow
    }

    /// Begins a new gesture: all prior tracking state is replaced.
    pub fn on_touch_start(&mut self, at: Instant, contacts: &[Contact]) {
        self.session.begin(at, contacts);
        self.log(Category::Touch, "Touch start detected");
        if let Some(primary) = contacts.first() {
            let color = self.palette.touch_start.clone();
            self.marker.move_to(primary.x, primary.y, &color);
        }
    }

    /// Reports per-contact displacement and, with exactly two contacts, the
    /// pinch/rotate change versus the last recorded pair.
    pub fn on_touch_move(&mut self, contacts: &[Contact]) -> DefaultPolicy {
        let mut lines = 0;
        for contact in contacts {
            if let Some((dx, dy)) = self.session.displacement(contact) {
                self.log(
                    Category::Touch,
                    format!("Touch ID {}: Moved ({}px, {}px)", contact.id, dx, dy),
                );
                lines += 1;
            }
        }

        if let Some(delta) = self.session.update_pair(contacts) {
            self.log(
                Category::Gesture,
                format!("Pinch Zoom: {:.2} px", delta.zoom),
            );
            self.log(
                Category::Gesture,
                format!("Rotation: {:.2} degrees", delta.rotation),
            );
        }

        if lines == 0 {
            self.log(Category::Touch, "Touch move detected");
        }
        DefaultPolicy::Prevent
    }

    /// Reports displacement and duration for each ended contact and drops it
    /// from tracking. Pair metrics reset regardless of how many contacts remain.
    pub fn on_touch_end(&mut self, at: Instant, ended: &[Contact]) {
        let mut lines = 0;
        for contact in ended {
            if let Some(origin) = self.session.end_contact(contact.id) {
                let duration_ms = at.duration_since(origin.at).as_millis();
                self.log(
                    Category::Touch,
                    format!(
                        "Touch ID {}: Ended ({}px, {}px), Duration: {} ms",
                        contact.id,
                        contact.x - origin.x,
                        contact.y - origin.y,
                        duration_ms
                    ),
                );
                lines += 1;
            }
        }
        if lines == 0 {
            self.log(Category::Touch, "Touch end detected");
        }
        if let Some(first) = ended.first() {
            let color = self.palette.touch_end.clone();
            self.marker.move_to(first.x, first.y, &color);
        }
        self.session.reset_pair();
    }

    /// Aborts the gesture: the tracking set is discarded so a reused identifier
    /// can never inherit a stale origin. Safe to call any number of times.
    pub fn on_touch_cancel(&mut self) {
        self.log(Category::Touch, "Touch canceled");
        let color = self.palette.touch_cancel.clone();
        self.marker.reset(&color);
        self.session.clear();
    }

    pub fn on_pointer_down(&mut self, point: Point) {
        self.log(
            Category::Pointer,
            format!("Pointer down detected at ({}, {})", point.x, point.y),
        );
        let color = self.palette.pointer_down.clone();
        self.marker.move_to(point.x, point.y, &color);
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        self.log(
            Category::Pointer,
            format!("Pointer move detected at ({}, {})", point.x, point.y),
        );
        let color = self.palette.pointer_move.clone();
        self.marker.move_to(point.x, point.y, &color);
    }

    pub fn on_pointer_up(&mut self, point: Point) {
        self.log(
            Category::Pointer,
            format!("Pointer up detected at ({}, {})", point.x, point.y),
        );
        let color = self.palette.pointer_up.clone();
        self.marker.move_to(point.x, point.y, &color);
    }

    pub fn on_pointer_cancel(&mut self) {
        self.log(Category::Pointer, "Pointer canceled");
        let color = self.palette.pointer_cancel.clone();
        self.marker.reset(&color);
    }

    fn log(&mut self, category: Category, message: impl Into<String>) {
        self.sinks.publish(&LogRecord::new(category, message));
    }
}
