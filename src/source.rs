//! Event sources.
//!
//! An [`EventSource`] is anything that can hand over a batch of queued input
//! events: a platform binding, a replay file, a scripted test feed. Sources are
//! polled; delivery into the logger stays strictly serialized.

use crate::event::{Contact, InputEvent, InputKind, Point};
use crate::logger::GestureLogger;

/// A pollable queue of input events.
pub trait EventSource {
    /// Drains and returns all events queued since the last poll.
    fn poll(&mut self) -> Vec<InputEvent>;
    fn id(&self) -> &str;
}

/// An in-memory source fed by hand, for demos and replay harnesses.
#[derive(Default)]
pub struct ScriptedSource {
    id: String,
    events: Vec<InputEvent>,
}

impl ScriptedSource {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            events: Vec::new(),
        }
    }

    /// Queues a raw input event.
    pub fn feed(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Queues a kind stamped with the current time.
    pub fn feed_now(&mut self, kind: InputKind) {
        self.feed(InputEvent::now(kind));
    }

    pub fn touch_start(&mut self, contacts: Vec<Contact>) {
        self.feed_now(InputKind::TouchStart(contacts));
    }

    pub fn touch_move(&mut self, contacts: Vec<Contact>) {
        self.feed_now(InputKind::TouchMove(contacts));
    }

    pub fn touch_end(&mut self, contacts: Vec<Contact>) {
        self.feed_now(InputKind::TouchEnd(contacts));
    }

    pub fn touch_cancel(&mut self) {
        self.feed_now(InputKind::TouchCancel);
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.feed_now(InputKind::PointerDown(Point::new(x, y)));
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.feed_now(InputKind::PointerMove(Point::new(x, y)));
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.feed_now(InputKind::PointerUp(Point::new(x, y)));
    }

    pub fn pointer_cancel(&mut self) {
        self.feed_now(InputKind::PointerCancel);
    }
}

impl EventSource for ScriptedSource {
    fn poll(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl GestureLogger {
    /// Drains `source` through [`dispatch`](GestureLogger::dispatch), returning
    /// the number of events processed.
    pub fn pump(&mut self, source: &mut dyn EventSource) -> usize {
        let events = source.poll();
        for event in &events {
            self.dispatch(event);
        }
        events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, RecordFilter};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn poll_drains_the_queue() {
        let mut source = ScriptedSource::new("scripted:0");
        source.pointer_down(1.0, 1.0);
        source.pointer_up(2.0, 2.0);

        assert_eq!(source.poll().len(), 2);
        assert!(source.poll().is_empty());
        assert_eq!(source.id(), "scripted:0");
    }

    #[test]
    fn pump_runs_a_whole_gesture_through_the_logger() {
        let mut logger = GestureLogger::new();
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        logger.add_sink(Rc::clone(&sink), RecordFilter::All);

        let mut source = ScriptedSource::new("scripted:0");
        source.touch_start(vec![Contact::new(1, 0.0, 0.0)]);
        source.touch_move(vec![Contact::new(1, 4.0, 3.0)]);
        source.touch_end(vec![Contact::new(1, 4.0, 3.0)]);

        assert_eq!(logger.pump(&mut source), 3);
        let messages = sink.borrow().messages();
        assert_eq!(messages[0], "Touch start detected");
        assert_eq!(messages[1], "Touch ID 1: Moved (4px, 3px)");
        assert!(messages[2].starts_with("Touch ID 1: Ended (4px, 3px), Duration:"));
        assert_eq!(logger.session().active_contacts(), 0);
    }
}
