//! Events and the raw host boundary.
//!
//! TouchTrace represents input as small, host-agnostic records ([`InputKind`]) and
//! timestamps them ([`InputEvent`]).
//!
//! ## Value conventions
//! - **Coordinates:** device pixels, as reported by the host. No normalization is
//!   applied; displacement and distance math stays in the host's units.
//! - **Contact identifiers:** unique per active contact for as long as it stays on
//!   the surface. Hosts may reuse an identifier after the contact lifts.
//!
//! ## The raw boundary
//! Hosts that deliver untyped payloads (JSON event records from a web runtime, a
//! replay file) go through [`RawEvent`]: deserialization plus validation into
//! [`InputKind`]. This is the only fallible surface in the crate — past the
//! boundary, missing data is ordinary control flow, never an error.

use serde::Deserialize;
use std::time::Instant;
use thiserror::Error;

/// A single touch contact as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Host-assigned identifier, stable while the contact stays down.
    pub id: u32,
    /// Horizontal position in device pixels.
    pub x: f64,
    /// Vertical position in device pixels.
    pub y: f64,
}

impl Contact {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A pointer position (single-pointer surface, no identifier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input change delivered by the host region.
///
/// Touch variants carry the full batch the host reported: all active contacts for
/// start/move, the lifted contacts for end. The pointer variants form an
/// independent single-pointer surface that shares no state with the touch path.
#[derive(Clone, Debug)]
pub enum InputKind {
    /// A new gesture began; `contacts` is the complete set now on the surface.
    TouchStart(Vec<Contact>),
    /// Active contacts moved.
    TouchMove(Vec<Contact>),
    /// The listed contacts lifted off the surface.
    TouchEnd(Vec<Contact>),
    /// The host aborted the gesture.
    TouchCancel,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    PointerCancel,
}

/// Timestamped input event.
///
/// This is a lightweight wrapper over [`InputKind`] with a monotonic timestamp.
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// Capture time (monotonic). Suitable for ordering / duration math within a run.
    pub at: Instant,
    /// The actual input change.
    pub kind: InputKind,
}

impl InputEvent {
    /// Wraps `kind` with the current monotonic time.
    pub fn now(kind: InputKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

/// One contact/pointer record inside a raw host payload.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RawContact {
    /// Present on touch records, absent on pointer records.
    pub identifier: Option<u32>,
    pub x: f64,
    pub y: f64,
}

/// Untyped event payload as delivered by the host, prior to validation.
#[derive(Clone, Debug, Deserialize)]
pub struct RawEvent {
    /// Event kind name, e.g. `"touchstart"` or `"pointermove"`.
    pub kind: String,
    /// Contact records; empty for cancel kinds.
    #[serde(default)]
    pub contacts: Vec<RawContact>,
}

/// Validation failure at the raw host boundary.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown event kind `{0}`")]
    UnknownKind(String),
    #[error("touch record {index} is missing an identifier")]
    MissingIdentifier { index: usize },
    #[error("`{kind}` event carries no position record")]
    MissingPosition { kind: String },
    #[error("malformed event payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl RawEvent {
    /// Validates the payload into a typed [`InputKind`].
    pub fn into_kind(self) -> Result<InputKind, DecodeError> {
        match self.kind.as_str() {
            "touchstart" => Ok(InputKind::TouchStart(touch_batch(&self.contacts)?)),
            "touchmove" => Ok(InputKind::TouchMove(touch_batch(&self.contacts)?)),
            "touchend" => Ok(InputKind::TouchEnd(touch_batch(&self.contacts)?)),
            "touchcancel" => Ok(InputKind::TouchCancel),
            "pointerdown" => Ok(InputKind::PointerDown(pointer_record(&self)?)),
            "pointermove" => Ok(InputKind::PointerMove(pointer_record(&self)?)),
            "pointerup" => Ok(InputKind::PointerUp(pointer_record(&self)?)),
            "pointercancel" => Ok(InputKind::PointerCancel),
            _ => Err(DecodeError::UnknownKind(self.kind)),
        }
    }
}

/// Decodes and validates one JSON event payload from the host.
pub fn decode(json: &str) -> Result<InputKind, DecodeError> {
    let raw: RawEvent = serde_json::from_str(json)?;
    raw.into_kind()
}

fn touch_batch(records: &[RawContact]) -> Result<Vec<Contact>, DecodeError> {
    records
        .iter()
        .enumerate()
        .map(|(index, rec)| match rec.identifier {
            Some(id) => Ok(Contact::new(id, rec.x, rec.y)),
            None => Err(DecodeError::MissingIdentifier { index }),
        })
        .collect()
}

fn pointer_record(raw: &RawEvent) -> Result<Point, DecodeError> {
    raw.contacts
        .first()
        .map(|rec| Point::new(rec.x, rec.y))
        .ok_or_else(|| DecodeError::MissingPosition {
            kind: raw.kind.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_touch_start_batch() {
        let kind = decode(
            r#"{"kind":"touchstart","contacts":[{"identifier":1,"x":10.0,"y":20.0},{"identifier":2,"x":30.0,"y":40.0}]}"#,
        )
        .unwrap();
        match kind {
            InputKind::TouchStart(contacts) => {
                assert_eq!(contacts.len(), 2);
                assert_eq!(contacts[0], Contact::new(1, 10.0, 20.0));
                assert_eq!(contacts[1], Contact::new(2, 30.0, 40.0));
            }
            other => panic!("expected TouchStart, got {other:?}"),
        }
    }

    #[test]
    fn decodes_pointer_down_from_first_record() {
        let kind = decode(r#"{"kind":"pointerdown","contacts":[{"x":5.5,"y":6.5}]}"#).unwrap();
        match kind {
            InputKind::PointerDown(p) => assert_eq!(p, Point::new(5.5, 6.5)),
            other => panic!("expected PointerDown, got {other:?}"),
        }
    }

    #[test]
    fn cancel_kinds_need_no_records() {
        assert!(matches!(
            decode(r#"{"kind":"touchcancel"}"#).unwrap(),
            InputKind::TouchCancel
        ));
        assert!(matches!(
            decode(r#"{"kind":"pointercancel"}"#).unwrap(),
            InputKind::PointerCancel
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = decode(r#"{"kind":"wheel","contacts":[]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownKind(k) if k == "wheel"));
    }

    #[test]
    fn rejects_touch_record_without_identifier() {
        let err = decode(r#"{"kind":"touchmove","contacts":[{"x":1.0,"y":2.0}]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingIdentifier { index: 0 }));
    }

    #[test]
    fn rejects_pointer_event_without_position() {
        let err = decode(r#"{"kind":"pointerup","contacts":[]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingPosition { .. }));
    }
}
