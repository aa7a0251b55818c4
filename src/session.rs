//! Per-gesture tracking state.
//!
//! A gesture spans from the first contact touching down to all contacts lifting or
//! the sequence being canceled. [`GestureSession`] owns everything scoped to that
//! span: the origin of each active contact, the shared gesture start time, and the
//! last recorded two-contact distance/angle pair. The session is plain owned state
//! with no ambient globals, so independent instances never interfere.

use crate::event::Contact;
use std::collections::HashMap;
use std::time::Instant;

/// Origin of one tracked contact: where and when it first touched down.
#[derive(Clone, Copy, Debug)]
pub struct ContactOrigin {
    pub x: f64,
    pub y: f64,
    pub at: Instant,
}

/// Last recorded distance/angle between exactly two simultaneous contacts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairMetrics {
    /// Euclidean distance between the contacts, device pixels.
    pub distance: f64,
    /// Angle of the second contact relative to the first, degrees in (−180, 180].
    pub angle_deg: f64,
}

/// Signed change versus the previously recorded pair metrics.
///
/// `rotation` is a raw subtraction of two angles in (−180, 180]; crossing the
/// ±180 wrap can therefore produce a value past 180 in magnitude. Callers that
/// need a normalized delta must fold it themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairDelta {
    /// Distance change in device pixels (pinch zoom).
    pub zoom: f64,
    /// Angle change in degrees (rotation), not wrap-normalized.
    pub rotation: f64,
}

/// Euclidean distance between two contacts, device pixels.
pub fn distance(a: &Contact, b: &Contact) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Angle of `b` relative to `a`, atan2-based, degrees in (−180, 180].
pub fn angle_deg(a: &Contact, b: &Contact) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

fn pair_of(a: &Contact, b: &Contact) -> PairMetrics {
    PairMetrics {
        distance: distance(a, b),
        angle_deg: angle_deg(a, b),
    }
}

/// Tracking state for the current gesture.
#[derive(Debug, Default)]
pub struct GestureSession {
    tracking: HashMap<u32, ContactOrigin>,
    pair: Option<PairMetrics>,
    started_at: Option<Instant>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new gesture at `at`, replacing all prior tracking state.
    ///
    /// Every contact in the batch gets its reported position as origin and the
    /// shared start time. Pair metrics reset, then seed from the batch when it
    /// holds exactly two contacts so the first move can report deltas.
    pub fn begin(&mut self, at: Instant, contacts: &[Contact]) {
        self.started_at = Some(at);
        self.tracking = contacts
            .iter()
            .map(|c| {
                (
                    c.id,
                    ContactOrigin {
                        x: c.x,
                        y: c.y,
                        at,
                    },
                )
            })
            .collect();
        self.pair = match contacts {
            [a, b] => Some(pair_of(a, b)),
            _ => None,
        };
    }

    /// Origin of the contact with `id`, if it is tracked.
    #[inline]
    pub fn origin(&self, id: u32) -> Option<&ContactOrigin> {
        self.tracking.get(&id)
    }

    /// Number of contacts currently tracked.
    #[inline]
    pub fn active_contacts(&self) -> usize {
        self.tracking.len()
    }

    /// Displacement of `contact` from its tracked origin, `None` when untracked.
    pub fn displacement(&self, contact: &Contact) -> Option<(f64, f64)> {
        self.origin(contact.id)
            .map(|o| (contact.x - o.x, contact.y - o.y))
    }

    /// Stops tracking `id`, returning its origin when it was tracked.
    pub fn end_contact(&mut self, id: u32) -> Option<ContactOrigin> {
        self.tracking.remove(&id)
    }

    /// Records pair metrics for a move batch.
    ///
    /// With exactly two contacts: stores the current distance/angle and returns
    /// their signed change versus the previous record, when one exists. Any other
    /// contact count resets the metrics to unset and returns nothing.
    pub fn update_pair(&mut self, contacts: &[Contact]) -> Option<PairDelta> {
        let [a, b] = contacts else {
            self.pair = None;
            return None;
        };
        let current = pair_of(a, b);
        let delta = self.pair.map(|prev| PairDelta {
            zoom: current.distance - prev.distance,
            rotation: current.angle_deg - prev.angle_deg,
        });
        self.pair = Some(current);
        delta
    }

    /// Last recorded pair metrics, `None` when unset.
    #[inline]
    pub fn pair(&self) -> Option<PairMetrics> {
        self.pair
    }

    /// Resets pair metrics to the unset state.
    pub fn reset_pair(&mut self) {
        self.pair = None;
    }

    /// Discards all gesture state: tracking set, pair metrics, start time.
    pub fn clear(&mut self) {
        self.tracking.clear();
        self.pair = None;
        self.started_at = None;
    }

    /// Start time of the current gesture, if one is in progress.
    #[inline]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(id: u32, x: f64, y: f64) -> Contact {
        Contact::new(id, x, y)
    }

    #[test]
    fn begin_replaces_tracking_with_shared_start_time() {
        let mut session = GestureSession::new();
        let t0 = Instant::now();
        session.begin(t0, &[c(7, 1.0, 2.0)]);
        assert_eq!(session.active_contacts(), 1);

        let t1 = Instant::now();
        session.begin(t1, &[c(1, 10.0, 20.0), c(2, 30.0, 40.0), c(3, 50.0, 60.0)]);
        assert_eq!(session.active_contacts(), 3);
        assert!(session.origin(7).is_none());
        for (id, x, y) in [(1, 10.0, 20.0), (2, 30.0, 40.0), (3, 50.0, 60.0)] {
            let origin = session.origin(id).unwrap();
            assert_eq!((origin.x, origin.y), (x, y));
            assert_eq!(origin.at, t1);
        }
        assert_eq!(session.started_at(), Some(t1));
    }

    #[test]
    fn displacement_is_current_minus_origin() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 10.0, 20.0)]);
        assert_eq!(session.displacement(&c(1, 15.0, 26.0)), Some((5.0, 6.0)));
        assert_eq!(session.displacement(&c(9, 15.0, 26.0)), None);
    }

    #[test]
    fn end_contact_removes_only_that_entry() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0), c(2, 5.0, 5.0)]);
        assert!(session.end_contact(1).is_some());
        assert!(session.end_contact(1).is_none());
        assert_eq!(session.active_contacts(), 1);
        assert!(session.origin(2).is_some());
    }

    #[test]
    fn two_contact_begin_seeds_pair_metrics() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0), c(2, 10.0, 0.0)]);
        let pair = session.pair().unwrap();
        assert_eq!(pair.distance, 10.0);
        assert_eq!(pair.angle_deg, 0.0);
    }

    #[test]
    fn update_pair_reports_zoom_and_rotation_deltas() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0), c(2, 10.0, 0.0)]);
        let delta = session
            .update_pair(&[c(1, 0.0, 0.0), c(2, 0.0, 10.0)])
            .unwrap();
        assert!((delta.zoom - 0.0).abs() < 1e-9);
        assert!((delta.rotation - 90.0).abs() < 1e-9);
        assert_eq!(session.pair().unwrap().angle_deg, 90.0);
    }

    #[test]
    fn first_update_without_prior_record_stores_silently() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0)]);
        assert!(session.pair().is_none());
        let delta = session.update_pair(&[c(1, 0.0, 0.0), c(2, 3.0, 4.0)]);
        assert!(delta.is_none());
        assert_eq!(session.pair().unwrap().distance, 5.0);
    }

    #[test]
    fn non_pair_batch_resets_metrics() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0), c(2, 10.0, 0.0)]);
        assert!(session.update_pair(&[c(1, 1.0, 1.0)]).is_none());
        assert!(session.pair().is_none());
    }

    #[test]
    fn rotation_delta_is_not_wrap_normalized() {
        let mut session = GestureSession::new();
        // angle 179° …
        session.begin(
            Instant::now(),
            &[c(1, 0.0, 0.0), c(2, -100.0, 1.745_506_492_821_76)],
        );
        // … to -179°: raw subtraction crosses the wrap and exceeds 180 in magnitude.
        let delta = session
            .update_pair(&[c(1, 0.0, 0.0), c(2, -100.0, -1.745_506_492_821_76)])
            .unwrap();
        assert!(delta.rotation < -180.0);
    }

    #[test]
    fn clear_discards_everything() {
        let mut session = GestureSession::new();
        session.begin(Instant::now(), &[c(1, 0.0, 0.0), c(2, 10.0, 0.0)]);
        session.clear();
        assert_eq!(session.active_contacts(), 0);
        assert!(session.pair().is_none());
        assert!(session.started_at().is_none());
    }

    #[test]
    fn angle_range_follows_atan2() {
        let a = c(1, 0.0, 0.0);
        assert_eq!(angle_deg(&a, &c(2, 10.0, 0.0)), 0.0);
        assert_eq!(angle_deg(&a, &c(2, 0.0, 10.0)), 90.0);
        assert_eq!(angle_deg(&a, &c(2, -10.0, 0.0)), 180.0);
        assert_eq!(angle_deg(&a, &c(2, 0.0, -10.0)), -90.0);
    }
}
