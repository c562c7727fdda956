// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the surface: double-tap detection and two-finger pinch.

use crate::config::{DOUBLE_TAP_SLOP, DOUBLE_TAP_THRESHOLD, MIN_PINCH_DISTANCE};
use iced::Point;
use std::collections::BTreeMap;
use std::time::Instant;

/// Detects two taps close in time and space.
#[derive(Debug, Clone, Default)]
pub struct TapDetector {
    last_tap: Option<(Instant, Point)>,
}

impl TapDetector {
    /// Registers a tap. Returns true if it completes a double-tap.
    pub fn register(&mut self, position: Point, now: Instant) -> bool {
        let is_double = self.last_tap.is_some_and(|(at, previous)| {
            now.saturating_duration_since(at) < DOUBLE_TAP_THRESHOLD
                && previous.distance(position) <= DOUBLE_TAP_SLOP
        });

        if is_double {
            // A third tap starts a new sequence
            self.last_tap = None;
        } else {
            self.last_tap = Some((now, position));
        }
        is_double
    }

    pub fn reset(&mut self) {
        self.last_tap = None;
    }
}

/// One step of a pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSample {
    /// Ratio of the current finger distance to the previous one.
    pub factor: f32,
    /// Midpoint between the two fingers, in window coordinates.
    pub midpoint: Point,
}

/// Tracks touch fingers and reports incremental pinch factors.
#[derive(Debug, Clone, Default)]
pub struct PinchRecognizer {
    fingers: BTreeMap<u64, Point>,
    last_distance: Option<f32>,
}

impl PinchRecognizer {
    pub fn finger_pressed(&mut self, id: u64, position: Point) {
        self.fingers.insert(id, position);
        self.last_distance = self.pair().map(|(a, b)| a.distance(b));
    }

    /// Updates a finger. Returns a sample when exactly two fingers are down.
    pub fn finger_moved(&mut self, id: u64, position: Point) -> Option<PinchSample> {
        let finger = self.fingers.get_mut(&id)?;
        *finger = position;

        let (a, b) = self.pair()?;
        let distance = a.distance(b);
        let previous = self.last_distance.replace(distance)?;

        if previous < MIN_PINCH_DISTANCE || distance < MIN_PINCH_DISTANCE {
            return None;
        }

        Some(PinchSample {
            factor: distance / previous,
            midpoint: Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
        })
    }

    /// Removes a lifted or lost finger, ending any pinch in progress.
    pub fn finger_lifted(&mut self, id: u64) {
        self.fingers.remove(&id);
        self.last_distance = self.pair().map(|(a, b)| a.distance(b));
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.fingers.len() == 2
    }

    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    fn pair(&self) -> Option<(Point, Point)> {
        if self.fingers.len() != 2 {
            return None;
        }
        let mut points = self.fingers.values().copied();
        Some((points.next()?, points.next()?))
    }
}
