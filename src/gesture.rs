//! Gesture interpretation: keyboard, touch swipes, and scroll-wheel input.
//!
//! Each interpreter turns raw input events into [`NavCommand`]s. Timing is
//! passed in explicitly (`Instant`s from the caller) so debounce and cooldown
//! behavior is deterministic under test.

use crate::navigator::NavCommand;
use iced::keyboard::{Key, key};
use std::time::{Duration, Instant};

/// Map a pressed key to a navigation command.
///
/// The caller is responsible for not forwarding keys captured by a focused
/// text widget, so typing is never hijacked.
pub fn command_for_key(key: &Key) -> Option<NavCommand> {
    match key.as_ref() {
        Key::Named(key::Named::ArrowRight | key::Named::Space | key::Named::PageDown) => {
            Some(NavCommand::Next)
        }
        Key::Named(key::Named::ArrowLeft | key::Named::PageUp) => Some(NavCommand::Previous),
        Key::Named(key::Named::Home) => Some(NavCommand::First),
        Key::Named(key::Named::End) => Some(NavCommand::Last),
        _ => None,
    }
}

/// Tracks a single-finger swipe. A second finger cancels the gesture, and all
/// transient state resets once the gesture completes or is discarded.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(u64, f32, f32)>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        SwipeTracker {
            threshold,
            start: None,
        }
    }

    pub fn press(&mut self, finger: u64, x: f32, y: f32) {
        // Multi-finger gestures are ignored entirely.
        if self.start.is_some() {
            self.start = None;
        } else {
            self.start = Some((finger, x, y));
        }
    }

    pub fn release(&mut self, finger: u64, x: f32, y: f32) -> Option<NavCommand> {
        let (start_finger, start_x, start_y) = self.start.take()?;
        if start_finger != finger {
            return None;
        }
        let dx = start_x - x;
        let dy = start_y - y;
        if dx.abs() > dy.abs() && dx.abs() > self.threshold {
            // Leftward swipe advances, rightward goes back.
            Some(if dx > 0.0 {
                NavCommand::Next
            } else {
                NavCommand::Previous
            })
        } else {
            None
        }
    }

    pub fn cancel(&mut self, finger: u64) {
        if self.start.is_some_and(|(f, _, _)| f == finger) {
            self.start = None;
        }
    }
}

/// Debounces wheel input: rapid events restart a settle window; once settled,
/// a sufficiently large vertical delta triggers one navigation and opens a
/// cooldown during which further wheel triggers are suppressed. This keeps one
/// physical scroll gesture from skipping several slides.
#[derive(Debug)]
pub struct WheelGate {
    settle: Duration,
    cooldown: Duration,
    min_delta: f32,
    pending: Option<(f32, Instant)>,
    cooldown_until: Option<Instant>,
}

impl WheelGate {
    pub fn new(settle: Duration, cooldown: Duration, min_delta: f32) -> Self {
        WheelGate {
            settle,
            cooldown,
            min_delta,
            pending: None,
            cooldown_until: None,
        }
    }

    /// Record a wheel event. Positive delta means scrolling forward (down).
    pub fn on_scroll(&mut self, delta_y: f32, now: Instant) {
        if self.in_cooldown(now) {
            return;
        }
        self.pending = Some((delta_y, now));
    }

    /// Poll the settle window. Returns a command once the window has elapsed
    /// and the recorded delta clears the threshold.
    pub fn poll(&mut self, now: Instant) -> Option<NavCommand> {
        let (delta, at) = self.pending?;
        if now.duration_since(at) < self.settle {
            return None;
        }
        self.pending = None;
        if delta.abs() <= self.min_delta {
            return None;
        }
        self.cooldown_until = Some(now + self.cooldown);
        Some(if delta > 0.0 {
            NavCommand::Next
        } else {
            NavCommand::Previous
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn in_cooldown(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }
}
