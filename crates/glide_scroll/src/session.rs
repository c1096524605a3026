//! Gesture session bookkeeping
//!
//! Per-session records (valid directions, the end accumulator and the
//! event surfaced to callbacks) are reset at `init`. The session phase is a
//! small enum machine; the scrollable drives it from the gesture handlers.

use std::time::Duration;

use glide_animation::{TimerId, Timers};
use glide_core::{EventId, GestureEvent, StateTransitions, Vector};

use crate::direction::Axis;
use crate::math::round2;

/// How long an accepted wheel event keeps wheel validation open
pub const WHEEL_VALIDATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Session event ids
pub mod session_events {
    use glide_core::EventId;

    pub const INIT: EventId = 1;
    pub const START: EventId = 2;
    pub const END: EventId = 3;
    pub const CANCEL: EventId = 4;
    /// Every axis finished moving
    pub const SETTLED: EventId = 5;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Initiated,
    Active,
    Ending,
    Cancelled,
}

impl StateTransitions for SessionPhase {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use session_events::*;
        use SessionPhase::*;

        match (self, event) {
            (_, INIT) => Some(Initiated),
            (Initiated, START) => Some(Active),
            (Initiated | Active, END) => Some(Ending),
            (Initiated | Active, CANCEL) => Some(Cancelled),
            (Ending | Cancelled, SETTLED) => Some(Idle),
            _ => None,
        }
    }
}

/// Per-axis gate applied to deltas and velocities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidDirections {
    pub horizontal: bool,
    pub vertical: bool,
}

impl ValidDirections {
    pub fn all(value: bool) -> Self {
        Self {
            horizontal: value,
            vertical: value,
        }
    }

    pub fn set(&mut self, axis: Axis, value: bool) {
        match axis {
            Axis::Horizontal => self.horizontal = value,
            Axis::Vertical => self.vertical = value,
        }
    }

    /// Zero the components of `v` on invalid axes
    pub fn apply(&self, v: Vector) -> Vector {
        v.scale(
            if self.horizontal { 1.0 } else { 0.0 },
            if self.vertical { 1.0 } else { 0.0 },
        )
    }
}

/// Completion accumulator for the both-axes mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndActionDirections {
    horizontal: bool,
    vertical: bool,
}

impl EndActionDirections {
    /// Record that `axis` completed. Returns true, and resets, once both
    /// axes have completed.
    pub fn mark(&mut self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal = true,
            Axis::Vertical => self.vertical = true,
        }
        if self.horizontal && self.vertical {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_pending(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Scale `v` by `valid` and, for wheel input, normalize by the device pixel
/// ratio rounded to two decimals
pub fn adjust_distance(v: Vector, valid: ValidDirections, device_pixel_ratio: Option<f32>, is_wheel: bool) -> Vector {
    let v = valid.apply(v);
    match device_pixel_ratio {
        Some(ratio) if is_wheel && ratio > 0.0 => Vector::new(round2(v.x / ratio), round2(v.y / ratio)),
        _ => v,
    }
}

/// State of the gesture currently being processed
#[derive(Debug, Default)]
pub struct GestureSession {
    pub phase: SessionPhase,
    pub valid: ValidDirections,
    pub end_actions: EndActionDirections,
    /// Event reported to lifecycle callbacks
    pub event_for_user_action: Option<GestureEvent>,
    wheel_timer: Option<TimerId>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-session records for a new gesture
    pub fn begin(&mut self, event: &GestureEvent, valid: ValidDirections) {
        self.phase.apply(session_events::INIT);
        self.valid = valid;
        self.end_actions.reset();
        self.event_for_user_action = Some(event.clone());
    }

    /// Wheel validation: accept while content overflows and the wheel
    /// points away from any reached bound, or while a previously accepted
    /// wheel event keeps the window open. Accepting restarts the window.
    pub fn validate_wheel(&mut self, timers: &mut Timers, reached_min: bool, reached_max: bool, delta: f32) -> bool {
        let content_greater_than_container = !reached_min || !reached_max;
        let not_at_bound = !reached_min && !reached_max;
        let scroll_from_min = reached_min && delta > 0.0;
        let scroll_from_max = reached_max && delta < 0.0;

        let mut validated = content_greater_than_container && (not_at_bound || scroll_from_min || scroll_from_max);
        validated = validated || self.wheel_timer.is_some_and(|id| timers.is_pending(id));

        if validated {
            self.clear_wheel_timer(timers);
            self.wheel_timer = Some(timers.schedule(WHEEL_VALIDATION_TIMEOUT));
        }

        tracing::trace!(
            "Wheel validation: delta={:.1} reached=({}, {}) -> {}",
            delta,
            reached_min,
            reached_max,
            validated
        );
        validated
    }

    pub fn clear_wheel_timer(&mut self, timers: &mut Timers) {
        if let Some(id) = self.wheel_timer.take() {
            timers.cancel(id);
        }
    }

    /// Forget the wheel timer if it is among `fired`
    pub fn on_timers_fired(&mut self, fired: &[TimerId]) {
        if self.wheel_timer.is_some_and(|id| fired.contains(&id)) {
            self.wheel_timer = None;
        }
    }

    pub fn wheel_window_open(&self) -> bool {
        self.wheel_timer.is_some()
    }
}
