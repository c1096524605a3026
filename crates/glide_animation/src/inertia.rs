//! Inertial decay
//!
//! Velocity is measured in pixels per 60 Hz frame and multiplied by a
//! constant factor every frame. Displacement over a step is the geometric
//! sum of the per-frame velocities, so results do not depend on how the
//! caller slices time.

/// Duration of one reference frame in milliseconds
pub const FRAME_DURATION_MS: f32 = 1000.0 / 60.0;

/// Per-frame velocity multiplier
pub const DEFAULT_ACCELERATION: f32 = 0.92;

/// Speed (px/frame) below which motion stops
pub const MIN_VELOCITY: f32 = 1.0;

/// Decaying post-release motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    velocity: f32,
    acceleration: f32,
    min_velocity: f32,
}

impl Inertia {
    pub fn new(velocity: f32) -> Self {
        Self {
            velocity,
            acceleration: DEFAULT_ACCELERATION,
            min_velocity: MIN_VELOCITY,
        }
    }

    /// Current velocity in px/frame
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether `velocity` is large enough to start any motion
    pub fn is_significant(velocity: f32) -> bool {
        velocity.abs() >= MIN_VELOCITY
    }

    pub fn is_finished(&self) -> bool {
        self.velocity.abs() < self.min_velocity
    }

    /// Advance by `dt` seconds and return the displacement travelled
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.is_finished() || dt <= 0.0 {
            return 0.0;
        }

        let frames = dt * 1000.0 / FRAME_DURATION_MS;
        let decay = self.acceleration.powf(frames);
        let displacement = self.velocity * (1.0 - decay) / (1.0 - self.acceleration);
        self.velocity *= decay;

        if self.is_finished() {
            self.velocity = 0.0;
        }

        displacement
    }
}
