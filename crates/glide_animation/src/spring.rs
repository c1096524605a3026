//! Spring physics
//!
//! A damped harmonic oscillator integrated with RK4. Large frame steps are
//! split into fixed substeps so a stiff spring stays stable when a frame
//! is dropped.

/// Longest integration step in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Displacement (px) below which a spring may rest
const REST_DISPLACEMENT: f32 = 0.1;

/// Speed (px/s) below which a spring may rest
const REST_VELOCITY: f32 = 1.0;

/// Spring configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Snappy spring for quick settles
    pub const fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Soft spring with visible wobble
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Edge snap-back: slightly overdamped, no rebound
    ///
    /// Critical damping = 2 * sqrt(3000 * 1) ≈ 109.5
    pub const fn bounce() -> Self {
        Self::new(3000.0, 110.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::bounce()
    }
}

/// A spring animating a single value toward a target
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    /// Start with an initial velocity in units per second
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = false;
        self
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = false;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, dt: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);
        let k2x = v + 0.5 * dt * k1v;
        let k2v = self.acceleration(x + 0.5 * dt * k1x, k2x);
        let k3x = v + 0.5 * dt * k2v;
        let k3v = self.acceleration(x + 0.5 * dt * k2x, k3x);
        let k4x = v + dt * k3v;
        let k4v = self.acceleration(x + dt * k3x, k4x);

        self.value = x + dt / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + dt / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }

    /// Advance by `dt` seconds. Once at rest the value snaps onto the target.
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt <= 0.0 {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            self.rk4(h);
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring = Spring::new(SpringConfig::bounce(), 80.0);
        spring.set_target(0.0);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            if spring.is_settled() {
                break;
            }
        }

        assert!(spring.is_settled(), "bounce spring should settle within 10s");
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_bounce_spring_does_not_rebound_past_target() {
        let mut spring = Spring::new(SpringConfig::bounce(), -50.0);
        spring.set_target(0.0);

        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 0.0, "overdamped spring crossed the target");
        }
    }

    #[test]
    fn test_large_dt_is_stable() {
        let mut spring = Spring::new(SpringConfig::bounce(), 100.0);
        spring.set_target(0.0);
        spring.step(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 100.0);
    }

    #[test]
    fn test_initial_velocity_overshoots_then_returns() {
        let mut spring = Spring::new(SpringConfig::bounce(), 0.0).with_velocity(-600.0);
        spring.set_target(0.0);

        let mut lowest: f32 = 0.0;
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            lowest = lowest.min(spring.value());
        }

        assert!(lowest < 0.0, "velocity should carry the value past the target");
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
    }
}
