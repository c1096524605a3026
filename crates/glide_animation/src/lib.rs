//! Glide Animation System
//!
//! Frame-driven motion primitives for simulated scrolling.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs used to settle overshoot
//! - **Inertia**: Per-frame velocity decay for post-release momentum
//! - **Timers**: Cancellable one-shot timers advanced by elapsed time

pub mod inertia;
pub mod spring;
pub mod timer;

pub use inertia::{Inertia, FRAME_DURATION_MS};
pub use spring::{Spring, SpringConfig};
pub use timer::{TimerId, Timers};
