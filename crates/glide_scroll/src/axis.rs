//! Axis scrollbar controller
//!
//! One controller per active axis. It owns the axis location and motion,
//! and reports what happened through [`AxisSignal`]s instead of calling
//! back into the scrollable. Locations are non-positive: `0` is the content
//! start and `min_offset` the content end.
//!
//! # Motion
//!
//! ```text
//! Idle --end(v)--> Inertia --hit bound (bounce)--> Bounce --settled--> Idle
//!   |                 |                                          ^
//!   |                 +--below threshold / hit bound (no bounce)-+
//!   +--end(out of bounds)--> Bounce
//! ```

use glide_animation::{Inertia, Spring, SpringConfig, FRAME_DURATION_MS};
use smallvec::SmallVec;

use crate::direction::Axis;
use crate::host::ScrollbarPart;
use crate::math::round_half_up;
use crate::options::ShowScrollbar;
use crate::pocket::PocketState;

/// Drag distance multiplier while already past a bound
const OUT_OF_BOUNDS_DAMPING: f32 = 0.5;

/// Smallest rendered thumb
const THUMB_MIN_SIZE: f32 = 15.0;

/// Pocket inputs for the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PocketContext {
    pub top_pocket_size: f32,
    pub bottom_pocket_size: f32,
    pub content_padding_bottom: f32,
    pub pull_down_enabled: bool,
    pub reach_bottom_enabled: bool,
    pub state: PocketState,
    /// A refresh or reach-bottom load is in progress
    pub loading: bool,
}

/// Per-call snapshot of everything an axis needs from its scrollable
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisContext {
    pub container_size: f32,
    pub content_size: f32,
    /// Page offset of the scrollable along this axis
    pub scrollable_offset: f32,
    pub bounce_enabled: bool,
    pub inertia_enabled: bool,
    pub scroll_by_thumb: bool,
    pub pockets: Option<PocketContext>,
}

impl AxisContext {
    fn top_pocket(&self) -> f32 {
        self.pockets.map_or(0.0, |p| p.top_pocket_size)
    }
}

/// Location, render offset and cached bounds of an axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub scroll_location: f32,
    pub content_translate_offset: f32,
    pub container_size: f32,
    pub content_size: f32,
    pub min_offset: f32,
    pub max_offset: f32,
}

/// Something the scrollable must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSignal {
    /// Location changed
    Scroll,
    /// An overshoot started settling back to a bound
    Bounce,
    /// Motion completed
    End,
    /// Pulled past the top pocket
    PullDownReady,
    /// Pulled back above the top pocket
    PullDownReleased,
    /// Released while ready: start refreshing
    PullDown,
    /// Came to rest inside the bottom pocket
    ReachBottom,
}

pub type AxisSignals = SmallVec<[AxisSignal; 4]>;

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Idle,
    Inertia(Inertia),
    Bounce(Spring),
}

#[derive(Debug)]
pub struct AxisController {
    axis: Axis,
    state: AxisState,
    top_pocket: f32,
    motion: Motion,
    thumb_scrolling: bool,
    cross_thumb_scrolling: bool,
    rise_end: bool,
    active: bool,
}

impl AxisController {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            state: AxisState::default(),
            top_pocket: 0.0,
            motion: Motion::Idle,
            thumb_scrolling: false,
            cross_thumb_scrolling: false,
            rise_end: true,
            active: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn state(&self) -> &AxisState {
        &self.state
    }

    pub fn scroll_location(&self) -> f32 {
        self.state.scroll_location
    }

    pub fn content_translate_offset(&self) -> f32 {
        self.state.content_translate_offset
    }

    pub fn min_offset(&self) -> f32 {
        self.state.min_offset
    }

    pub fn max_offset(&self) -> f32 {
        self.state.max_offset
    }

    /// Inertia or bounce in flight
    pub fn is_animating(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    /// A gesture or motion is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_thumb_scrolling(&self) -> bool {
        self.thumb_scrolling
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    /// Recompute bounds from `ctx`
    pub fn update_bounds(&mut self, ctx: &AxisContext) {
        let top = ctx.top_pocket();
        self.top_pocket = top;
        self.state.container_size = ctx.container_size;
        self.state.content_size = ctx.content_size;
        self.state.min_offset = -round_half_up((ctx.content_size - ctx.container_size - top).max(0.0));
        self.state.max_offset = match ctx.pockets {
            Some(pockets) if pockets.state == PocketState::Refreshing => top,
            _ => 0.0,
        };
        self.update_translate();
    }

    fn update_translate(&mut self) {
        let location = self.state.scroll_location;
        let inside = location.clamp(self.state.min_offset, 0.0);
        self.state.content_translate_offset = location - inside - self.top_pocket;
    }

    /// Clamp a candidate location into the current bounds
    pub fn location_within_range(&self, location: f32) -> f32 {
        location.clamp(self.state.min_offset, self.state.max_offset)
    }

    fn out_of_bounds(&self) -> bool {
        let location = self.state.scroll_location;
        location < self.state.min_offset || location > self.state.max_offset
    }

    pub fn reached_min(&self) -> bool {
        round_half_up(self.state.scroll_location - self.state.min_offset) <= 0.0
    }

    pub fn reached_max(&self) -> bool {
        round_half_up(self.state.scroll_location - self.state.max_offset) >= 0.0
    }

    fn set_location(&mut self, location: f32, signals: &mut AxisSignals) {
        if location == self.state.scroll_location {
            return;
        }
        self.state.scroll_location = location;
        self.update_translate();
        signals.push(AxisSignal::Scroll);
    }

    /// Adopt a location set outside the controller (native scroll)
    pub fn sync_location(&mut self, location: f32) {
        self.motion = Motion::Idle;
        self.state.scroll_location = location;
        self.update_translate();
    }

    /// Take over a native location without interrupting motion in flight
    pub fn adopt_location(&mut self, location: f32) {
        self.state.scroll_location = location;
        self.update_translate();
    }

    /// Pull an idle location back inside bounds that shrank under it.
    /// Returns whether the location moved.
    pub fn clamp_to_bounds(&mut self) -> bool {
        if self.active || self.is_animating() || !self.out_of_bounds() {
            return false;
        }
        let location = self.location_within_range(self.state.scroll_location);
        tracing::trace!("{:?} bounds shrank, {:.1} -> {:.1}", self.axis, self.state.scroll_location, location);
        self.sync_location(location);
        true
    }

    // ========================================================================
    // Thumb
    // ========================================================================

    pub fn thumb_size(&self) -> f32 {
        let AxisState {
            container_size,
            content_size,
            ..
        } = self.state;
        if content_size <= 0.0 {
            return container_size;
        }
        let ratio = container_size / content_size;
        round_half_up(container_size * ratio)
            .max(THUMB_MIN_SIZE)
            .min(container_size.max(THUMB_MIN_SIZE))
    }

    /// Thumb position along the track
    pub fn thumb_offset(&self) -> f32 {
        let travel = self.state.container_size - self.thumb_size();
        if self.state.min_offset >= 0.0 || travel <= 0.0 {
            return 0.0;
        }
        (self.state.scroll_location / self.state.min_offset).clamp(0.0, 1.0) * travel
    }

    /// Content pixels per thumb pixel
    fn thumb_ratio(&self) -> f32 {
        let travel = self.state.container_size - self.thumb_size();
        if travel <= 0.0 {
            return 0.0;
        }
        -self.state.min_offset / travel
    }

    pub fn thumb_visible(&self, mode: ShowScrollbar, hovered: bool) -> bool {
        if self.state.min_offset >= 0.0 {
            return false;
        }
        match mode {
            ShowScrollbar::Never => false,
            ShowScrollbar::Always => true,
            ShowScrollbar::OnHover => hovered || self.active,
            ShowScrollbar::OnScroll => self.active,
        }
    }

    /// Whether a gesture on `hit` may drive this axis through its scrollbar
    pub fn validate_event(&self, hit: Option<ScrollbarPart>) -> bool {
        hit.is_some()
    }

    // ========================================================================
    // Gesture
    // ========================================================================

    /// Gesture initialization. `hit` is the part of this axis' scrollbar
    /// under the pointer, `pointer` the page coordinate along the axis.
    pub fn init(
        &mut self,
        hit: Option<ScrollbarPart>,
        pointer: f32,
        cross_thumb_scrolling: bool,
        ctx: &AxisContext,
    ) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();

        self.motion = Motion::Idle;
        self.rise_end = true;
        self.thumb_scrolling = ctx.scroll_by_thumb && hit == Some(ScrollbarPart::Thumb);
        self.cross_thumb_scrolling = cross_thumb_scrolling && !self.thumb_scrolling;

        if ctx.scroll_by_thumb && hit == Some(ScrollbarPart::Track) {
            let local = pointer - ctx.scrollable_offset;
            let target = -(local - self.thumb_size() / 2.0) * self.thumb_ratio();
            let target = target.clamp(self.state.min_offset, 0.0);
            tracing::trace!("{:?} track press at {:.1} -> {:.1}", self.axis, local, target);
            self.set_location(target, &mut signals);
            self.thumb_scrolling = true;
        }

        signals
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Apply a drag delta
    pub fn move_by(&mut self, delta: f32, ctx: &AxisContext) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();
        if self.cross_thumb_scrolling || delta == 0.0 {
            return signals;
        }
        self.active = true;

        let distance = if self.thumb_scrolling {
            -delta * self.thumb_ratio()
        } else if ctx.bounce_enabled && self.out_of_bounds() {
            delta * OUT_OF_BOUNDS_DAMPING
        } else {
            delta
        };

        let mut location = self.state.scroll_location + distance;
        if !ctx.bounce_enabled || self.thumb_scrolling {
            location = self.location_within_range(location);
        }

        tracing::trace!(
            "{:?} move delta={:.1} location: {:.1} -> {:.1}, bounds=({:.0}, {:.0})",
            self.axis,
            delta,
            self.state.scroll_location,
            location,
            self.state.min_offset,
            self.state.max_offset
        );

        self.set_location(location, &mut signals);
        self.check_pull_down(ctx, &mut signals);
        signals
    }

    fn check_pull_down(&self, ctx: &AxisContext, signals: &mut AxisSignals) {
        let Some(pockets) = ctx.pockets.filter(|p| p.pull_down_enabled) else {
            return;
        };
        let location = self.state.scroll_location;
        match pockets.state {
            PocketState::Released if location >= pockets.top_pocket_size => {
                signals.push(AxisSignal::PullDownReady)
            }
            PocketState::Ready if location < pockets.top_pocket_size => {
                signals.push(AxisSignal::PullDownReleased)
            }
            _ => {}
        }
    }

    /// Gesture end. `animate` is false for a cancelled gesture, which
    /// settles without inertia and without reporting `End`.
    pub fn end(&mut self, velocity: f32, animate: bool, ctx: &AxisContext) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();

        let thumb = self.thumb_scrolling;
        self.thumb_scrolling = false;
        self.cross_thumb_scrolling = false;
        self.rise_end = animate;

        if let Some(pockets) = ctx.pockets.filter(|p| p.pull_down_enabled) {
            if pockets.state == PocketState::Ready {
                if animate {
                    signals.push(AxisSignal::PullDown);
                    self.state.max_offset = pockets.top_pocket_size;
                } else {
                    signals.push(AxisSignal::PullDownReleased);
                }
            }
        }

        let velocity = if animate && ctx.inertia_enabled && !thumb {
            velocity
        } else {
            0.0
        };

        if Inertia::is_significant(velocity) && !self.out_of_bounds() {
            tracing::trace!("{:?} inertia from {:.1} px/frame", self.axis, velocity);
            self.motion = Motion::Inertia(Inertia::new(velocity));
            self.active = true;
        } else {
            self.settle(0.0, ctx, &mut signals);
        }
        signals
    }

    /// Halt inertia. Nothing is reported.
    pub fn stop(&mut self) {
        if matches!(self.motion, Motion::Inertia(_)) {
            tracing::trace!("{:?} inertia stopped at {:.1}", self.axis, self.state.scroll_location);
            self.motion = Motion::Idle;
            self.active = false;
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Move by an already range-checked distance, then settle
    pub fn scroll_by(&mut self, distance: f32, ctx: &AxisContext) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();
        self.motion = Motion::Idle;
        self.rise_end = true;
        self.active = true;

        let location = self.state.scroll_location + distance;
        self.set_location(location, &mut signals);
        self.settle(0.0, ctx, &mut signals);
        signals
    }

    /// Loading finished; return to the (possibly narrower) bounds quietly
    pub fn release(&mut self, ctx: &AxisContext) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();
        self.motion = Motion::Idle;
        self.rise_end = false;
        self.settle(0.0, ctx, &mut signals);
        signals
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Advance motion by `dt` seconds
    pub fn tick(&mut self, dt: f32, ctx: &AxisContext) -> AxisSignals {
        self.update_bounds(ctx);
        let mut signals = AxisSignals::new();

        match std::mem::replace(&mut self.motion, Motion::Idle) {
            Motion::Idle => {}
            Motion::Inertia(mut inertia) => {
                let location = self.state.scroll_location + inertia.step(dt);
                let bounded = self.location_within_range(location);

                if location != bounded {
                    if ctx.bounce_enabled {
                        self.set_location(location, &mut signals);
                        let per_second = inertia.velocity() * 1000.0 / FRAME_DURATION_MS;
                        self.settle(per_second, ctx, &mut signals);
                    } else {
                        self.set_location(bounded, &mut signals);
                        self.complete(ctx, &mut signals);
                    }
                } else {
                    self.set_location(location, &mut signals);
                    if inertia.is_finished() {
                        self.complete(ctx, &mut signals);
                    } else {
                        self.motion = Motion::Inertia(inertia);
                    }
                }
            }
            Motion::Bounce(mut spring) => {
                spring.step(dt);
                self.set_location(spring.value(), &mut signals);
                if spring.is_settled() {
                    self.complete(ctx, &mut signals);
                } else {
                    self.motion = Motion::Bounce(spring);
                }
            }
        }

        signals
    }

    /// Spring back into range if needed, otherwise finish
    fn settle(&mut self, velocity: f32, ctx: &AxisContext, signals: &mut AxisSignals) {
        if !self.out_of_bounds() {
            self.complete(ctx, signals);
            return;
        }

        let location = self.state.scroll_location;
        let target = self.location_within_range(location);
        tracing::trace!("{:?} bounce {:.1} -> {:.1}", self.axis, location, target);

        let mut spring = Spring::new(SpringConfig::bounce(), location).with_velocity(velocity);
        spring.set_target(target);
        self.motion = Motion::Bounce(spring);
        self.active = true;
        signals.push(AxisSignal::Bounce);
    }

    fn complete(&mut self, ctx: &AxisContext, signals: &mut AxisSignals) {
        self.motion = Motion::Idle;
        self.active = false;
        if !self.rise_end {
            return;
        }
        if self.reached_bottom_pocket(ctx) {
            signals.push(AxisSignal::ReachBottom);
        }
        signals.push(AxisSignal::End);
    }

    fn reached_bottom_pocket(&self, ctx: &AxisContext) -> bool {
        let Some(pockets) = ctx.pockets.filter(|p| p.reach_bottom_enabled && !p.loading) else {
            return false;
        };
        let distance = round_half_up(self.state.scroll_location - self.state.min_offset);
        distance <= round_half_up(pockets.bottom_pocket_size + pockets.content_padding_bottom)
    }
}
