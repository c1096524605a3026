//! Simulated scrollable
//!
//! Coordinates the gesture session, the axis controllers, the pocket
//! machine and the lock/visibility bookkeeping on top of a [`ScrollHost`].
//!
//! # Flow
//!
//! ```text
//! gesture source -> handle_* -> direction gate -> AxisController(s)
//!                                                      |
//!                                   AxisSignal <-------+
//!                                      |
//!            native scroll, pocket transitions, callbacks
//! ```
//!
//! Everything runs on one thread. Motion advances only through
//! [`Scrollable::tick`].

use std::time::Duration;

use glide_animation::Timers;
use glide_core::{
    ElementId, GestureEvent, KeyEvent, StateTransitions, SubscriptionId, Vector,
};

use crate::api::{ScrollCommands, ScrollQueries};
use crate::axis::{AxisContext, AxisController, AxisSignal, AxisSignals, PocketContext};
use crate::callbacks::{ScrollCallbacks, ScrollEventArgs, ScrollEventKind};
use crate::direction::{ActiveAxes, Axis, ScrollDirection, ScrollableDirection};
use crate::host::{ElementBox, ElementRole, ScrollHost, ScrollIntoViewOptions, ScrollOffset, ScrollbarPart};
use crate::keyboard::{line_height, KeyCommand, TabReconciler};
use crate::location::{convert_to_location, offset_distance, ScrollTarget};
use crate::lock::LockManager;
use crate::options::{ScrollableOptions, ShowScrollbar};
use crate::pocket::{PocketMachine, PocketState};
use crate::session::{adjust_distance, session_events, GestureSession, SessionPhase, ValidDirections};
use crate::sizes::{SizeTracker, Sizes};

/// Touch panning left to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Auto,
    PanX,
    PanY,
    None,
}

impl TouchAction {
    pub fn as_css(&self) -> &'static str {
        match self {
            TouchAction::Auto => "",
            TouchAction::PanX => "pan-x",
            TouchAction::PanY => "pan-y",
            TouchAction::None => "none",
        }
    }
}

fn along(v: Vector, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => v.x,
        Axis::Vertical => v.y,
    }
}

pub struct Scrollable<H: ScrollHost> {
    host: H,
    options: ScrollableOptions,
    sizes: SizeTracker,
    h_axis: AxisController,
    v_axis: AxisController,
    pocket: PocketMachine,
    lock: LockManager,
    session: GestureSession,
    tab: TabReconciler,
    timers: Timers,
    callbacks: ScrollCallbacks,
    hovered: bool,
    visible: bool,
    load_panel_visible: bool,
    loading_indicator_enabled: bool,
}

impl<H: ScrollHost> Scrollable<H> {
    pub fn new(host: H, options: ScrollableOptions) -> Self {
        let visible = options.visible;
        let mut scrollable = Self {
            host,
            options,
            sizes: SizeTracker::new(),
            h_axis: AxisController::new(Axis::Horizontal),
            v_axis: AxisController::new(Axis::Vertical),
            pocket: PocketMachine::new(),
            lock: LockManager::new(),
            session: GestureSession::new(),
            tab: TabReconciler::default(),
            timers: Timers::new(),
            callbacks: ScrollCallbacks::new(),
            hovered: false,
            visible,
            load_panel_visible: false,
            loading_indicator_enabled: true,
        };

        scrollable.lock.set_disabled(scrollable.options.disabled);
        scrollable.reset_inactive_axis();
        scrollable.update_sizes();

        tracing::debug!(
            "Scrollable mounted: direction={:?}, bounce={}, inertia={}",
            scrollable.options.direction,
            scrollable.options.bounce_enabled,
            scrollable.options.inertia_enabled
        );
        scrollable
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &ScrollableOptions {
        &self.options
    }

    /// Apply new options, re-running the effects that depend on them
    pub fn set_options(&mut self, options: ScrollableOptions) {
        let previous = std::mem::replace(&mut self.options, options);

        if previous.disabled != self.options.disabled {
            self.lock.set_disabled(self.options.disabled);
        }
        if previous.show_scrollbar != self.options.show_scrollbar
            && self.options.show_scrollbar != ShowScrollbar::OnHover
        {
            self.hovered = false;
        }

        self.reset_inactive_axis();
        self.update_sizes();

        if previous.visible != self.options.visible {
            self.set_visible(self.options.visible);
        }
    }

    // ========================================================================
    // Callbacks
    // ========================================================================

    pub fn subscribe<F>(&mut self, kind: ScrollEventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&ScrollEventArgs) + 'static,
    {
        self.callbacks.subscribe(kind, handler)
    }

    pub fn subscribe_with_disposer<F, D>(&mut self, kind: ScrollEventKind, handler: F, disposer: D) -> SubscriptionId
    where
        F: FnMut(&ScrollEventArgs) + 'static,
        D: FnOnce() + 'static,
    {
        self.callbacks.subscribe_with_disposer(kind, handler, disposer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    fn event_args(&self) -> ScrollEventArgs {
        let container = self.host.measure(ElementRole::Container);
        ScrollEventArgs::new(
            self.session.event_for_user_action.clone(),
            self.options.direction,
            self.scroll_offset(),
            container.as_ref(),
            self.top_pocket_size(),
        )
    }

    fn emit(&mut self, kind: ScrollEventKind) {
        if !self.callbacks.has_subscribers(&kind) {
            return;
        }
        let args = self.event_args();
        self.callbacks.emit(&kind, &args);
    }

    fn emit_empty(&mut self, kind: ScrollEventKind) {
        self.callbacks.emit(&kind, &ScrollEventArgs::empty());
    }

    // ========================================================================
    // Direction
    // ========================================================================

    pub fn direction(&self) -> ScrollDirection {
        ScrollDirection::resolve(self.options.direction)
    }

    fn active_axes(&self) -> ActiveAxes {
        ActiveAxes::from(self.options.direction)
    }

    /// Axis a wheel (or wheel-like command) scrolls along
    pub fn wheel_direction(&self, event: Option<&GestureEvent>) -> Axis {
        match self.options.direction {
            ScrollableDirection::Horizontal => Axis::Horizontal,
            ScrollableDirection::Vertical => Axis::Vertical,
            ScrollableDirection::Both => {
                if event.is_some_and(|e| e.shift_key()) {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                }
            }
        }
    }

    /// Axes that can currently scroll: active, and either overflowing or
    /// bouncing
    pub fn allowed_directions(&self) -> ValidDirections {
        let resolved = self.direction();
        let sizes = self.sizes.sizes();
        let bounce = self.options.bounce_enabled;
        ValidDirections {
            horizontal: resolved.is_horizontal && (sizes.has_overflow(Axis::Horizontal) || bounce),
            vertical: resolved.is_vertical && (sizes.has_overflow(Axis::Vertical) || bounce),
        }
    }

    pub fn allowed_direction(&self) -> Option<ScrollableDirection> {
        let resolved = self.direction();
        let allowed = self.allowed_directions();

        if resolved.is_both && allowed.vertical && allowed.horizontal {
            Some(ScrollableDirection::Both)
        } else if resolved.is_horizontal && allowed.horizontal {
            Some(ScrollableDirection::Horizontal)
        } else if resolved.is_vertical && allowed.vertical {
            Some(ScrollableDirection::Vertical)
        } else {
            None
        }
    }

    /// Direction reported to the gesture source before a session begins
    pub fn try_get_allowed_direction(&self, event: &GestureEvent) -> Option<ScrollableDirection> {
        if event.is_wheel() {
            return Some(match self.wheel_direction(Some(event)) {
                Axis::Horizontal => ScrollableDirection::Horizontal,
                Axis::Vertical => ScrollableDirection::Vertical,
            });
        }
        self.allowed_direction()
    }

    // ========================================================================
    // Axis dispatch
    // ========================================================================

    pub fn axis(&self, axis: Axis) -> &AxisController {
        match axis {
            Axis::Horizontal => &self.h_axis,
            Axis::Vertical => &self.v_axis,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisController {
        match axis {
            Axis::Horizontal => &mut self.h_axis,
            Axis::Vertical => &mut self.v_axis,
        }
    }

    fn top_pocket_size(&self) -> f32 {
        if self.options.force_generate_pockets && self.options.pull_down_enabled {
            self.sizes.sizes().top_pocket_height
        } else {
            0.0
        }
    }

    fn pocket_context(&self) -> Option<PocketContext> {
        if !self.options.force_generate_pockets {
            return None;
        }
        let sizes = self.sizes.sizes();
        let bottom_pocket_size = if self.options.reach_bottom_enabled {
            sizes.bottom_pocket_height
        } else {
            0.0
        };
        Some(PocketContext {
            top_pocket_size: self.top_pocket_size(),
            bottom_pocket_size,
            content_padding_bottom: sizes.content_padding_bottom,
            pull_down_enabled: self.options.pull_down_enabled,
            reach_bottom_enabled: self.options.reach_bottom_enabled,
            state: self.pocket.state(),
            loading: self.pocket.is_loading(),
        })
    }

    fn axis_context(&self, axis: Axis) -> AxisContext {
        let sizes = self.sizes.sizes();
        AxisContext {
            container_size: sizes.container_size(axis),
            content_size: sizes.content_size(axis),
            scrollable_offset: sizes.scrollable_offset_on(axis),
            bounce_enabled: self.options.bounce_enabled,
            inertia_enabled: self.options.inertia_enabled,
            scroll_by_thumb: self.options.scroll_by_thumb,
            pockets: match axis {
                Axis::Vertical => self.pocket_context(),
                Axis::Horizontal => None,
            },
        }
    }

    /// Run `f` on every active axis, horizontal first, processing each
    /// axis' signals before moving on
    fn dispatch<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut AxisController, &AxisContext) -> AxisSignals,
    {
        for axis in self.active_axes().axes() {
            let ctx = self.axis_context(axis);
            let signals = f(self.axis_mut(axis), &ctx);
            self.process_signals(axis, signals);
        }
    }

    fn process_signals(&mut self, axis: Axis, signals: AxisSignals) {
        for signal in signals {
            match signal {
                AxisSignal::Scroll => {
                    let location = self.axis(axis).scroll_location();
                    self.host.set_scroll(axis, -location);
                    self.handle_scroll();
                }
                AxisSignal::Bounce => self.emit(ScrollEventKind::Bounce),
                AxisSignal::End => self.on_end(axis),
                AxisSignal::PullDownReady => {
                    self.pocket.pull_past_threshold();
                }
                AxisSignal::PullDownReleased => {
                    self.pocket.pull_back();
                }
                AxisSignal::PullDown => {
                    if self.pocket.begin_refresh_from_gesture() {
                        self.on_pull_down();
                    }
                }
                AxisSignal::ReachBottom => {
                    if self.pocket.begin_reach_bottom() {
                        self.on_reach_bottom();
                    }
                }
            }
        }
    }

    fn on_end(&mut self, axis: Axis) {
        if self.direction().is_both && !self.session.end_actions.mark(axis) {
            return;
        }
        tracing::debug!("Scroll ended at {:?}", self.scroll_offset());
        self.emit(ScrollEventKind::End);
    }

    fn settle_session_if_idle(&mut self) {
        if !self.h_axis.is_animating() && !self.v_axis.is_animating() {
            self.session.phase.apply(session_events::SETTLED);
        }
    }

    // ========================================================================
    // Sizes
    // ========================================================================

    pub fn sizes(&self) -> &Sizes {
        self.sizes.sizes()
    }

    /// Re-measure and refresh axis bounds. An idle axis left outside
    /// shrunken bounds moves back inside them.
    pub fn update_sizes(&mut self) {
        self.sizes.update(&self.host);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let ctx = self.axis_context(axis);
            let controller = self.axis_mut(axis);
            controller.update_bounds(&ctx);
            if controller.clamp_to_bounds() {
                let location = controller.scroll_location();
                self.host.set_scroll(axis, -location);
            }
        }
    }

    /// Re-measure and notify `Updated`
    pub fn update_handler(&mut self) {
        self.update_sizes();
        self.emit(ScrollEventKind::Updated);
    }

    /// Layout of the container or content changed
    pub fn update_dimensions(&mut self) {
        self.update_handler();
    }

    fn reset_inactive_axis(&mut self) {
        match self.options.direction {
            ScrollableDirection::Both => {}
            ScrollableDirection::Horizontal => self.host.set_scroll(Axis::Vertical, 0.0),
            ScrollableDirection::Vertical => self.host.set_scroll(Axis::Horizontal, 0.0),
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Whether a gesture may begin
    pub fn validate(&mut self, event: &GestureEvent) -> bool {
        if self.is_locked() {
            return false;
        }
        self.update_handler();
        self.move_is_allowed(event)
    }

    pub fn move_is_allowed(&mut self, event: &GestureEvent) -> bool {
        if self.options.disabled || (event.is_wheel() && event.is_command_key_pressed()) {
            return false;
        }
        if self.options.bounce_enabled {
            return true;
        }
        match event.wheel_delta() {
            Some(delta) => self.validate_wheel(event, delta),
            None => self.validate_move(event),
        }
    }

    fn validate_wheel(&mut self, event: &GestureEvent, delta: f32) -> bool {
        let axis = self.wheel_direction(Some(event));
        let ctx = self.axis_context(axis);
        let controller = self.axis_mut(axis);
        controller.update_bounds(&ctx);
        let (reached_min, reached_max) = (controller.reached_min(), controller.reached_max());
        self.session.validate_wheel(&mut self.timers, reached_min, reached_max, delta)
    }

    fn validate_move(&self, event: &GestureEvent) -> bool {
        let on_scrollbar = event
            .target()
            .is_some_and(|target| self.host.scrollbar_part(target).is_some());
        if !self.options.scroll_by_content && !on_scrollbar {
            return false;
        }
        self.allowed_direction().is_some()
    }

    fn scrollbar_hit(&self, event: &GestureEvent, axis: Axis) -> Option<ScrollbarPart> {
        let target = event.target()?;
        self.host
            .scrollbar_part(target)
            .filter(|(hit_axis, _)| *hit_axis == axis)
            .map(|(_, part)| part)
    }

    fn is_content(&self, event: &GestureEvent) -> bool {
        event.target().is_some_and(|target| self.host.is_own_content(target))
    }

    fn validate_event(&self, event: &GestureEvent, axis: Axis) -> bool {
        (self.options.scroll_by_thumb && self.axis(axis).validate_event(self.scrollbar_hit(event, axis)))
            || (self.options.scroll_by_content && self.is_content(event))
    }

    fn suppress_directions(&self, event: &GestureEvent) -> ValidDirections {
        if event.is_wheel() {
            return ValidDirections::all(true);
        }
        let mut valid = ValidDirections::all(false);
        for axis in self.active_axes().axes() {
            valid.set(axis, self.validate_event(event, axis));
        }
        valid
    }

    fn is_cross_thumb_scrolling(&self, event: &GestureEvent) -> bool {
        self.options.scroll_by_thumb
            && self
                .active_axes()
                .axes()
                .any(|axis| self.scrollbar_hit(event, axis) == Some(ScrollbarPart::Thumb))
    }

    // ========================================================================
    // Gesture handlers
    // ========================================================================

    pub fn session_phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn handle_init(&mut self, event: &GestureEvent) {
        let valid = self.suppress_directions(event);
        self.session.begin(event, valid);

        let cross_thumb = self.is_cross_thumb_scrolling(event);
        let hits = [
            self.scrollbar_hit(event, Axis::Horizontal),
            self.scrollbar_hit(event, Axis::Vertical),
        ];
        let position = event.original.position;

        tracing::debug!(
            "Gesture init: valid=(h: {}, v: {}), cross_thumb={}",
            valid.horizontal,
            valid.vertical,
            cross_thumb
        );

        self.dispatch(|controller, ctx| {
            let axis = controller.axis();
            let hit = match axis {
                Axis::Horizontal => hits[0],
                Axis::Vertical => hits[1],
            };
            controller.init(hit, along(position, axis), cross_thumb, ctx)
        });
    }

    pub fn handle_start(&mut self, event: &GestureEvent) {
        self.session.event_for_user_action = Some(event.clone());
        self.session.phase.apply(session_events::START);

        self.dispatch(|controller, _| {
            controller.start();
            AxisSignals::new()
        });

        self.emit(ScrollEventKind::Start);
    }

    /// Drag update. Rejected (with `event.cancel` set) while locked.
    pub fn handle_move(&mut self, event: &mut GestureEvent) {
        if self.is_locked() {
            event.cancel = true;
            return;
        }

        event.original.prevent_default();
        event.delta = adjust_distance(
            event.delta,
            self.session.valid,
            self.host.device_pixel_ratio(),
            event.is_wheel(),
        );
        self.session.event_for_user_action = Some(event.clone());

        let delta = event.delta;
        self.dispatch(|controller, ctx| {
            let distance = along(delta, controller.axis());
            controller.move_by(distance, ctx)
        });
    }

    pub fn handle_end(&mut self, event: &mut GestureEvent) {
        event.velocity = adjust_distance(
            event.velocity,
            self.session.valid,
            self.host.device_pixel_ratio(),
            event.is_wheel(),
        );
        self.session.event_for_user_action = Some(event.clone());
        self.session.phase.apply(session_events::END);

        let velocity = event.velocity;
        self.dispatch(|controller, ctx| {
            let v = along(velocity, controller.axis());
            controller.end(v, true, ctx)
        });
        self.settle_session_if_idle();
    }

    /// External interruption: halt inertia immediately
    pub fn handle_stop(&mut self) {
        self.dispatch(|controller, _| {
            controller.stop();
            AxisSignals::new()
        });
        self.settle_session_if_idle();
    }

    /// Cancelled gesture: no inertia and no `End`
    pub fn handle_cancel(&mut self, event: &GestureEvent) {
        self.session.event_for_user_action = Some(event.clone());
        self.session.end_actions.reset();
        self.session.phase.apply(session_events::CANCEL);

        self.dispatch(|controller, ctx| controller.end(0.0, false, ctx));
        self.settle_session_if_idle();
    }

    /// Native scroll event from the container
    pub fn handle_scroll(&mut self) {
        self.handle_tab_key();
        self.emit(ScrollEventKind::Scroll);
    }

    fn handle_tab_key(&mut self) {
        if !self.tab.is_pending() {
            return;
        }
        let native = self.scroll_offset();
        let container = self.host.measure(ElementRole::Container).unwrap_or_default();
        let reconciled = self.tab.reconcile(
            (self.h_axis.scroll_location(), self.v_axis.scroll_location()),
            (native.left, native.top),
            (container.scroll_max(Axis::Horizontal), container.scroll_max(Axis::Vertical)),
        );
        if let Some((h, v)) = reconciled {
            if self.h_axis.scroll_location() != h {
                self.h_axis.adopt_location(h);
            }
            if self.v_axis.scroll_location() != v {
                self.v_axis.adopt_location(v);
            }
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Returns whether the key was handled. Handled keys have propagation
    /// stopped and default prevented.
    pub fn handle_key_down(&mut self, event: &mut KeyEvent) -> bool {
        let Some(command) = KeyCommand::from_key(event.key) else {
            return false;
        };

        if command == KeyCommand::Tab {
            self.tab.mark();
        }
        if !command.is_handled() || !self.options.use_keyboard {
            return false;
        }

        match command {
            KeyCommand::Tab => return false,
            KeyCommand::Line { x, y } => self.scroll_by_line(x, y),
            KeyCommand::Page(page) => self.scroll_by_page(page),
            KeyCommand::Home => self.scroll_to_home(),
            KeyCommand::End => self.scroll_to_end(),
        }

        event.stop_propagation();
        event.prevent_default();
        true
    }

    fn scroll_by_line(&mut self, x: f32, y: f32) {
        let line = line_height(self.host.device_pixel_ratio());
        self.scroll_by(ScrollTarget::offset(y * line, x * line));
    }

    fn scroll_by_page(&mut self, page: f32) {
        let axis = self.wheel_direction(None);
        let container = self.host.measure(ElementRole::Container).unwrap_or_default();
        let distance = page * container.client_size(axis);
        self.scroll_by(match axis {
            Axis::Vertical => ScrollTarget::top(distance),
            Axis::Horizontal => ScrollTarget::left(distance),
        });
    }

    fn scroll_to_home(&mut self) {
        let target = if self.direction().is_vertical {
            ScrollTarget::top(0.0)
        } else {
            ScrollTarget::left(0.0)
        };
        self.scroll_to(target);
    }

    fn scroll_to_end(&mut self) {
        let axis = self.wheel_direction(None);
        let container = self.host.measure(ElementRole::Container).unwrap_or_default();
        let max = container.scroll_max(axis);
        self.scroll_to(match axis {
            Axis::Vertical => ScrollTarget::top(max),
            Axis::Horizontal => ScrollTarget::left(max),
        });
    }

    // ========================================================================
    // Hover & visibility
    // ========================================================================

    pub fn cursor_enter(&mut self) {
        if self.options.show_scrollbar == ShowScrollbar::OnHover {
            self.hovered = true;
        }
    }

    pub fn cursor_leave(&mut self) {
        if self.options.show_scrollbar == ShowScrollbar::OnHover {
            self.hovered = false;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Visibility hook. Call with `false` before the host hides the
    /// container and with `true` after it is shown again.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            self.update_handler();
            if let Some(saved) = self.lock.take_saved_offset() {
                tracing::debug!("Restoring scroll offset {:?}", saved);
                self.host.set_scroll(Axis::Vertical, saved.top);
                self.host.set_scroll(Axis::Horizontal, saved.left);
                let restored = self.scroll_offset();
                self.v_axis.sync_location(-restored.top);
                self.h_axis.sync_location(-restored.left);
            }
        } else {
            let offset = self.scroll_offset();
            self.lock.save_offset(offset);
        }

        self.callbacks
            .emit(&ScrollEventKind::VisibilityChange, &ScrollEventArgs::visibility(visible));
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ========================================================================
    // Loading
    // ========================================================================

    fn start_loading(&mut self) {
        if self.loading_indicator_enabled && self.host.is_visible() {
            self.load_panel_visible = true;
        }
        self.lock.lock();
    }

    fn finish_loading(&mut self) {
        self.load_panel_visible = false;
        self.lock.unlock();
    }

    fn on_pull_down(&mut self) {
        self.loading_indicator_enabled = false;
        self.start_loading();
        self.emit_empty(ScrollEventKind::PullDown);
    }

    fn on_reach_bottom(&mut self) {
        self.loading_indicator_enabled = false;
        self.start_loading();
        self.emit_empty(ScrollEventKind::ReachBottom);
    }

    fn on_release(&mut self) {
        self.loading_indicator_enabled = true;
        self.finish_loading();
        self.emit(ScrollEventKind::Updated);
    }

    pub fn pocket_state(&self) -> PocketState {
        self.pocket.state()
    }

    pub fn is_reach_bottom_loading(&self) -> bool {
        self.pocket.is_reach_bottom_loading()
    }

    pub fn load_panel_visible(&self) -> bool {
        self.options.need_scroll_view_load_panel && self.load_panel_visible
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Advance timers and motion by `dt`. Returns whether motion is still
    /// running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let fired = self.timers.advance(dt);
        self.session.on_timers_fired(&fired);

        let seconds = dt.as_secs_f32();
        self.dispatch(|controller, ctx| controller.tick(seconds, ctx));
        self.settle_session_if_idle();
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.h_axis.is_animating() || self.v_axis.is_animating()
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn touch_action(&self) -> TouchAction {
        let allowed = self.allowed_directions();
        match (allowed.horizontal, allowed.vertical) {
            (true, true) => TouchAction::None,
            (true, false) => TouchAction::PanY,
            (false, true) => TouchAction::PanX,
            (false, false) => TouchAction::Auto,
        }
    }

    /// `(x, y)` translation applied to the content element
    pub fn content_transform(&self) -> (f32, f32) {
        (
            self.h_axis.content_translate_offset(),
            self.v_axis.content_translate_offset(),
        )
    }

    pub fn scrollbar_visible(&self, axis: Axis) -> bool {
        self.active_axes().contains(axis)
            && self
                .axis(axis)
                .thumb_visible(self.options.show_scrollbar, self.hovered)
    }

    /// `(offset, size)` of the thumb along `axis`
    pub fn thumb_geometry(&self, axis: Axis) -> Option<(f32, f32)> {
        if !self.active_axes().contains(axis) {
            return None;
        }
        let controller = self.axis(axis);
        Some((controller.thumb_offset(), controller.thumb_size()))
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn calc_scroll_by_delta(&self, axis: Axis, value: f32) -> f32 {
        if !self.active_axes().contains(axis) {
            return value;
        }
        let controller = self.axis(axis);
        let location = controller.scroll_location();
        controller.location_within_range(value + location) - location
    }

    fn scroll_by_location(&mut self, location: ScrollOffset) {
        if location.top == 0.0 && location.left == 0.0 {
            return;
        }

        self.update_handler();
        self.session.valid = ValidDirections::all(true);
        self.session.end_actions.reset();
        self.emit(ScrollEventKind::Start);

        let deltas = [
            self.calc_scroll_by_delta(Axis::Horizontal, location.left),
            self.calc_scroll_by_delta(Axis::Vertical, location.top),
        ];
        tracing::trace!("scroll_by location delta=({:.1}, {:.1})", deltas[0], deltas[1]);

        self.dispatch(|controller, ctx| {
            let distance = match controller.axis() {
                Axis::Horizontal => deltas[0],
                Axis::Vertical => deltas[1],
            };
            controller.scroll_by(distance, ctx)
        });
    }

    /// Tear down subscriptions and pending timers
    pub fn dispose(&mut self) {
        self.session.clear_wheel_timer(&mut self.timers);
        self.timers.clear();
        self.callbacks.dispose_all();
    }
}

impl<H: ScrollHost> ScrollCommands for Scrollable<H> {
    fn scroll_by(&mut self, distance: ScrollTarget) {
        let location = convert_to_location(distance, self.options.direction);
        self.scroll_by_location(location);
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        let distance = offset_distance(target, self.options.direction, self.scroll_offset());
        self.scroll_by(distance);
    }

    fn scroll_to_element(&mut self, element: ElementId, options: Option<ScrollIntoViewOptions>) {
        let before = self.scroll_offset();
        self.host.scroll_into_view(element, options.unwrap_or_default());

        let resolved = self.direction();
        if !resolved.is_horizontal {
            self.host.set_scroll(Axis::Horizontal, before.left);
        }
        if !resolved.is_vertical {
            self.host.set_scroll(Axis::Vertical, before.top);
        }

        let after = self.scroll_offset();
        self.h_axis.sync_location(-after.left);
        self.v_axis.sync_location(-after.top);

        if after != before {
            self.handle_scroll();
        }
    }

    fn refresh(&mut self) {
        if !self.pocket.refresh() {
            return;
        }
        self.start_loading();
        self.emit_empty(ScrollEventKind::PullDown);
    }

    fn release(&mut self) {
        self.update_sizes();
        self.pocket.release();
        self.dispatch(|controller, ctx| controller.release(ctx));
        self.on_release();
    }
}

impl<H: ScrollHost> ScrollQueries for Scrollable<H> {
    fn content(&self) -> Option<ElementId> {
        if self.options.need_scroll_view_content_wrapper {
            self.host.element(ElementRole::ScrollViewContent)
        } else {
            self.host.element(ElementRole::Content)
        }
    }

    fn container(&self) -> Option<ElementId> {
        self.host.element(ElementRole::Container)
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.host.scroll_position().unwrap_or_default()
    }

    fn client_height(&self) -> f32 {
        self.host
            .measure(ElementRole::Container)
            .map_or(0.0, |b| b.client_height)
    }

    fn client_width(&self) -> f32 {
        self.host
            .measure(ElementRole::Container)
            .map_or(0.0, |b| b.client_width)
    }

    fn scroll_height(&self) -> f32 {
        self.content_box().map_or(0.0, |b| b.offset_height)
    }

    fn scroll_width(&self) -> f32 {
        self.content_box().map_or(0.0, |b| b.offset_width)
    }
}

impl<H: ScrollHost> Scrollable<H> {
    fn content_box(&self) -> Option<ElementBox> {
        let role = if self.options.need_scroll_view_content_wrapper {
            ElementRole::ScrollViewContent
        } else {
            ElementRole::Content
        };
        self.host.measure(role)
    }
}

impl<H: ScrollHost> Drop for Scrollable<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<H: ScrollHost + std::fmt::Debug> std::fmt::Debug for Scrollable<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scrollable")
            .field("host", &self.host)
            .field("options", &self.options)
            .field("h_axis", &self.h_axis)
            .field("v_axis", &self.v_axis)
            .field("pocket", &self.pocket)
            .field("locked", &self.lock.is_locked())
            .finish()
    }
}
