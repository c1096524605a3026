//! Pull-to-refresh and reach-bottom pockets
//!
//! The top pocket follows `Released -> Ready -> Refreshing -> Released`.
//! Reach-bottom loading is tracked as a separate flag that is mutually
//! exclusive with a refresh.

use glide_core::{EventId, StateTransitions};

/// Pocket event ids
pub mod pocket_events {
    use glide_core::EventId;

    /// Content pulled past the top pocket threshold
    pub const PULLED: EventId = 1;
    /// Content pulled back above the threshold
    pub const PULLED_BACK: EventId = 2;
    /// Gesture released while ready
    pub const RELEASED_READY: EventId = 3;
    /// Refresh requested through the command API
    pub const REFRESH: EventId = 4;
    /// Caller finished loading
    pub const COMPLETE: EventId = 5;
}

/// Top pocket state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PocketState {
    #[default]
    Released,
    Ready,
    Refreshing,
}

impl StateTransitions for PocketState {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use pocket_events::*;
        use PocketState::*;

        match (self, event) {
            (Released, PULLED) => Some(Ready),
            (Ready, PULLED_BACK) => Some(Released),
            (Ready, RELEASED_READY) => Some(Refreshing),
            (Released | Ready, REFRESH) => Some(Refreshing),
            (Ready | Refreshing, COMPLETE) => Some(Released),
            _ => None,
        }
    }
}

/// Owns the pocket state and the reach-bottom loading flag
#[derive(Debug, Default)]
pub struct PocketMachine {
    state: PocketState,
    reach_bottom_loading: bool,
}

impl PocketMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PocketState {
        self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == PocketState::Refreshing
    }

    pub fn is_reach_bottom_loading(&self) -> bool {
        self.reach_bottom_loading
    }

    /// Either a refresh or a reach-bottom load is in progress
    pub fn is_loading(&self) -> bool {
        self.is_refreshing() || self.reach_bottom_loading
    }

    pub fn pull_past_threshold(&mut self) -> bool {
        self.state.apply(pocket_events::PULLED)
    }

    pub fn pull_back(&mut self) -> bool {
        self.state.apply(pocket_events::PULLED_BACK)
    }

    /// Gesture released while `Ready`
    pub fn begin_refresh_from_gesture(&mut self) -> bool {
        let changed = self.state.apply(pocket_events::RELEASED_READY);
        if changed {
            tracing::debug!("Pocket refreshing (pull-down)");
        }
        changed
    }

    /// Start a refresh without a gesture. No-op while already refreshing.
    pub fn refresh(&mut self) -> bool {
        let changed = self.state.apply(pocket_events::REFRESH);
        if changed {
            self.reach_bottom_loading = false;
            tracing::debug!("Pocket refreshing (command)");
        }
        changed
    }

    /// Start reach-bottom loading unless something is already loading
    pub fn begin_reach_bottom(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.reach_bottom_loading = true;
        tracing::debug!("Pocket loading (reach bottom)");
        true
    }

    /// Loading finished; back to `Released`
    pub fn release(&mut self) {
        self.state.apply(pocket_events::COMPLETE);
        self.reach_bottom_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_refresh_arc() {
        let mut pocket = PocketMachine::new();
        assert!(!pocket.begin_refresh_from_gesture(), "release while Released is ignored");

        assert!(pocket.pull_past_threshold());
        assert_eq!(pocket.state(), PocketState::Ready);
        assert!(pocket.begin_refresh_from_gesture());
        assert!(pocket.is_refreshing());

        pocket.release();
        assert_eq!(pocket.state(), PocketState::Released);
    }

    #[test]
    fn test_pull_back_cancels_ready() {
        let mut pocket = PocketMachine::new();
        pocket.pull_past_threshold();
        assert!(pocket.pull_back());
        assert_eq!(pocket.state(), PocketState::Released);
    }

    #[test]
    fn test_command_refresh_bypasses_ready() {
        let mut pocket = PocketMachine::new();
        assert!(pocket.refresh());
        assert!(pocket.is_refreshing());
        assert!(!pocket.refresh(), "already refreshing");
    }

    #[test]
    fn test_reach_bottom_is_exclusive_with_refresh() {
        let mut pocket = PocketMachine::new();
        assert!(pocket.begin_reach_bottom());
        assert!(!pocket.begin_reach_bottom());

        assert!(pocket.refresh());
        assert!(!pocket.is_reach_bottom_loading());
        assert!(!pocket.begin_reach_bottom());

        pocket.release();
        assert!(!pocket.is_loading());
        assert!(pocket.begin_reach_bottom());
    }
}
