//! Lock and visibility bookkeeping
//!
//! A lock taken for loading must survive an unrelated unlock while the
//! scrollable is disabled, so `unlock` checks the disabled flag itself.

use crate::host::ScrollOffset;

#[derive(Debug, Default)]
pub struct LockManager {
    locked: bool,
    disabled: bool,
    saved_offset: Option<ScrollOffset>,
}

impl LockManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self) {
        if !self.locked {
            tracing::debug!("Scrollable locked");
        }
        self.locked = true;
    }

    /// Release the lock. Ignored while disabled.
    pub fn unlock(&mut self) {
        if self.disabled {
            return;
        }
        if self.locked {
            tracing::debug!("Scrollable unlocked");
        }
        self.locked = false;
    }

    /// Track the externally configured disabled flag. Disabling locks;
    /// enabling unlocks.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.lock();
        } else {
            self.unlock();
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Snapshot the native offset before the container is hidden
    pub fn save_offset(&mut self, offset: ScrollOffset) {
        self.saved_offset = Some(offset);
    }

    /// Consume the snapshot, leaving none behind
    pub fn take_saved_offset(&mut self) -> Option<ScrollOffset> {
        self.saved_offset.take()
    }

    pub fn saved_offset(&self) -> Option<ScrollOffset> {
        self.saved_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_wins_over_unlock() {
        let mut lock = LockManager::new();
        lock.set_disabled(true);
        lock.lock();
        lock.unlock();
        assert!(lock.is_locked(), "unlock while disabled must be ignored");

        lock.set_disabled(false);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_loading_lock_released_when_enabled() {
        let mut lock = LockManager::new();
        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_saved_offset_is_consumed_once() {
        let mut lock = LockManager::new();
        assert!(lock.saved_offset().is_none());
        lock.save_offset(ScrollOffset::new(120.0, 30.0));
        assert_eq!(lock.take_saved_offset(), Some(ScrollOffset::new(120.0, 30.0)));
        assert_eq!(lock.take_saved_offset(), None);
    }
}
