//! State shared between the button interrupt context and the render loop.
//!
//! Every field is an atomic cell so both contexts observe consistent
//! values. The press handler is the only writer of forward transitions;
//! the render loop only clears the lock and finishes `Reset → Off`.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::state::DisplayState;

/// Display state, debounce lock and press counter.
///
/// Meant to live in a `static` and be handed to both contexts by
/// reference.
pub struct SharedState {
    state: AtomicU8,
    locked: AtomicBool,
    presses: AtomicU32,
}

impl SharedState {
    /// Start at `Off`, unlocked, no presses.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(DisplayState::Off.as_raw()),
            locked: AtomicBool::new(false),
            presses: AtomicU32::new(0),
        }
    }

    /// Handle one button edge. Runs in interrupt context: no I/O, no
    /// blocking.
    ///
    /// Accepted only if the lock is clear; an accepted press sets the
    /// lock, advances the state one step and bumps the counter. Returns
    /// whether the press was accepted.
    pub fn on_press(&self) -> bool {
        if self.locked.swap(true, Ordering::AcqRel) {
            return false;
        }

        let next = self.state().next();
        self.state.store(next.as_raw(), Ordering::Release);
        self.presses.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Current display state.
    ///
    /// A raw value outside the cycle is treated as corruption: the cell
    /// is forced back to `Off` and `Off` is returned.
    pub fn state(&self) -> DisplayState {
        let raw = self.state.load(Ordering::Acquire);
        match DisplayState::from_raw(raw) {
            Some(state) => state,
            None => {
                self.state
                    .store(DisplayState::Off.as_raw(), Ordering::Release);
                DisplayState::Off
            }
        }
    }

    /// Leave `Reset` for `Off`.
    ///
    /// Does nothing if a press already moved the state on, so an accepted
    /// press is never overwritten. Returns whether the transition happened.
    pub fn finish_reset(&self) -> bool {
        self.state
            .compare_exchange(
                DisplayState::Reset.as_raw(),
                DisplayState::Off.as_raw(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Clear the debounce lock so the next press registers.
    pub fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }

    /// Accepted presses since power-on (wraps at `u32::MAX`).
    pub fn press_count(&self) -> u32 {
        self.presses.load(Ordering::Relaxed)
    }

    /// Overwrite the raw state cell. Test hook for the self-healing path.
    #[cfg(test)]
    pub(crate) fn store_raw(&self, raw: u8) {
        self.state.store(raw, Ordering::Release);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
