// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` holds every live toast and advances their phases on
//! ticks. There is no cap, no queue, and no deduplication: concurrent
//! toasts stack, each running its own timeline. Once inserted, a toast
//! always runs to removal.

use super::toast::{Toast, ToastId, ToastPhase};
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const VISIBLE_DURATION: Duration = Duration::from_millis(3000);

/// How long the exit transition runs after `show` is removed. Matches the
/// transition duration in the host stylesheet.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Manages live toasts and their phase transitions.
#[derive(Debug)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    visible_duration: Duration,
    exit_duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    /// Creates an empty manager with the standard durations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(VISIBLE_DURATION, EXIT_DURATION)
    }

    /// Creates an empty manager with custom durations. The exit duration
    /// must stay in step with the stylesheet's transition time.
    #[must_use]
    pub fn with_durations(visible_duration: Duration, exit_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            visible_duration,
            exit_duration,
        }
    }

    /// Inserts a toast now.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        self.push_at(toast, Instant::now())
    }

    /// Inserts a toast with an explicit insertion instant. Its fade and
    /// removal deadlines are measured from `now`.
    pub fn push_at(&mut self, mut toast: Toast, now: Instant) -> ToastId {
        let id = toast.id();
        toast.set_inserted_at(now);
        toast.set_phase(ToastPhase::Entering);
        self.toasts.push(toast);
        id
    }

    /// Advances every toast against the current instant.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances every toast against `now`.
    ///
    /// Any tick commits an `Entering` toast to `Visible` (the entrance
    /// transition needs one committed frame without `show` before the
    /// class is added). A `Visible` toast starts fading once its visible
    /// time has elapsed, and a `Fading` toast is dropped once the exit
    /// transition has run on top of that.
    pub fn tick_at(&mut self, now: Instant) {
        let visible = self.visible_duration;
        let exit = self.exit_duration;
        self.toasts.retain_mut(|toast| {
            if toast.phase() == ToastPhase::Entering {
                toast.set_phase(ToastPhase::Visible);
            }
            if toast.phase() == ToastPhase::Visible
                && now >= toast.inserted_at() + visible
            {
                toast.set_phase(ToastPhase::Fading);
            }
            !(toast.phase() == ToastPhase::Fading
                && now >= toast.inserted_at() + visible + exit)
        });
    }

    /// Returns the live toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether no toasts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
