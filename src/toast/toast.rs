// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.

use std::time::Instant;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Determines the style class a toast carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation succeeded (green accent in the default stylesheet).
    #[default]
    Success,
    /// Operation failed (red accent).
    Error,
}

impl ToastKind {
    /// Returns the style class for this kind.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// Where a toast is in its fixed lifecycle.
///
/// A toast is inserted as `Entering`, gains the `show` class on the next
/// tick (`Visible`), loses it when its visible time elapses (`Fading`),
/// and is dropped from the manager once the exit transition has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted but not yet committed, so the entrance transition is
    /// observed rather than skipped.
    Entering,
    /// Fully shown, carrying the `show` class.
    Visible,
    /// Exit transition running; `show` removed.
    Fading,
}

/// A toast to be displayed over the page.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    phase: ToastPhase,
    inserted_at: Instant,
}

impl Toast {
    /// Creates a new toast with the given kind and message.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            message: message.into(),
            phase: ToastPhase::Entering,
            inserted_at: Instant::now(),
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the style kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Returns when this toast was inserted.
    #[must_use]
    pub fn inserted_at(&self) -> Instant {
        self.inserted_at
    }

    /// Returns the class list the host should apply, as a space-joined
    /// string: `toast`, the kind class, and `show` while visible.
    #[must_use]
    pub fn css_classes(&self) -> String {
        let mut classes = format!("toast {}", self.kind.css_class());
        if self.phase == ToastPhase::Visible {
            classes.push_str(" show");
        }
        classes
    }

    pub(super) fn set_phase(&mut self, phase: ToastPhase) {
        self.phase = phase;
    }

    pub(super) fn set_inserted_at(&mut self, at: Instant) {
        self.inserted_at = at;
    }
}
