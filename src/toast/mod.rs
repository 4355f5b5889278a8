// SPDX-License-Identifier: MPL-2.0
//! Transient toast notifications.
//!
//! A toast is a short-lived message card the host renders over the page.
//! Its appearance is driven entirely by CSS classes (`toast`,
//! `toast-success`, `toast-error`, `show`); this module owns the phase
//! lifecycle behind those classes and leaves the styling to the host
//! stylesheet.
//!
//! The [`manager::ToastManager`] holds every live toast and advances them
//! on ticks. Hosts tick on their frame or timer cadence; tests pass
//! explicit instants and never wait on real time.

pub mod manager;
pub mod toast;

pub use manager::ToastManager;
pub use toast::{Toast, ToastId, ToastKind, ToastPhase};
