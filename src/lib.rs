// SPDX-License-Identifier: MPL-2.0
//! `bookfinder_page` is the headless page controller for the Book Finder
//! web frontend.
//!
//! The server renders the page; this crate supplies the client-side
//! behaviors around it: clipboard copy with toast feedback, locale
//! detection, URL query-parameter synchronization, and restoring a search
//! from a shared URL. Every environment capability (clipboard, locale
//! report, page DOM and history) sits behind a small trait so the hosting
//! shell decides how it is backed and tests run against fakes.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod escape;
pub mod format;
pub mod lang;
pub mod page;
pub mod toast;
pub mod url_state;

pub use error::{Error, Result};
