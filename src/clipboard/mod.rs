// SPDX-License-Identifier: MPL-2.0
//! Clipboard copy with toast feedback.
//!
//! Copying a result link is the one fallible operation on the page. The
//! outcome is reported to the user only as a success or error toast with a
//! fixed message; the underlying failure is logged to stderr and never
//! surfaced further.

use crate::error::{Error, Result};
use crate::toast::{Toast, ToastManager};

/// Toast message shown when a link was copied.
pub const COPY_SUCCESS_MESSAGE: &str = "Lien copié !";

/// Toast message shown when the copy failed.
pub const COPY_ERROR_MESSAGE: &str = "Erreur lors de la copie";

/// Writes text to a clipboard.
///
/// The seam over the host environment: production uses
/// [`SystemClipboard`], tests substitute stubs that succeed or fail on
/// demand.
pub trait ClipboardWriter {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `Error::Clipboard` if clipboard access fails. This can
    /// happen on headless systems or if permissions are denied.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(())
    }
}

/// Copies `text` to the clipboard and pushes a toast with the outcome.
///
/// On success the toast says [`COPY_SUCCESS_MESSAGE`]; on failure the
/// error detail goes to stderr and the toast says [`COPY_ERROR_MESSAGE`].
/// The failure is swallowed here: callers get no error to handle, the
/// user gets no reason beyond the generic message. No retry.
pub fn copy_to_clipboard(
    writer: &mut impl ClipboardWriter,
    toasts: &mut ToastManager,
    text: &str,
) {
    match writer.write_text(text) {
        Ok(()) => {
            toasts.push(Toast::success(COPY_SUCCESS_MESSAGE));
        }
        Err(err) => {
            eprintln!("Failed to copy to clipboard: {err}");
            toasts.push(Toast::error(COPY_ERROR_MESSAGE));
        }
    }
}
