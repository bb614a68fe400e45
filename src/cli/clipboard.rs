//! System clipboard hand-off.
//!
//! The clipboard is an optional sink: when it cannot be reached (headless
//! session, missing display server) the caller downgrades to printing the
//! content, never to an error.

/// Copies `content` to the system clipboard.
///
/// Returns `false` when no clipboard is available; the failure detail goes
/// to the debug log only.
#[must_use]
pub fn copy(content: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(content)) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "clipboard unavailable");
            false
        }
    }
}
