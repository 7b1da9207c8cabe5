use std::time::{Duration, Instant};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct PendingEdit {
    text: String,
    edited_at: Instant,
}

/// Coalesces search-text edits until the input has been quiet for `window`.
///
/// The owner records edits with [`SearchDebouncer::edit`] and polls from its event loop.
/// Only one edit is ever pending; a newer edit replaces it and restarts the window.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    settled: String,
    pending: Option<PendingEdit>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            settled: String::new(),
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Text currently in effect for filtering.
    pub fn settled(&self) -> &str {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(PendingEdit {
            text: text.into(),
            edited_at: now,
        });
    }

    /// Promote the pending edit once the window has elapsed.
    ///
    /// Returns the new effective text only when it differs from the previous one.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|edit| now.saturating_duration_since(edit.edited_at) >= self.window);
        if !ready {
            return None;
        }

        self.flush()
    }

    /// Apply the pending edit immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<&str> {
        let edit = self.pending.take()?;
        if edit.text == self.settled {
            return None;
        }

        self.settled = edit.text;
        Some(&self.settled)
    }
}
