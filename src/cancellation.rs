//! A shared flag for stopping a listing between directories.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signals that a run should stop before the next directory is listed.
///
/// Clones share the same flag, so the token handed to the Ctrl+C handler
/// cancels the one the traversal driver checks.
///
/// # Examples
///
/// ```
/// use seqls::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks this token and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cancel_is_seen_across_threads() {
        let token = CancellationToken::default();
        let worker = token.clone();
        let handle = thread::spawn(move || {
            worker.cancel();
        });
        handle.join().unwrap();
        assert!(token.is_cancelled());
    }
}
