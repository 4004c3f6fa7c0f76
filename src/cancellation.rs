//! Provides a token-based mechanism for graceful cancellation.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that can be used to signal cancellation to a running concatenation.
///
/// The engine itself never looks at the token; the caller checks it from the
/// progress callback and answers [`ControlFlow::Break`] once it is cancelled.
///
/// # Examples
///
/// ```
/// use filecat::CancellationToken;
/// use std::ops::ControlFlow;
///
/// let token = CancellationToken::new();
/// assert_eq!(token.control_flow(), ControlFlow::Continue(()));
///
/// let clone = token.clone();
/// clone.cancel();
/// assert!(token.is_cancelled());
/// assert_eq!(token.control_flow(), ControlFlow::Break(()));
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)), // false means not cancelled
        }
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on this token or any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    /// Translates the token state into the answer expected from a progress callback.
    pub fn control_flow(&self) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
