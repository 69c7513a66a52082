//! Recursion depth and cancellation limits for tree walks.
//!
//! Encoding, verification, printing and classification recurse into
//! operands. Each takes a [`Limits`] and threads a [`Descent`] through the
//! walk, which fails the walk once the configured depth is exceeded or the
//! caller cancelled it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Default maximum operand nesting depth.
pub const DEFAULT_RECURSION_LIMIT: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("recursion limit exceeded (limit {0})")]
    RecursionLimitExceeded(u32),

    #[error("operation cancelled")]
    Cancelled,
}

/// Shared flag a caller flips to abort a walk in progress.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Limits applied while walking an expression tree.
#[derive(Clone, Debug)]
pub struct Limits {
    recursion_limit: u32,
    cancel: Option<CancelToken>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            cancel: None,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// No depth limit and no cancellation. For walks over buffers that were
    /// already verified, where the depth is known to be bounded.
    pub fn unbounded() -> Self {
        Self::new().recursion_limit(u32::MAX)
    }

    /// Set the maximum nesting depth of operands.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Poll `token` at every descent step.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    pub fn get_cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// Start tracking a new walk.
    pub fn descent(&self) -> Descent<'_> {
        Descent {
            limits: self,
            depth: 0,
        }
    }
}

/// Depth counter for one walk.
///
/// Call [`Descent::enter`] before handling a nested chain and
/// [`Descent::leave`] once it is done. A failed walk is abandoned, so there
/// is no need to leave on the error path.
#[derive(Debug)]
pub struct Descent<'l> {
    limits: &'l Limits,
    depth: u32,
}

impl Descent<'_> {
    pub fn enter(&mut self) -> Result<(), LimitError> {
        if self
            .limits
            .cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
        {
            return Err(LimitError::Cancelled);
        }
        if self.depth >= self.limits.recursion_limit {
            return Err(LimitError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "leave without matching enter");
        self.depth -= 1;
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
