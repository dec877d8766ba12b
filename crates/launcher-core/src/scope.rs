//! View Scope
//!
//! Ties async work to the lifetime of the view that started it. The view
//! cancels its token on cleanup; results that arrive afterwards are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ScopeToken {
    cancelled: Arc<AtomicBool>,
}

impl ScopeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
