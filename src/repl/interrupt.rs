//! Ctrl+C handling
//!
//! While a child process owns the terminal (an attached shell, an image
//! pull) the terminal delivers SIGINT to us as well. The handler installed
//! here records the interrupt instead of killing the process, so the child
//! decides what Ctrl+C means and we carry on once it exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, WargameError};

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// Flag that is never raised by a signal. Useful for tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl+C handler and return its flag
    pub fn install() -> Result<Self> {
        let flag = Self::new();
        let raised = flag.raised.clone();

        ctrlc::set_handler(move || {
            raised.store(true, Ordering::SeqCst);
        })
        .map_err(|e| WargameError::Terminal(format!("Failed to set Ctrl+C handler: {}", e)))?;

        Ok(flag)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Read and reset the flag
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}
