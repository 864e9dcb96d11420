//! Cooperative shutdown.
//!
//! A [`Shutdown`] is shared between the signal handler and the blink loop.
//! Waiting on it doubles as the loop's delay, so a Ctrl-C ends the current
//! wait right away instead of after the rest of the second.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use log::info;

use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    triggered: Mutex<bool>,
    cvar: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is triggered by Ctrl-C or SIGTERM.
    ///
    /// Only one handler can be installed per process.
    pub fn on_ctrlc() -> Result<Self> {
        let shutdown = Shutdown::new();
        let s = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("signal received, stopping");
            s.trigger();
        })?;
        Ok(shutdown)
    }

    pub fn trigger(&self) {
        let mut triggered = self
            .inner
            .triggered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *triggered = true;
        self.inner.cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self
            .inner
            .triggered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Block for up to `timeout`.
    ///
    /// Returns `true` as soon as shutdown is requested and `false` once the
    /// whole `timeout` has passed.
    pub fn wait(&self, timeout: Duration) -> bool {
        let mut triggered = self
            .inner
            .triggered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *triggered {
            return true;
        }

        // Too far out to represent: only a trigger ends the wait.
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            while !*triggered {
                triggered = self
                    .inner
                    .cvar
                    .wait(triggered)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            return true;
        };

        while !*triggered {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            triggered = self
                .inner
                .cvar
                .wait_timeout(triggered, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        true
    }
}
