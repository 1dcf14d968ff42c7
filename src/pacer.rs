//! Pauses between successive draws.

use crate::error::PauseInterrupted;

/// Paces a deal so observers see cards arrive one at a time.
pub trait Pacer {
    /// Blocks the caller for `delay_ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`PauseInterrupted`] if the pause ended early. The engine
    /// logs this and keeps dealing.
    fn pause(&self, delay_ms: u64) -> Result<(), PauseInterrupted>;
}

/// Sleeps the current thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

#[cfg(feature = "std")]
impl Pacer for ThreadPacer {
    fn pause(&self, delay_ms: u64) -> Result<(), PauseInterrupted> {
        if delay_ms > 0 {
            std::thread::sleep(core::time::Duration::from_millis(delay_ms));
        }
        Ok(())
    }
}

/// Never pauses. The default without `std`, and handy in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&self, _delay_ms: u64) -> Result<(), PauseInterrupted> {
        Ok(())
    }
}

#[cfg(feature = "std")]
pub(crate) type DefaultPacer = ThreadPacer;

#[cfg(not(feature = "std"))]
pub(crate) type DefaultPacer = NoPause;
