//! In-memory report destination.

use crate::engine::OutputTarget;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Collects an engine run's report in memory.
///
/// Clones share the same bytes, so the invoker keeps one handle while the
/// engine writes through another. Closing does nothing.
#[derive(Debug, Clone, Default)]
pub struct ScanBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl ScanBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes the collected bytes, leaving the buffer empty.
    pub fn take(&self) -> io::Result<Vec<u8>> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Vec<u8>>> {
        self.bytes
            .lock()
            .map_err(|_| io::Error::other("scan buffer lock poisoned"))
    }
}

impl Write for ScanBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputTarget for ScanBuffer {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
