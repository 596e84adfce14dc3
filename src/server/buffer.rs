use crate::server::sync::Synchronized;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory output sink that can be handed to a query task while the caller
/// keeps a clone to read the results afterwards.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Synchronized<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far, decoded lossily
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.get_access()).into_owned()
    }

    /// Take everything written so far, leaving the buffer empty
    pub fn take(&self) -> Vec<u8> {
        self.bytes.get_access().replace(Vec::new())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.get_access().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
