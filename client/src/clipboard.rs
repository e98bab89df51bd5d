//! Clipboard seam. Terminal and test front ends supply their own.

use std::sync::Mutex;

use crate::ClientError;

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClientError>;
}

/// Keeps the last copied text in memory.
#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text, if anything was copied.
    pub fn contents(&self) -> Option<String> {
        self.text.lock().ok().and_then(|t| t.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClientError> {
        let mut slot = self
            .text
            .lock()
            .map_err(|e| ClientError::Clipboard(e.to_string()))?;
        *slot = Some(text.to_string());
        Ok(())
    }
}
