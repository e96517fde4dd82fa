//! Per-read state shared by every reader in a chain

use log::{debug, warn};

use super::cursor::ElementCursor;
use super::errors::{ReadError, Result};
use crate::settings::{ReadSettings, UnknownElementPolicy};

/// Settings and counters for one document read
#[derive(Debug, Clone, Default)]
pub struct ReadContext {
    settings: ReadSettings,
    recognized: usize,
    unknown: usize,
}

impl ReadContext {
    pub fn new(settings: ReadSettings) -> Self {
        Self {
            settings,
            recognized: 0,
            unknown: 0,
        }
    }

    pub fn settings(&self) -> &ReadSettings {
        &self.settings
    }

    /// Number of properties applied so far
    pub fn recognized_count(&self) -> usize {
        self.recognized
    }

    /// Number of elements that reached the unknown terminal
    pub fn unknown_count(&self) -> usize {
        self.unknown
    }

    pub(crate) fn note_recognized(&mut self) {
        self.recognized += 1;
    }

    /// Apply the unknown-element policy to the element under the cursor.
    ///
    /// The element is always recorded on the cursor and skipped, so a strict
    /// read leaves the cursor in a consistent position before failing.
    pub fn handle_unknown(&mut self, cursor: &mut dyn ElementCursor) -> Result<()> {
        self.unknown += 1;
        let name = cursor.name().to_string();
        let line = cursor.line();
        cursor.unknown()?;

        match self.settings.unknown_elements {
            UnknownElementPolicy::Ignore => {
                debug!("ignoring unknown element <{}> at line {}", name, line);
                Ok(())
            }
            UnknownElementPolicy::Log => {
                warn!("unknown element <{}> at line {}", name, line);
                Ok(())
            }
            UnknownElementPolicy::Strict => Err(ReadError::UnknownElement { name, line }),
        }
    }
}
