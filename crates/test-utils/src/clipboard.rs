use taskwave::clipboard::ClipboardSink;

/// A fake clipboard that:
/// - records every write
/// - answers with a configurable verdict.
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    accept: bool,
}

impl RecordingClipboard {
    /// A clipboard that accepts every write.
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            accept: true,
        }
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            accept: false,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(|s| s.as_str())
    }
}

impl Default for RecordingClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write(&mut self, text: &str) -> bool {
        self.writes.push(text.to_string());
        self.accept
    }
}
