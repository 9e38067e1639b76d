// src/clipboard.rs

//! Clipboard delivery seam.
//!
//! Placing plan text on the OS clipboard is the embedding application's job;
//! the planner only hands text to a caller-supplied sink and reports the
//! sink's verdict. Tests use the recording fake from `taskwave-test-utils`.

use tracing::warn;

/// Capability for delivering formatted text to the user's clipboard.
///
/// Implementations return `true` on success. The planner never assumes the
/// write succeeded and never retries.
pub trait ClipboardSink {
    fn write(&mut self, text: &str) -> bool;
}

/// Hand `text` to the sink and report its verdict verbatim.
///
/// A `false` here is a delivery failure, distinct from planning errors and
/// from "nothing runnable".
pub fn deliver(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    let delivered = sink.write(text);
    if !delivered {
        warn!(len = text.len(), "clipboard sink reported failure");
    }
    delivered
}
