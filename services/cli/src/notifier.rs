use recruit_status::{Cue, Notifier};
use std::io::Write;
use tracing::trace;

/// Terminal stand-in for the form's sound effects: result cues optionally
/// ring the bell, everything else is only traced.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalNotifier {
    bell: bool,
}

impl TerminalNotifier {
    pub(crate) fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, cue: Cue) {
        trace!(cue = cue.label(), "cue");
        if self.bell && matches!(cue, Cue::Success | Cue::Error) {
            let mut stderr = std::io::stderr();
            // Cues never affect control flow; a failed write is dropped.
            let _ = stderr.write_all(b"\x07").and_then(|()| stderr.flush());
        }
    }
}
