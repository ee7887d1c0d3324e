use serde::{Deserialize, Serialize};

/// Decorative effect requested by a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Keystroke,
    Click,
    Scan,
    Success,
    Error,
}

impl Cue {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keystroke => "keystroke",
            Self::Click => "click",
            Self::Scan => "scan",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Fire-and-forget sink for cues (tones, flashes). Sessions never read
/// anything back from it.
pub trait Notifier: Send + Sync {
    fn notify(&self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _cue: Cue) {}
}
