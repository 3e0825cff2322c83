//! Side-effect notifications (sound cues and the like)

/// Hooks fired by the session. All default to doing nothing.
pub trait Feedback: Send + Sync {
    /// A non-empty line was submitted
    fn command_executed(&self) {}

    fn session_opened(&self) {}

    fn session_closed(&self) {}
}

/// Feedback that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {}
