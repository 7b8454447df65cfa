//! Advisory session lifecycle

/// Identifies one `start()` of the controller.
pub type SessionId = u64;

/// Lifecycle phase of an advisory session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Streaming,
    Settled,
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Streaming => "streaming",
            SessionPhase::Settled => "settled",
            SessionPhase::Failed => "failed",
        }
    }

    /// `settled` or `failed`.
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionPhase::Settled | SessionPhase::Failed)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observable state of the advisory session.
///
/// ```text
/// Idle ──begin──▶ Streaming ──settle──▶ Settled
///                    │
///                    └──fail──▶ Failed
/// any ──reset──▶ Idle
/// ```
///
/// The state remembers which session owns it. `append`, `settle` and `fail`
/// carry the caller's [`SessionId`] and are refused unless that session is
/// the one currently streaming, so output of an abandoned request can never
/// leak into a newer one. `accumulated_text` only ever grows while streaming
/// and is left untouched by `settle` and `fail`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    phase: SessionPhase,
    accumulated_text: String,
    last_error: Option<String>,
    owner: Option<SessionId>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn accumulated_text(&self) -> &str {
        &self.accumulated_text
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.owner
    }

    pub fn is_streaming(&self) -> bool {
        self.phase == SessionPhase::Streaming
    }

    fn is_live(&self, session: SessionId) -> bool {
        self.is_streaming() && self.owner == Some(session)
    }

    /// Enter `Streaming` for `session`, discarding any previous result.
    pub fn begin(&mut self, session: SessionId) {
        self.phase = SessionPhase::Streaming;
        self.accumulated_text.clear();
        self.last_error = None;
        self.owner = Some(session);
    }

    /// Append a fragment. Returns `true` if the state changed.
    pub fn append(&mut self, session: SessionId, fragment: &str) -> bool {
        if fragment.is_empty() || !self.is_live(session) {
            return false;
        }
        self.accumulated_text.push_str(fragment);
        true
    }

    /// Natural end of stream. Returns `true` if the state changed.
    pub fn settle(&mut self, session: SessionId) -> bool {
        if !self.is_live(session) {
            return false;
        }
        self.phase = SessionPhase::Settled;
        true
    }

    /// Unrecoverable failure. Text received so far is kept.
    pub fn fail(&mut self, session: SessionId, message: impl Into<String>) -> bool {
        if !self.is_live(session) {
            return false;
        }
        self.phase = SessionPhase::Failed;
        self.last_error = Some(message.into());
        true
    }

    /// Back to `Idle`, discarding text, error and ownership.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = SessionState::idle();
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert_eq!(state.accumulated_text(), "");
        assert_eq!(state.last_error(), None);
        assert_eq!(state.session_id(), None);
    }

    #[test]
    fn test_streaming_appends_then_settles() {
        let mut state = SessionState::idle();
        state.begin(1);
        assert!(state.is_streaming());
        assert!(state.append(1, "Buy "));
        assert!(state.append(1, "TCS"));
        assert!(state.settle(1));
        assert_eq!(state.phase(), SessionPhase::Settled);
        assert!(state.phase().is_finished());
        assert_eq!(state.accumulated_text(), "Buy TCS");
    }

    #[test]
    fn test_fail_preserves_partial_text() {
        let mut state = SessionState::idle();
        state.begin(1);
        state.append(1, "partial");
        assert!(state.fail(1, "Failed to get advice. Please try again."));
        assert_eq!(state.phase(), SessionPhase::Failed);
        assert_eq!(state.accumulated_text(), "partial");
        assert_eq!(
            state.last_error(),
            Some("Failed to get advice. Please try again.")
        );
    }

    #[test]
    fn test_foreign_session_is_refused() {
        let mut state = SessionState::idle();
        state.begin(2);
        assert!(!state.append(1, "stale"));
        assert!(!state.settle(1));
        assert!(!state.fail(1, "stale"));
        assert!(state.is_streaming());
        assert_eq!(state.accumulated_text(), "");
    }

    #[test]
    fn test_no_changes_after_finish() {
        let mut state = SessionState::idle();
        state.begin(1);
        state.settle(1);
        assert!(!state.append(1, "late"));
        assert!(!state.fail(1, "late"));
        assert_eq!(state.phase(), SessionPhase::Settled);
    }

    #[test]
    fn test_empty_fragment_is_not_a_change() {
        let mut state = SessionState::idle();
        state.begin(1);
        assert!(!state.append(1, ""));
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = SessionState::idle();
        state.begin(3);
        state.append(3, "text");
        state.reset();
        assert_eq!(state, SessionState::idle());
        assert!(!state.append(3, "late"));
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut state = SessionState::idle();
        state.begin(1);
        state.append(1, "old");
        state.fail(1, "boom");
        state.begin(2);
        assert_eq!(state.accumulated_text(), "");
        assert_eq!(state.last_error(), None);
        assert_eq!(state.session_id(), Some(2));
    }
}
