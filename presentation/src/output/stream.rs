//! Live printing of the accumulated advisory text

use crate::progress::reporter::WaitingSpinner;
use advisor_domain::{SessionId, SessionState};
use std::io::{self, Write};
use tokio::sync::watch;

/// Prints each new suffix of [`SessionState::accumulated_text`] as it grows.
///
/// Only the part not yet printed is written, so the output reads as one
/// continuous answer no matter how the text was fragmented on the wire.
pub struct StreamPrinter<W: Write> {
    out: W,
    session: Option<SessionId>,
    printed: usize,
    spinner: Option<WaitingSpinner>,
}

impl<W: Write> StreamPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            session: None,
            printed: 0,
            spinner: None,
        }
    }

    /// Show `spinner` until the first fragment arrives.
    pub fn with_spinner(mut self, spinner: WaitingSpinner) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// Bytes of accumulated text already written.
    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Write whatever `state` holds beyond what was printed so far.
    pub fn render(&mut self, state: &SessionState) -> io::Result<()> {
        let text = state.accumulated_text();

        if state.session_id() != self.session {
            if self.printed > 0 {
                writeln!(self.out)?;
            }
            self.session = state.session_id();
            self.printed = 0;
        }

        if text.len() == self.printed {
            return Ok(());
        }

        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }

        self.out.write_all(text[self.printed..].as_bytes())?;
        self.out.flush()?;
        self.printed = text.len();
        Ok(())
    }

    /// Follow `rx` until the session leaves `streaming`, printing as it goes.
    ///
    /// Returns the final state. Subscribe after the session was started,
    /// otherwise the initial `idle` state ends the loop immediately.
    pub async fn follow(&mut self, mut rx: watch::Receiver<SessionState>) -> io::Result<SessionState> {
        loop {
            let state = rx.borrow_and_update().clone();
            self.render(&state)?;
            if !state.is_streaming() {
                self.finish();
                return Ok(state);
            }
            if rx.changed().await.is_err() {
                self.finish();
                return Ok(rx.borrow().clone());
            }
        }
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::SessionPhase;

    fn streaming(text: &str) -> SessionState {
        streaming_in(1, text)
    }

    fn streaming_in(session: SessionId, text: &str) -> SessionState {
        let mut state = SessionState::idle();
        state.begin(session);
        state.append(session, text);
        state
    }

    fn printed_text(printer: StreamPrinter<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_writes_only_new_suffix() {
        let mut printer = StreamPrinter::new(Vec::new());
        printer.render(&streaming("Buy ")).unwrap();
        printer.render(&streaming("Buy ")).unwrap();
        printer.render(&streaming("Buy TCS")).unwrap();

        assert_eq!(printer.printed(), 7);
        assert_eq!(printed_text(printer), "Buy TCS");
    }

    #[test]
    fn test_render_restarts_for_new_session() {
        let mut printer = StreamPrinter::new(Vec::new());
        printer.render(&streaming_in(1, "Old")).unwrap();
        printer.render(&streaming_in(2, "New answer")).unwrap();

        assert_eq!(printed_text(printer), "Old\nNew answer");
    }

    #[tokio::test]
    async fn test_follow_until_settled() {
        let (tx, rx) = watch::channel(streaming(""));
        let mut printer = StreamPrinter::new(Vec::new()).with_spinner(WaitingSpinner::hidden());

        let writer = tokio::spawn(async move {
            for fragment in ["Hold ", "HDFC ", "Bank"] {
                tx.send_modify(|state| {
                    state.append(1, fragment);
                });
                tokio::task::yield_now().await;
            }
            tx.send_modify(|state| {
                state.settle(1);
            });
        });

        let state = printer.follow(rx).await.unwrap();
        writer.await.unwrap();

        assert_eq!(state.phase(), SessionPhase::Settled);
        assert_eq!(printed_text(printer), "Hold HDFC Bank");
    }

    #[tokio::test]
    async fn test_follow_returns_on_failure_with_partial_text() {
        let mut failed = streaming("Partial");
        failed.fail(1, "Failed to get advice. Please try again.");
        let (_tx, rx) = watch::channel(failed);

        let mut printer = StreamPrinter::new(Vec::new());
        let state = printer.follow(rx).await.unwrap();

        assert_eq!(state.phase(), SessionPhase::Failed);
        assert_eq!(printed_text(printer), "Partial");
    }
}
