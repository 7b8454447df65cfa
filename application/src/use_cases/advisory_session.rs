//! Advisory session use case.
//!
//! [`AdvisorySessionController`] drives one advisory request at a time:
//!
//! ```text
//! AdvisoryTransport ──chunks──▶ FrameDecoder ──frames──▶ DeltaAssembler
//!                                                            │ fragments
//!                                                            ▼
//!                                 watch::Sender<SessionState> (observers)
//! ```
//!
//! The pipeline runs on a spawned task. Decode, interpret and append happen
//! synchronously between two chunk reads, so fragments are applied strictly
//! in arrival order and every append is published to observers at once.
//!
//! No timeout is applied to the stream: generation length varies, and a
//! silent server leaves the session `streaming` until the caller resets it.

use crate::config::AdvisoryParams;
use crate::ports::advisory_transport::{AdvisoryTransport, TransportError};
use advisor_domain::core::string::preview;
use advisor_domain::{
    AdvisoryRequest, Budget, DeltaAssembler, DeltaEvent, Frame, FrameDecoder, MarketSnapshot,
    RiskProfile, SessionId, SessionState,
};
use futures::StreamExt;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// The request currently owned by the controller.
struct InFlight {
    session: SessionId,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Counters for one stream, logged when the session ends.
#[derive(Debug, Default)]
struct StreamSummary {
    chunks: usize,
    bytes: usize,
    frames: usize,
    fragments: usize,
    dropped_frames: usize,
    sentinel: bool,
}

/// Orchestrates transport, decoder and assembler for a single live request.
///
/// Observers call [`subscribe`](Self::subscribe) and receive every state
/// change, including each intermediate `accumulated_text`.
///
/// At most one request is in flight: [`start_request`](Self::start_request)
/// cancels the previous one before establishing new state, and
/// [`reset`](Self::reset) cancels and returns to `idle`. The in-flight task is
/// aborted and its transport stream dropped; any write it still attempts is
/// refused by [`SessionState`] because it carries a stale session id.
pub struct AdvisorySessionController {
    transport: Arc<dyn AdvisoryTransport>,
    params: AdvisoryParams,
    state: Arc<watch::Sender<SessionState>>,
    in_flight: Option<InFlight>,
    last_session: SessionId,
}

impl AdvisorySessionController {
    pub fn new(transport: Arc<dyn AdvisoryTransport>) -> Self {
        let (state, _) = watch::channel(SessionState::idle());
        Self {
            transport,
            params: AdvisoryParams::default(),
            state: Arc::new(state),
            in_flight: None,
            last_session: 0,
        }
    }

    pub fn with_params(mut self, params: AdvisoryParams) -> Self {
        self.params = params;
        self
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_streaming(&self) -> bool {
        self.state.borrow().is_streaming()
    }

    /// Start an advisory request built from user inputs.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        budget: Budget,
        risk: RiskProfile,
        snapshot: MarketSnapshot,
    ) -> SessionId {
        self.start_request(AdvisoryRequest::new(snapshot, budget, risk))
    }

    /// Start streaming `request`, cancelling any request still in flight.
    ///
    /// The state is `streaming` when this returns; the transport is opened
    /// on a background task.
    pub fn start_request(&mut self, request: AdvisoryRequest) -> SessionId {
        self.cancel_in_flight();

        self.last_session += 1;
        let session = self.last_session;
        self.state.send_modify(|state| state.begin(session));

        info!(
            session,
            stocks = request.market_snapshot().len(),
            budget = %request.budget(),
            risk = %request.risk_profile(),
            "Starting advisory session"
        );

        let cancel = CancellationToken::new();
        let task = tokio::spawn(drive_session(
            Arc::clone(&self.transport),
            request,
            session,
            Arc::clone(&self.state),
            cancel.clone(),
            self.params.failure_message.clone(),
        ));

        self.in_flight = Some(InFlight {
            session,
            cancel,
            task,
        });
        session
    }

    /// Cancel any in-flight request and return to `idle`, discarding all text.
    ///
    /// Always safe to call.
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.state.send_modify(SessionState::reset);
        debug!("Advisory session reset");
    }

    /// Wait until the current session leaves `streaming` and return that state.
    ///
    /// Returns immediately when nothing is streaming.
    pub async fn wait_settled(&self) -> SessionState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|state| !state.is_streaming()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            if !in_flight.task.is_finished() {
                info!(session = in_flight.session, "Cancelling in-flight advisory session");
            }
            in_flight.cancel.cancel();
            in_flight.task.abort();
        }
    }
}

impl Drop for AdvisorySessionController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

/// Background task body: run the pipeline and record the outcome.
async fn drive_session(
    transport: Arc<dyn AdvisoryTransport>,
    request: AdvisoryRequest,
    session: SessionId,
    state: Arc<watch::Sender<SessionState>>,
    cancel: CancellationToken,
    failure_message: String,
) {
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(session, "Advisory session cancelled");
            return;
        }
        outcome = pump(transport.as_ref(), &request, session, &state) => outcome,
    };

    match outcome {
        Ok(summary) => {
            if state.send_if_modified(|s| s.settle(session)) {
                info!(
                    session,
                    chunks = summary.chunks,
                    bytes = summary.bytes,
                    frames = summary.frames,
                    fragments = summary.fragments,
                    dropped_frames = summary.dropped_frames,
                    sentinel = summary.sentinel,
                    "Advisory session settled"
                );
            }
        }
        Err(e) => {
            warn!(session, error = %e, "Advisory session failed");
            state.send_if_modified(|s| s.fail(session, failure_message));
        }
    }
}

/// Read chunks until the sentinel or the end of the body.
async fn pump(
    transport: &dyn AdvisoryTransport,
    request: &AdvisoryRequest,
    session: SessionId,
    state: &watch::Sender<SessionState>,
) -> Result<StreamSummary, TransportError> {
    let mut chunks = transport.open(request).await?;
    debug!(session, "Advisory stream opened");

    let mut decoder = FrameDecoder::new();
    let assembler = DeltaAssembler::new();
    let mut summary = StreamSummary::default();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        summary.chunks += 1;
        summary.bytes += chunk.len();
        trace!(session, bytes = chunk.len(), "Received chunk");

        for frame in decoder.feed(&chunk) {
            if apply_frame(&assembler, &frame, session, state, &mut summary).is_break() {
                debug!(session, "Received terminal sentinel");
                return Ok(summary);
            }
        }
    }

    if let Some(frame) = decoder.flush() {
        if apply_frame(&assembler, &frame, session, state, &mut summary).is_break() {
            debug!(session, "Received terminal sentinel in trailing frame");
            return Ok(summary);
        }
    }
    debug!(session, "Advisory stream ended without sentinel");
    Ok(summary)
}

/// Interpret one frame and publish its fragments.
///
/// Breaks on the terminal sentinel; fragments after it in the same frame
/// are not applied.
fn apply_frame(
    assembler: &DeltaAssembler,
    frame: &Frame,
    session: SessionId,
    state: &watch::Sender<SessionState>,
    summary: &mut StreamSummary,
) -> ControlFlow<()> {
    summary.frames += 1;

    let events = match assembler.interpret(frame) {
        Ok(events) => events,
        Err(e) => {
            summary.dropped_frames += 1;
            debug!(
                session,
                error = %e,
                frame = %preview(frame.as_str(), 120),
                "Dropping unparseable frame"
            );
            return ControlFlow::Continue(());
        }
    };

    for event in events {
        match event {
            DeltaEvent::Text(fragment) => {
                summary.fragments += 1;
                state.send_if_modified(|s| s.append(session, &fragment));
            }
            DeltaEvent::Done => {
                summary.sentinel = true;
                return ControlFlow::Break(());
            }
        }
    }
    ControlFlow::Continue(())
}
