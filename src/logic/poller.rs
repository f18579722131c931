use futures::future::OptionFuture;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::logic::fetch::ApiFetcher;
use crate::logic::wire::decode_hosts;
use crate::model::{AppState, CheckKind, Endpoint, PollState};

pub type SharedState = Arc<Mutex<AppState>>;

/// Delay between a successful render and the next automatic poll.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Commands sent from UI button handlers to the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    /// Switch the polled endpoint and fetch it immediately.
    Select(Endpoint),
    /// Fire a one-shot backend check; does not touch the poll cycle.
    Check(CheckKind),
}

/// Background task that polls the selected host-list endpoint and keeps the
/// shared state up to date.
///
/// At most one re-poll timer is armed at any time: it is armed only after a
/// successful render and dropped whenever the user switches endpoints. A
/// failed fetch is dropped silently (that is the observable contract of the
/// backend's own web client) and leaves the loop idle until the next
/// `Select`.
pub async fn poller_task(
    state: SharedState,
    fetcher: Arc<dyn ApiFetcher>,
    mut commands: mpsc::UnboundedReceiver<PollCommand>,
) {
    let initial = {
        let state_lock = state.lock().expect("Failed to lock state for startup");
        state_lock.endpoint
    };
    let mut poll = PollState::new(initial);
    let mut deadline: Option<Instant> = None;

    info!(endpoint = initial.path(), "poller started");

    // Page-load equivalent: one automatic fetch of the restored endpoint.
    if fetch_and_render(&state, fetcher.as_ref(), poll.endpoint()).await {
        poll.armed();
        deadline = Some(Instant::now() + POLL_INTERVAL);
    }

    loop {
        let delay: OptionFuture<_> = deadline.map(tokio::time::sleep_until).into();

        tokio::select! {
            command = commands.recv() => match command {
                Some(PollCommand::Select(endpoint)) => {
                    let cancelled = poll.select(endpoint);
                    deadline = None;
                    debug!(endpoint = endpoint.path(), cancelled, "endpoint selected");

                    {
                        let mut state_lock =
                            state.lock().expect("Failed to lock state for endpoint switch");
                        state_lock.endpoint = endpoint;
                    }

                    if fetch_and_render(&state, fetcher.as_ref(), endpoint).await {
                        poll.armed();
                        deadline = Some(Instant::now() + POLL_INTERVAL);
                    } else {
                        poll.dropped();
                    }
                }
                Some(PollCommand::Check(kind)) => {
                    let state = state.clone();
                    let fetcher = fetcher.clone();
                    tokio::spawn(async move {
                        trigger_check(&state, fetcher.as_ref(), kind).await;
                    });
                }
                // UI is gone, nothing left to poll for.
                None => break,
            },
            Some(()) = delay => {
                poll.fired();
                deadline = None;

                if fetch_and_render(&state, fetcher.as_ref(), poll.endpoint()).await {
                    poll.armed();
                    deadline = Some(Instant::now() + POLL_INTERVAL);
                } else {
                    poll.dropped();
                }
            }
        }
    }
}

/// One fetch-and-render cycle: GET the endpoint, decode the double-encoded
/// body and replace the displayed records wholesale. Returns whether the
/// cycle succeeded; any failure only logs and leaves the table untouched.
async fn fetch_and_render(
    state: &SharedState,
    fetcher: &dyn ApiFetcher,
    endpoint: Endpoint,
) -> bool {
    let body = match fetcher.get(endpoint.path()).await {
        Ok(body) => body,
        Err(err) => {
            warn!(endpoint = endpoint.path(), %err, "poll dropped");
            return false;
        }
    };

    match decode_hosts(&body) {
        Ok(records) => {
            debug!(
                endpoint = endpoint.path(),
                count = records.len(),
                "host list rendered"
            );
            let mut state_lock = state.lock().expect("Failed to lock state for rendering");
            state_lock.records = records;
            true
        }
        Err(err) => {
            warn!(endpoint = endpoint.path(), %err, "undecodable host list dropped");
            false
        }
    }
}

/// One-shot check trigger. The response payload is ignored; a success status
/// queues the acknowledgement the UI shows as a modal. Failures are dropped
/// silently, like everything else on this wire.
async fn trigger_check(state: &SharedState, fetcher: &dyn ApiFetcher, kind: CheckKind) {
    match fetcher.get(kind.path()).await {
        Ok(_) => {
            info!(check = kind.path(), "backend check started");
            let mut state_lock = state.lock().expect("Failed to lock state for check notice");
            state_lock.check_notice = Some(kind);
        }
        Err(err) => warn!(check = kind.path(), %err, "check trigger dropped"),
    }
}
