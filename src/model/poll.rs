use super::Endpoint;

/// Whether a delayed re-poll is currently armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    #[default]
    Idle,
    Scheduled,
}

/// Poll-cycle bookkeeping: the selected endpoint and the (at most one)
/// pending re-poll timer. The driving task owns the actual sleep future;
/// this object records the transitions so they stay in one place instead of
/// two loose globals.
#[derive(Debug, Default)]
pub struct PollState {
    endpoint: Endpoint,
    phase: PollPhase,
}

impl PollState {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            phase: PollPhase::Idle,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    /// Switch the selection, cancelling the pending re-poll if one is armed.
    /// Returns true when a timer was actually cancelled.
    pub fn select(&mut self, endpoint: Endpoint) -> bool {
        self.endpoint = endpoint;
        std::mem::replace(&mut self.phase, PollPhase::Idle) == PollPhase::Scheduled
    }

    /// A fetch rendered successfully and the next delayed poll is armed.
    pub fn armed(&mut self) {
        self.phase = PollPhase::Scheduled;
    }

    /// The armed timer fired; the poll it triggered is now in flight.
    pub fn fired(&mut self) {
        self.phase = PollPhase::Idle;
    }

    /// The current cycle was dropped (failed fetch); nothing is re-armed.
    pub fn dropped(&mut self) {
        self.phase = PollPhase::Idle;
    }
}
