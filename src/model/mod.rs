pub mod app_state;
pub mod poll;
pub mod record;

pub use app_state::AppState;
pub use poll::{PollPhase, PollState};
pub use record::{CheckKind, Endpoint, HostRecord, StatusIcon, icon_for_status};
