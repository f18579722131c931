use super::record::{CheckKind, Endpoint, HostRecord};
use serde::{Deserialize, Serialize};

/// State shared between the UI thread and the poller task. Only the selected
/// endpoint survives restarts; host records are rebuilt by polling.
#[derive(Default, Serialize, Deserialize)]
pub struct AppState {
    pub endpoint: Endpoint,
    #[serde(skip, default)]
    pub records: Vec<HostRecord>,
    /// A completed check trigger waiting to be acknowledged by the user.
    #[serde(skip, default)]
    pub check_notice: Option<CheckKind>,
}
