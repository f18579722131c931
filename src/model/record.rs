use serde::{Deserialize, Serialize};

/// One row of the hosts table, exactly as the backend reports it: a
/// positional tuple of address, display name, an unused slot, status string
/// and the epoch time of the last status change. Tuple structs serialize as
/// JSON arrays, which matches the wire format as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord(String, String, String, String, i64);

impl HostRecord {
    pub fn new(
        address: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<String>,
        changed_at: i64,
    ) -> Self {
        Self(
            address.into(),
            name.into(),
            String::new(),
            status.into(),
            changed_at,
        )
    }

    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn status(&self) -> &str {
        &self.3
    }

    pub fn changed_at(&self) -> i64 {
        self.4
    }
}

/// Which subset of hosts the backend is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endpoint {
    #[default]
    All,
    Live,
    Dead,
    Pause,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::All => "/api/hosts/all",
            Endpoint::Live => "/api/hosts/live",
            Endpoint::Dead => "/api/hosts/dead",
            Endpoint::Pause => "/api/hosts/pause",
        }
    }
}

/// One-shot backend check triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    All,
    Dead,
}

impl CheckKind {
    pub fn path(self) -> &'static str {
        match self {
            CheckKind::All => "/api/check_all",
            CheckKind::Dead => "/api/check_dead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Clock,
    Online,
    Offline,
    Pause,
}

/// Ordered prefix table for status icons; first match wins. `clock` must
/// stay first so combined states like `clock.online` keep the clock icon.
const STATUS_ICONS: [(&str, StatusIcon); 4] = [
    ("clock", StatusIcon::Clock),
    ("online", StatusIcon::Online),
    ("offline", StatusIcon::Offline),
    ("pause", StatusIcon::Pause),
];

/// Picks the icon for a raw status string, or `None` for anything the table
/// does not know about.
pub fn icon_for_status(status: &str) -> Option<StatusIcon> {
    STATUS_ICONS
        .iter()
        .find(|(prefix, _)| status.starts_with(prefix))
        .map(|&(_, icon)| icon)
}
