pub mod fetch;
pub mod poller;
pub mod wire;

pub use fetch::{ApiFetcher, FetchError, HttpFetcher};
pub use poller::{POLL_INTERVAL, PollCommand, SharedState, poller_task};
