pub mod prober;
pub mod sleeper;
pub mod status;
pub mod target;

pub use prober::{HttpProber, ProbeOutcome, Prober};
pub use sleeper::{Sleeper, TokioSleeper};
pub use status::{CompletionHook, PollHandle, Poller, PollingStatus};
pub use target::{PollError, PollTarget, MIN_POLL_PERIOD};
