pub mod metrics;
pub mod poller;
