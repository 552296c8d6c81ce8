pub mod registry;
pub mod middleware;
pub mod collectors;
pub mod sink;

pub use registry::{MetricsError, MetricsRegistry};
pub use middleware::metrics_middleware;
pub use collectors::{PollMetricsCollector, VarsSnapshot};
pub use sink::{Counter, MetricsSink, NoopMetrics};
