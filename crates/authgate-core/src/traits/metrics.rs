//! Metrics sink trait for observability counters.

/// Fire-and-forget counter sink.
///
/// Implementations must never block or fail; recording a metric is a
/// side effect the caller does not observe.
pub trait MetricsSink: Send + Sync + std::fmt::Debug + 'static {
    /// Record that a token record was created.
    fn record_token_created(&self);
}
