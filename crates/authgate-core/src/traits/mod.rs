//! Core traits defined in `authgate-core` and implemented by other crates.

pub mod metrics;

pub use metrics::MetricsSink;
