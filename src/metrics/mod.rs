//! Metrics Module
//!
//! Per-label duration samples with on-demand summary statistics.

mod monitor;

pub use monitor::{MetricStats, PerformanceMonitor, Timer};

// == Public Constants ==
/// Samples kept per label before the oldest is discarded
pub const MAX_SAMPLES_PER_LABEL: usize = 100;
