//! Performance Monitor Module
//!
//! Accumulates timing samples per label and summarizes them on request.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Instant;

use serde::Serialize;
use tracing::trace;

use crate::metrics::MAX_SAMPLES_PER_LABEL;

// == Metric Stats ==
/// Summary of the samples recorded under one label.
///
/// Average, min and max are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStats {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricStats {
    fn from_samples(samples: &VecDeque<f64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let sum: f64 = samples.iter().sum();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            average: round2(sum / count as f64),
            min: round2(min),
            max: round2(max),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// == Timer ==
/// A running measurement started by [`PerformanceMonitor::start_timer`].
///
/// Nothing is recorded unless [`stop`](Self::stop) is called.
#[derive(Debug)]
#[must_use = "a timer records nothing unless stopped"]
pub struct Timer {
    label: String,
    started: Instant,
}

impl Timer {
    /// Label the measurement will be recorded under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Milliseconds elapsed since the timer started.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Records the elapsed time in `monitor` and returns it in milliseconds.
    pub fn stop(self, monitor: &mut PerformanceMonitor) -> f64 {
        let elapsed = self.elapsed_ms();
        monitor.record_metric(self.label, elapsed);
        elapsed
    }
}

// == Performance Monitor ==
/// Bounded per-label sample store.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    samples: HashMap<String, VecDeque<f64>>,
}

impl PerformanceMonitor {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Start Timer ==
    /// Starts measuring an operation to be recorded under `label`.
    pub fn start_timer(&self, label: impl Into<String>) -> Timer {
        Timer {
            label: label.into(),
            started: Instant::now(),
        }
    }

    // == Record Metric ==
    /// Appends a sample, discarding the label's oldest one past 100 samples.
    pub fn record_metric(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        trace!(label = %label, value, "Recorded metric sample");

        let samples = self.samples.entry(label).or_default();
        samples.push_back(value);
        if samples.len() > MAX_SAMPLES_PER_LABEL {
            samples.pop_front();
        }
    }

    // == Get Stats ==
    /// Summarizes one label, or `None` if nothing was recorded under it.
    pub fn get_stats(&self, label: &str) -> Option<MetricStats> {
        self.samples.get(label).and_then(MetricStats::from_samples)
    }

    /// Summarizes every label, keyed and ordered by label.
    pub fn get_all_stats(&self) -> BTreeMap<String, MetricStats> {
        self.samples
            .iter()
            .filter_map(|(label, samples)| {
                MetricStats::from_samples(samples).map(|stats| (label.clone(), stats))
            })
            .collect()
    }

    /// Number of samples currently held for `label`.
    pub fn sample_count(&self, label: &str) -> usize {
        self.samples.get(label).map_or(0, VecDeque::len)
    }

    /// Labels with at least one sample, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.samples.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    // == Clear ==
    /// Drops every sample for every label.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_stats_unknown_label() {
        let monitor = PerformanceMonitor::new();
        assert_eq!(monitor.get_stats("unused"), None);
        assert!(monitor.get_all_stats().is_empty());
    }

    #[test]
    fn test_stats_summary() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_metric("x", 10.0);
        monitor.record_metric("x", 20.0);

        let stats = monitor.get_stats("x").unwrap();
        assert_eq!(
            stats,
            MetricStats {
                count: 2,
                average: 15.0,
                min: 10.0,
                max: 20.0,
            }
        );
    }

    #[test]
    fn test_stats_rounding() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_metric("r", 1.0);
        monitor.record_metric("r", 1.0);
        monitor.record_metric("r", 2.0);
        monitor.record_metric("r", 0.123);

        let stats = monitor.get_stats("r").unwrap();
        assert_eq!(stats.average, 1.03);
        assert_eq!(stats.min, 0.12);
        assert_eq!(stats.max, 2.0);
    }

    #[test]
    fn test_samples_bounded_oldest_dropped() {
        let mut monitor = PerformanceMonitor::new();
        for i in 0..101 {
            monitor.record_metric("bounded", i as f64);
        }

        assert_eq!(monitor.sample_count("bounded"), 100);
        let stats = monitor.get_stats("bounded").unwrap();
        assert_eq!(stats.count, 100);
        // Sample 0 was discarded
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn test_timer_records_on_stop() {
        let mut monitor = PerformanceMonitor::new();

        let timer = monitor.start_timer("search");
        assert_eq!(timer.label(), "search");
        sleep(Duration::from_millis(10));
        let elapsed = timer.stop(&mut monitor);

        assert!(elapsed >= 10.0);
        let stats = monitor.get_stats("search").unwrap();
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_dropped_timer_records_nothing() {
        let monitor = PerformanceMonitor::new();

        let timer = monitor.start_timer("abandoned");
        drop(timer);

        assert_eq!(monitor.get_stats("abandoned"), None);
        assert_eq!(monitor.sample_count("abandoned"), 0);
    }

    #[test]
    fn test_all_stats_and_labels() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_metric("b", 2.0);
        monitor.record_metric("a", 1.0);

        let all = monitor.get_all_stats();
        assert_eq!(all.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(all["a"].count, 1);
        assert_eq!(monitor.labels(), vec!["a", "b"]);
    }

    #[test]
    fn test_clear() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_metric("x", 1.0);
        monitor.clear();

        assert_eq!(monitor.get_stats("x"), None);
        assert!(monitor.labels().is_empty());
    }
}
