//! Prometheus metrics of the block hooks.
//!
//! Metrics are always collected; they are only exposed through the default
//! prometheus registry when enabled, so that several instances can live in the
//! same process (tests).

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};
use tracing::warn;

#[derive(Clone)]
pub struct ClockMetrics {
    enabled: bool,

    hook_duration: HistogramVec,
    contract_executions: IntCounterVec,
    contract_failures: IntCounterVec,
}

impl ClockMetrics {
    pub fn new(enabled: bool) -> Self {
        let hook_duration = HistogramVec::new(
            HistogramOpts::new(
                "clock_hook_duration_seconds",
                "time spent calling the clock contracts at a block boundary",
            ),
            &["hook"],
        )
        .expect("Failed to create histogram");

        let contract_executions = IntCounterVec::new(
            Opts::new(
                "clock_contract_executions",
                "number of clock contract calls attempted",
            ),
            &["hook"],
        )
        .expect("Failed to create counter");

        let contract_failures = IntCounterVec::new(
            Opts::new("clock_contract_failures", "number of failed clock contract calls"),
            &["hook"],
        )
        .expect("Failed to create counter");

        if enabled {
            let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
                Box::new(hook_duration.clone()),
                Box::new(contract_executions.clone()),
                Box::new(contract_failures.clone()),
            ];
            for collector in collectors {
                if let Err(e) = prometheus::register(collector) {
                    warn!("failed to register clock metric: {}", e);
                }
            }
        }

        ClockMetrics {
            enabled,
            hook_duration,
            contract_executions,
            contract_failures,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn observe_hook_duration(&self, hook: &str, seconds: f64) {
        self.hook_duration.with_label_values(&[hook]).observe(seconds);
    }

    pub fn inc_contract_executions(&self, hook: &str, count: u64) {
        self.contract_executions
            .with_label_values(&[hook])
            .inc_by(count);
    }

    pub fn inc_contract_failures(&self, hook: &str, count: u64) {
        self.contract_failures.with_label_values(&[hook]).inc_by(count);
    }

    pub fn get_contract_executions(&self, hook: &str) -> u64 {
        self.contract_executions.with_label_values(&[hook]).get()
    }

    pub fn get_contract_failures(&self, hook: &str) -> u64 {
        self.contract_failures.with_label_values(&[hook]).get()
    }

    pub fn get_hook_calls(&self, hook: &str) -> u64 {
        self.hook_duration
            .with_label_values(&[hook])
            .get_sample_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_metrics_still_count() {
        let metrics = ClockMetrics::new(false);
        metrics.inc_contract_executions("begin_block", 3);
        metrics.inc_contract_failures("begin_block", 1);
        metrics.observe_hook_duration("begin_block", 0.01);

        assert!(!metrics.is_enabled());
        assert_eq!(metrics.get_contract_executions("begin_block"), 3);
        assert_eq!(metrics.get_contract_failures("begin_block"), 1);
        assert_eq!(metrics.get_contract_failures("end_block"), 0);
        assert_eq!(metrics.get_hook_calls("begin_block"), 1);
    }
}
