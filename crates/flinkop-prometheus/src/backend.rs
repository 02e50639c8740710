use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use flinkop_core::{MetricsBackend, RestartDecision, ScheduleOutcome};

const NAMESPACE: &str = "flinkop";

/// Prometheus metrics backend.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `decision`: the [`RestartDecision`] labels
/// - `scheduler`: registered scheduler names (plus names of unregistered lookups)
/// - `outcome`: "success", "failure"
/// - `error_kind`: "not_found", "invalid_cluster", "missing_component", "api", "internal"
#[derive(Clone)]
pub struct PrometheusMetrics {
    restart_decisions: CounterVec,
    schedules: CounterVec,
    schedule_duration: HistogramVec,
    scheduler_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its collectors in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let restart_decisions = CounterVec::new(
            Opts::new(
                "restart_decisions_total",
                "Restart evaluations by decision",
            )
            .namespace(NAMESPACE),
            &["decision"],
        )?;
        registry.register(Box::new(restart_decisions.clone()))?;

        let schedules = CounterVec::new(
            Opts::new("schedule_total", "Batch scheduler dispatches by outcome")
                .namespace(NAMESPACE),
            &["scheduler", "outcome"],
        )?;
        registry.register(Box::new(schedules.clone()))?;

        let schedule_duration = HistogramVec::new(
            HistogramOpts::new(
                "schedule_duration_seconds",
                "Time spent inside batch scheduler backends",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 15.0]),
            &["scheduler"],
        )?;
        registry.register(Box::new(schedule_duration.clone()))?;

        let scheduler_errors = CounterVec::new(
            Opts::new("scheduler_errors_total", "Batch scheduler errors by kind")
                .namespace(NAMESPACE),
            &["scheduler", "error_kind"],
        )?;
        registry.register(Box::new(scheduler_errors.clone()))?;

        Ok(Self {
            restart_decisions,
            schedules,
            schedule_duration,
            scheduler_errors,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Underlying registry, for registering custom collectors next to these.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_restart_decision(&self, decision: RestartDecision) {
        self.restart_decisions
            .with_label_values(&[decision.as_label()])
            .inc();
    }

    fn record_schedule(&self, scheduler: &str, outcome: ScheduleOutcome, duration_ms: u64) {
        self.schedules
            .with_label_values(&[scheduler, outcome.as_label()])
            .inc();
        self.schedule_duration
            .with_label_values(&[scheduler])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_scheduler_error(&self, scheduler: &str, error_kind: &str) {
        self.scheduler_errors
            .with_label_values(&[scheduler, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Encoder, TextEncoder};

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn restart_decisions_are_counted_per_label() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_restart_decision(RestartDecision::Restart);
        metrics.record_restart_decision(RestartDecision::Restart);
        metrics.record_restart_decision(RestartDecision::StaleSavepoint);

        let families = metrics.gather();
        let decisions = family(&families, "flinkop_restart_decisions_total");
        assert_eq!(decisions.get_metric().len(), 2);

        let mut buf = Vec::new();
        TextEncoder::new().encode(&families, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(
            text.contains(r#"flinkop_restart_decisions_total{decision="restart"} 2"#),
            "unexpected exposition:\n{text}"
        );
    }

    #[test]
    fn schedule_records_counter_and_histogram() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_schedule("default", ScheduleOutcome::Success, 12);
        metrics.record_schedule("default", ScheduleOutcome::Failure, 40);

        let families = metrics.gather();
        assert_eq!(
            family(&families, "flinkop_schedule_total").get_metric().len(),
            2
        );
        assert_eq!(
            family(&families, "flinkop_schedule_duration_seconds")
                .get_metric()
                .len(),
            1
        );
    }

    #[test]
    fn scheduler_errors_are_labelled_by_kind() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_scheduler_error("volcano", "not_found");
        metrics.record_scheduler_error("volcano", "not_found");
        metrics.record_scheduler_error("gate", "api");

        let families = metrics.gather();
        assert_eq!(
            family(&families, "flinkop_scheduler_errors_total")
                .get_metric()
                .len(),
            2
        );
    }

    #[test]
    fn shares_custom_registry() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_restart_decision(RestartDecision::NotFailed);
        assert!(!registry.gather().is_empty());
    }

    #[test]
    fn registering_twice_in_one_registry_fails() {
        let registry = Arc::new(Registry::new());
        PrometheusMetrics::new_with_registry(registry.clone()).unwrap();
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
