//! Name-keyed registry of batch scheduler backends.
//!
//! The registry is filled once at startup (`&mut self`) and then shared immutably, usually behind an `Arc`,
//! by every concurrent reconciliation. Lookups take no locks.
use std::{collections::HashMap, fmt, sync::Arc, time::Instant};

use flinkop_model::{DesiredClusterState, FlinkCluster};
use tracing::{debug, instrument, trace, warn};

use crate::{
    error::CoreError,
    metrics::{MetricsHandle, ScheduleOutcome, noop_metrics},
    scheduler::BatchScheduler,
};

/// Registry that resolves a cluster's configured scheduler name to a [`BatchScheduler`].
pub struct SchedulerRegistry {
    schedulers: HashMap<&'static str, Arc<dyn BatchScheduler>>,
    metrics: MetricsHandle,
}

impl SchedulerRegistry {
    /// Create an empty registry with no-op metrics.
    #[inline]
    pub fn new() -> Self {
        Self {
            schedulers: HashMap::new(),
            metrics: noop_metrics(),
        }
    }

    /// Set the metrics backend used when dispatching.
    #[inline]
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Register a scheduler under its [`BatchScheduler::name`].
    ///
    /// Names are unique; registering a second backend with the same name fails with
    /// [`CoreError::DuplicateScheduler`] and leaves the first one in place.
    pub fn register(&mut self, scheduler: Arc<dyn BatchScheduler>) -> Result<(), CoreError> {
        let name = scheduler.name();
        if self.schedulers.contains_key(name) {
            return Err(CoreError::DuplicateScheduler(name.to_string()));
        }
        debug!(scheduler = name, "batch scheduler registered");
        self.schedulers.insert(name, scheduler);
        Ok(())
    }

    /// Look up a scheduler by name.
    pub fn lookup(&self, name: &str) -> Result<&Arc<dyn BatchScheduler>, CoreError> {
        self.schedulers
            .get(name)
            .ok_or_else(|| CoreError::SchedulerNotFound(name.to_string()))
    }

    /// Returns `true` if a scheduler with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schedulers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schedulers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schedulers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedulers.is_empty()
    }

    /// Resolve the scheduler configured for `cluster`.
    ///
    /// Returns `Ok(None)` when the cluster does not ask for a batch scheduler,
    /// and [`CoreError::SchedulerNotFound`] when it asks for one that is not registered.
    pub fn select(
        &self,
        cluster: &FlinkCluster,
    ) -> Result<Option<&Arc<dyn BatchScheduler>>, CoreError> {
        match cluster.batch_scheduler_name() {
            Some(name) => self.lookup(name).map(Some),
            None => Ok(None),
        }
    }

    /// Run the configured scheduler for `cluster`.
    ///
    /// Steps:
    /// 1. Resolve the scheduler from `spec.batchScheduler.name` (nothing to do when unset).
    /// 2. Call [`BatchScheduler::schedule`] with the desired state.
    /// 3. Record outcome and duration; backend errors are returned as [`CoreError::Schedule`].
    #[instrument(level = "debug", skip(self, cluster, desired), fields(cluster = %cluster.namespaced_name()))]
    pub async fn schedule(
        &self,
        cluster: &FlinkCluster,
        desired: &DesiredClusterState,
    ) -> Result<(), CoreError> {
        let scheduler = match self.select(cluster) {
            Ok(Some(s)) => s,
            Ok(None) => {
                trace!("no batch scheduler configured");
                return Ok(());
            }
            Err(e) => {
                if let CoreError::SchedulerNotFound(name) = &e {
                    warn!(scheduler = %name, "cluster selects an unregistered batch scheduler");
                    self.metrics.record_scheduler_error(name, "not_found");
                }
                return Err(e);
            }
        };

        let name = scheduler.name();
        let started = Instant::now();
        let res = scheduler.schedule(cluster, desired).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match res {
            Ok(()) => {
                self.metrics
                    .record_schedule(name, ScheduleOutcome::Success, elapsed_ms);
                debug!(scheduler = name, "batch scheduling reconciled");
                Ok(())
            }
            Err(source) => {
                self.metrics
                    .record_schedule(name, ScheduleOutcome::Failure, elapsed_ms);
                self.metrics.record_scheduler_error(name, source.kind());
                debug!(scheduler = name, error = %source, "batch scheduling failed");
                Err(CoreError::Schedule {
                    scheduler: name,
                    source,
                })
            }
        }
    }
}

impl Default for SchedulerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchedulerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerRegistry")
            .field("schedulers", &self.names())
            .field("metrics", &"<handle>")
            .finish()
    }
}
