//! Batch scheduler abstraction.
//!
//! A batch scheduler backend places a cluster's pods (gang scheduling, queues, priorities).
//! Backends implement [`BatchScheduler`] and are registered by name in a [`SchedulerRegistry`];
//! each cluster selects one through `spec.batchScheduler.name`.
mod error;
pub use error::ScheduleError;

mod registry;
pub use registry::SchedulerRegistry;

mod default;
pub use default::{DefaultScheduler, register_default_scheduler};

use async_trait::async_trait;
use flinkop_model::{DesiredClusterState, FlinkCluster};

/// Pluggable batch scheduler backend.
///
/// A backend is responsible for:
/// - identifying itself by a registry-unique name (`name`)
/// - reconciling its scheduling objects (pod groups, queues, gates) with the desired state (`schedule`)
#[async_trait]
pub trait BatchScheduler: Send + Sync {
    /// Scheduler name used for registry lookup, logs and metrics.
    fn name(&self) -> &'static str;

    /// Reconcile scheduling-related objects for `cluster` against `desired`.
    ///
    /// Called on every reconciliation pass and again after failures, so it must be idempotent.
    /// Both inputs are read-only snapshots.
    async fn schedule(
        &self,
        cluster: &FlinkCluster,
        desired: &DesiredClusterState,
    ) -> Result<(), ScheduleError>;
}
