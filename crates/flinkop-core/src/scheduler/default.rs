use std::sync::Arc;

use async_trait::async_trait;
use flinkop_model::{DEFAULT_SCHEDULER_NAME, DesiredClusterState, FlinkCluster};
use tracing::trace;

use super::{BatchScheduler, ScheduleError, SchedulerRegistry};
use crate::error::CoreError;

/// Scheduler that leaves placement to the cluster's default scheduler.
///
/// Has no scheduling objects of its own, so every call succeeds without side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScheduler;

#[async_trait]
impl BatchScheduler for DefaultScheduler {
    fn name(&self) -> &'static str {
        DEFAULT_SCHEDULER_NAME
    }

    async fn schedule(
        &self,
        cluster: &FlinkCluster,
        _desired: &DesiredClusterState,
    ) -> Result<(), ScheduleError> {
        trace!(cluster = %cluster.namespaced_name(), "default placement, nothing to reconcile");
        Ok(())
    }
}

/// Register the built-in [`DefaultScheduler`] in the given registry.
///
/// After this call, clusters with `batchScheduler.name: default` resolve to a no-op backend.
pub fn register_default_scheduler(registry: &mut SchedulerRegistry) -> Result<(), CoreError> {
    registry.register(Arc::new(DefaultScheduler))
}
