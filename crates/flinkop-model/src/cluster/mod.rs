mod desired;
pub use desired::{DesiredClusterState, Manifest};

use serde::{Deserialize, Serialize};

use crate::job::{JobSpec, JobStatus};

/// Scheduler name that stands for the cluster's own default placement.
pub const DEFAULT_SCHEDULER_NAME: &str = "default";

/// A managed Flink cluster: the aggregate root handed to scheduler backends.
///
/// Only the parts the controller core reads are modelled; everything else in the
/// custom resource is carried by the external API layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlinkCluster {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: FlinkClusterSpec,
    #[serde(default)]
    pub status: FlinkClusterStatus,
}

/// Identity of the cluster object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

/// Declared cluster specification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlinkClusterSpec {
    /// Job to run; `None` for a session cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobSpec>,
    /// Batch scheduler that places the cluster's pods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_scheduler: Option<BatchSchedulerSpec>,
}

/// Batch scheduler selection for a cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSchedulerSpec {
    /// Registry name of the scheduler backend.
    pub name: String,
    /// Scheduler queue the pods are admitted through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
}

/// Observed cluster status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlinkClusterStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobStatus>,
}

impl FlinkCluster {
    /// Create a cluster object with the given identity and empty spec/status.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: namespace.into(),
            },
            ..Default::default()
        }
    }

    /// Select a batch scheduler by name.
    pub fn with_batch_scheduler(mut self, name: impl Into<String>) -> Self {
        self.spec.batch_scheduler = Some(BatchSchedulerSpec {
            name: name.into(),
            ..Default::default()
        });
        self
    }

    /// `namespace/name`, or just `name` outside a namespace.
    pub fn namespaced_name(&self) -> String {
        if self.metadata.namespace.is_empty() {
            self.metadata.name.clone()
        } else {
            format!("{}/{}", self.metadata.namespace, self.metadata.name)
        }
    }

    pub fn job_spec(&self) -> Option<&JobSpec> {
        self.spec.job.as_ref()
    }

    pub fn job_status(&self) -> Option<&JobStatus> {
        self.status.job.as_ref()
    }

    /// Name of the configured batch scheduler, if any.
    ///
    /// A blank name counts as not configured.
    pub fn batch_scheduler_name(&self) -> Option<&str> {
        self.spec
            .batch_scheduler
            .as_ref()
            .map(|s| s.name.trim())
            .filter(|name| !name.is_empty())
    }
}
