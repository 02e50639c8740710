mod cluster;
pub use cluster::{
    BatchSchedulerSpec, DEFAULT_SCHEDULER_NAME, DesiredClusterState, FlinkCluster,
    FlinkClusterSpec, FlinkClusterStatus, Manifest, ObjectMeta,
};

mod error;
pub use error::{ModelError, ModelResult};

mod job;
pub use job::{JobRestartPolicy, JobSpec, JobState, JobStatus};

pub mod timestamp;
pub use timestamp::TimeConverter;

pub use time::OffsetDateTime;
