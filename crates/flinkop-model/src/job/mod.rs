mod policy;
pub use policy::JobRestartPolicy;

mod spec;
pub use spec::JobSpec;

mod state;
pub use state::JobState;

mod status;
pub use status::JobStatus;
