//! Prometheus metrics backend for the flinkop controller core.
//!
//! Provides [`PrometheusMetrics`], an implementation of [`flinkop_core::MetricsBackend`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use flinkop_core::{SchedulerRegistry, register_default_scheduler};
//! use flinkop_prometheus::{Encoder, PrometheusMetrics, TextEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let mut registry = SchedulerRegistry::new().with_metrics(Arc::new(metrics.clone()));
//! register_default_scheduler(&mut registry)?;
//!
//! let mut buffer = Vec::new();
//! TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `flinkop_restart_decisions_total{decision}` - Counter
//! - `flinkop_schedule_total{scheduler, outcome}` - Counter
//! - `flinkop_schedule_duration_seconds{scheduler}` - Histogram
//! - `flinkop_scheduler_errors_total{scheduler, error_kind}` - Counter
//!
//! No HTTP endpoint is provided; expose [`PrometheusMetrics::gather`] through the application's server.
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
