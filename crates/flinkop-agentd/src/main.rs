mod config;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use flinkop_core::{
    MetricsBackend, RestartDecision, SchedulerRegistry, register_default_scheduler,
    restart_decision,
};
use flinkop_model::{DesiredClusterState, FlinkCluster};
use flinkop_observe::{init_local_offset, init_logger};
use flinkop_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

use crate::config::{AgentConfig, Args};

fn main() -> anyhow::Result<()> {
    // Offset detection only works while the process is single-threaded.
    init_local_offset();

    let args = Args::parse();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = AgentConfig::load(args.config.as_deref()).await?;
    let logger = cfg.logger.clone().with_env_overrides()?;
    init_logger(&logger)?;
    info!(clusters = args.clusters.len(), "logger initialized");

    // 2) metrics
    let metrics = Arc::new(PrometheusMetrics::new()?);

    // 3) schedulers
    let mut registry = SchedulerRegistry::new().with_metrics(metrics.clone());
    register_default_scheduler(&mut registry)?;
    info!(schedulers = ?registry.names(), "batch schedulers registered");

    // 4) one task per cluster snapshot
    let failed = reconcile_all(args.clusters, Arc::new(registry), metrics.clone()).await?;

    // 5) metrics dump
    if cfg.metrics_dump {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
        print!("{}", String::from_utf8(buf)?);
    }

    if failed > 0 {
        anyhow::bail!("{failed} cluster(s) failed evaluation");
    }
    Ok(())
}

/// Reconcile every snapshot concurrently; returns how many failed.
async fn reconcile_all(
    paths: Vec<PathBuf>,
    registry: Arc<SchedulerRegistry>,
    metrics: Arc<PrometheusMetrics>,
) -> anyhow::Result<usize> {
    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let registry = registry.clone();
        let metrics = metrics.clone();
        handles.push(tokio::spawn(async move {
            let res = reconcile(&path, &registry, metrics.as_ref()).await;
            (path, res)
        }));
    }

    let mut failed = 0usize;
    for handle in handles {
        let (path, res) = handle.await?;
        if let Err(e) = res {
            failed += 1;
            error!(path = %path.display(), error = ?e, "cluster evaluation failed");
        }
    }
    Ok(failed)
}

/// Evaluate one cluster snapshot: restart decision for its job, then batch scheduling.
async fn reconcile(
    path: &Path,
    registry: &SchedulerRegistry,
    metrics: &dyn MetricsBackend,
) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read cluster snapshot {}", path.display()))?;
    let cluster: FlinkCluster = serde_json::from_str(&raw)
        .with_context(|| format!("parse cluster snapshot {}", path.display()))?;
    let name = cluster.namespaced_name();

    match (cluster.job_spec(), cluster.job_status()) {
        (Some(spec), Some(status)) => {
            let decision = restart_decision(status, spec);
            metrics.record_restart_decision(decision);
            match decision {
                RestartDecision::Restart => info!(
                    cluster = %name,
                    job = %status.id,
                    savepoint = %status.savepoint_location,
                    "job failed; restarting from savepoint"
                ),
                RestartDecision::StaleSavepoint | RestartDecision::UnrecognizedPolicy => warn!(
                    cluster = %name,
                    job = %status.id,
                    reason = %decision,
                    "job failed and will not be restarted"
                ),
                _ => info!(
                    cluster = %name,
                    job = %status.id,
                    state = %status.state,
                    reason = %decision,
                    "no restart"
                ),
            }
        }
        _ => info!(cluster = %name, "no job status observed; skipping restart evaluation"),
    }

    registry
        .schedule(&cluster, &DesiredClusterState::default())
        .await
        .with_context(|| format!("schedule {name}"))?;
    Ok(())
}
