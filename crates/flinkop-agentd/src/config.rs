use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};

use flinkop_observe::LoggerConfig;

/// Agent configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    /// Print the prometheus exposition to stdout before exiting.
    pub metrics_dump: bool,
}

impl AgentConfig {
    /// Parse a JSON config document.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parse agent config")
    }

    /// Load the config at `path`, or defaults when there is none.
    pub async fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read agent config {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// Evaluate restart decisions and batch scheduling for Flink cluster snapshots.
#[derive(Debug, Parser)]
#[command(name = "flinkop-agentd")]
#[command(version)]
pub struct Args {
    /// Agent config file (JSON)
    #[arg(long, env = "FLINKOP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cluster snapshot files, evaluated in order
    #[arg(required = true)]
    pub clusters: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use flinkop_observe::LoggerFormat;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = AgentConfig::from_json("{}").unwrap();
        assert!(!cfg.metrics_dump);
        assert_eq!(cfg.logger.format, LoggerFormat::Text);
    }

    #[test]
    fn config_reads_logger_section() {
        let cfg =
            AgentConfig::from_json(r#"{"logger": {"format": "json"}, "metrics_dump": true}"#)
                .unwrap();
        assert!(cfg.metrics_dump);
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
    }

    #[test]
    fn config_rejects_bad_format() {
        assert!(AgentConfig::from_json(r#"{"logger": {"format": "xml"}}"#).is_err());
    }

    #[tokio::test]
    async fn missing_path_loads_defaults() {
        let cfg = AgentConfig::load(None).await.unwrap();
        assert!(!cfg.metrics_dump);
    }

    #[tokio::test]
    async fn loads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.json");
        std::fs::write(&path, r#"{"metrics_dump": true}"#).unwrap();

        let cfg = AgentConfig::load(Some(path.as_path())).await.unwrap();
        assert!(cfg.metrics_dump);
    }

    #[test]
    fn args_split_config_and_clusters() {
        let args = Args::try_parse_from([
            "flinkop-agentd",
            "a.json",
            "--config",
            "agent.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("agent.json")));
        assert_eq!(
            args.clusters,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn args_require_clusters_and_config_value() {
        assert!(Args::try_parse_from(["flinkop-agentd"]).is_err());
        assert!(Args::try_parse_from(["flinkop-agentd", "a.json", "--config"]).is_err());
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();

        let cmd = Args::command();
        let config = cmd
            .get_arguments()
            .find(|a| a.get_id() == "config")
            .unwrap();
        assert_eq!(
            config.get_env(),
            Some(std::ffi::OsStr::new("FLINKOP_CONFIG"))
        );
    }
}
