use serde::{Deserialize, Serialize};

/// A rendered object manifest, kept as raw JSON.
///
/// The controller core never looks inside; it only hands manifests to scheduler backends.
pub type Manifest = serde_json::Value;

/// Target objects computed for a cluster by the manifest builders.
///
/// Opaque to the decision logic: scheduler backends receive it unmodified and
/// decide which parts they need (usually the pod-owning stateful sets and the job).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredClusterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jm_stateful_set: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jm_service: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jm_ingress: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_stateful_set: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_service: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_disruption_budget: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Manifest>,
}

impl DesiredClusterState {
    /// Returns `true` when no manifest is present.
    pub fn is_empty(&self) -> bool {
        self.manifests().next().is_none()
    }

    /// Iterate over the present manifests as `(component, manifest)` pairs.
    pub fn manifests(&self) -> impl Iterator<Item = (&'static str, &Manifest)> {
        [
            ("configMap", &self.config_map),
            ("jmStatefulSet", &self.jm_stateful_set),
            ("jmService", &self.jm_service),
            ("jmIngress", &self.jm_ingress),
            ("tmStatefulSet", &self.tm_stateful_set),
            ("tmService", &self.tm_service),
            ("podDisruptionBudget", &self.pod_disruption_budget),
            ("job", &self.job),
        ]
        .into_iter()
        .filter_map(|(component, m)| m.as_ref().map(|m| (component, m)))
    }
}
