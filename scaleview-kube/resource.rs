use k8s_openapi::api::autoscaling::v2::HorizontalPodAutoscaler;
use kube::ResourceExt;
use kube::core::DynamicObject;

#[cfg(test)]
#[path = "./resource.tests.rs"]
mod resource_tests;

pub const HPA_KIND: &str = "HorizontalPodAutoscaler";

/// Horizontal pod autoscaler as seen by the resources table.\
/// **Note** that every field is optional, an absent value in the source object is kept as `None`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AutoscalerResource {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub min_replicas: Option<i64>,
    pub max_replicas: Option<i64>,
    pub current_replicas: Option<i64>,
}

impl AutoscalerResource {
    /// Creates new [`AutoscalerResource`] instance with all replica counts set.
    pub fn new(name: &str, namespace: &str, min_replicas: i64, max_replicas: i64, current_replicas: i64) -> Self {
        Self {
            name: Some(name.to_owned()),
            namespace: Some(namespace.to_owned()),
            min_replicas: Some(min_replicas),
            max_replicas: Some(max_replicas),
            current_replicas: Some(current_replicas),
        }
    }

    /// Returns `true` if none of the resource values is missing.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.namespace.is_some()
            && self.min_replicas.is_some()
            && self.max_replicas.is_some()
            && self.current_replicas.is_some()
    }
}

impl From<&DynamicObject> for AutoscalerResource {
    fn from(object: &DynamicObject) -> Self {
        let spec = &object.data["spec"];
        let status = &object.data["status"];

        Self {
            name: object.metadata.name.clone(),
            namespace: object.namespace(),
            min_replicas: spec["minReplicas"].as_i64(),
            max_replicas: spec["maxReplicas"].as_i64(),
            current_replicas: status["currentReplicas"].as_i64(),
        }
    }
}

impl From<&HorizontalPodAutoscaler> for AutoscalerResource {
    fn from(hpa: &HorizontalPodAutoscaler) -> Self {
        let spec = hpa.spec.as_ref();

        Self {
            name: hpa.metadata.name.clone(),
            namespace: hpa.metadata.namespace.clone(),
            min_replicas: spec.and_then(|s| s.min_replicas).map(i64::from),
            max_replicas: spec.map(|s| i64::from(s.max_replicas)),
            current_replicas: hpa
                .status
                .as_ref()
                .and_then(|s| s.current_replicas)
                .map(i64::from),
        }
    }
}

