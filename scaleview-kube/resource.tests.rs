use k8s_openapi::api::autoscaling::v2::{
    CrossVersionObjectReference, HorizontalPodAutoscalerSpec, HorizontalPodAutoscalerStatus,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::{self, json};

use super::*;

#[test]
fn from_dynamic_object_test() {
    let object: DynamicObject = serde_json::from_value(json!({
        "apiVersion": "autoscaling/v2",
        "kind": "HorizontalPodAutoscaler",
        "metadata": { "name": "hpa-1", "namespace": "default" },
        "spec": { "minReplicas": 1, "maxReplicas": 10 },
        "status": { "currentReplicas": 3, "desiredReplicas": 3 }
    }))
    .unwrap();

    let resource = AutoscalerResource::from(&object);
    assert_eq!(AutoscalerResource::new("hpa-1", "default", 1, 10, 3), resource);
    assert!(resource.is_complete());
}

#[test]
fn from_dynamic_object_missing_fields_test() {
    let object: DynamicObject = serde_json::from_value(json!({
        "metadata": { "name": "hpa-2" },
        "spec": { "maxReplicas": "ten" }
    }))
    .unwrap();

    let resource = AutoscalerResource::from(&object);
    assert_eq!(Some("hpa-2"), resource.name.as_deref());
    assert_eq!(None, resource.namespace);
    assert_eq!(None, resource.min_replicas);
    assert_eq!(None, resource.max_replicas);
    assert_eq!(None, resource.current_replicas);
    assert!(!resource.is_complete());
}

#[test]
fn from_typed_autoscaler_test() {
    let hpa = HorizontalPodAutoscaler {
        metadata: ObjectMeta {
            name: Some("web".to_owned()),
            namespace: Some("shop".to_owned()),
            ..Default::default()
        },
        spec: Some(HorizontalPodAutoscalerSpec {
            min_replicas: Some(2),
            max_replicas: 5,
            scale_target_ref: CrossVersionObjectReference {
                api_version: Some("apps/v1".to_owned()),
                kind: "Deployment".to_owned(),
                name: "web".to_owned(),
            },
            ..Default::default()
        }),
        status: Some(HorizontalPodAutoscalerStatus {
            current_replicas: Some(4),
            desired_replicas: 4,
            ..Default::default()
        }),
    };

    assert_eq!(AutoscalerResource::new("web", "shop", 2, 5, 4), AutoscalerResource::from(&hpa));
}

#[test]
fn from_typed_autoscaler_without_status_test() {
    let hpa = HorizontalPodAutoscaler {
        metadata: ObjectMeta {
            name: Some("web".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };

    let resource = AutoscalerResource::from(&hpa);
    assert_eq!(Some("web"), resource.name.as_deref());
    assert_eq!(None, resource.max_replicas);
    assert_eq!(None, resource.current_replicas);
}
