use rstest::rstest;

use super::*;

const HPA_LIST: &str = r"apiVersion: autoscaling/v2
kind: HorizontalPodAutoscalerList
metadata:
  resourceVersion: '1234'
items:
- apiVersion: autoscaling/v2
  kind: HorizontalPodAutoscaler
  metadata:
    name: hpa-1
    namespace: default
  spec:
    maxReplicas: 10
    minReplicas: 1
    scaleTargetRef:
      apiVersion: apps/v1
      kind: Deployment
      name: web
  status:
    currentReplicas: 3
    desiredReplicas: 3
- apiVersion: autoscaling/v2
  kind: HorizontalPodAutoscaler
  metadata:
    name: hpa-2
    namespace: kube-system
  spec:
    maxReplicas: 4
    minReplicas: 2
  status:
    currentReplicas: 2
    desiredReplicas: 2
";

#[test]
fn parse_list_test() {
    let resources = parse_resources(HPA_LIST).unwrap();
    assert_eq!(
        vec![
            AutoscalerResource::new("hpa-1", "default", 1, 10, 3),
            AutoscalerResource::new("hpa-2", "kube-system", 2, 4, 2),
        ],
        resources
    );
}

#[test]
fn parse_json_test() {
    let json = r#"{"kind": "List", "items": [
        {"metadata": {"name": "b", "namespace": "x"}, "spec": {"minReplicas": 1, "maxReplicas": 2}, "status": {"currentReplicas": 1}},
        {"metadata": {"name": "a", "namespace": "x"}, "spec": {"minReplicas": 3, "maxReplicas": 9}, "status": {"currentReplicas": 7}}
    ]}"#;

    let resources = parse_resources(json).unwrap();
    assert_eq!(2, resources.len());
    assert_eq!(Some("b"), resources[0].name.as_deref());
    assert_eq!(Some("a"), resources[1].name.as_deref());
    assert_eq!(Some(7), resources[1].current_replicas);
}

#[test]
fn parse_multiple_documents_test() {
    let yaml = r"kind: HorizontalPodAutoscaler
metadata:
  name: first
spec:
  maxReplicas: 3
---
- metadata:
    name: second
- metadata:
    name: third
---
";

    let names = parse_resources(yaml)
        .unwrap()
        .into_iter()
        .map(|r| r.name.unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(vec!["first", "second", "third"], names);
}

#[rstest]
#[case("")]
#[case("# nothing here\n")]
#[case("kind: HorizontalPodAutoscalerList\nitems: []\n")]
#[case("kind: List\nitems: null\n")]
#[case("[]")]
fn parse_empty_test(#[case] text: &str) {
    assert!(parse_resources(text).unwrap().is_empty());
}

#[test]
fn parse_skips_other_kinds_test() {
    let yaml = r"items:
- kind: Deployment
  metadata:
    name: web
- kind: HorizontalPodAutoscaler
  metadata:
    name: web
";

    let resources = parse_resources(yaml).unwrap();
    assert_eq!(1, resources.len());
    assert_eq!(Some("web"), resources[0].name.as_deref());
}

#[test]
fn parse_normalizes_missing_metadata_test() {
    let resources = parse_resources("- spec:\n    minReplicas: 1\n- metadata: null\n").unwrap();
    assert_eq!(2, resources.len());
    assert_eq!(None, resources[0].name);
    assert_eq!(Some(1), resources[0].min_replicas);
    assert_eq!(AutoscalerResource::default(), resources[1]);
}

#[test]
fn parse_missing_status_test() {
    let resources = parse_resources("metadata:\n  name: hpa-1\nspec:\n  minReplicas: 1\n  maxReplicas: 10\n").unwrap();
    assert_eq!(None, resources[0].current_replicas);
    assert_eq!(Some(10), resources[0].max_replicas);
}

#[test]
fn parse_invalid_entry_test() {
    let error = parse_resources("- metadata:\n    name: ok\n- just text\n").unwrap_err();
    assert!(matches!(error, ResourceError::InvalidEntry { index: 1, .. }));

    let error = parse_resources("metadata:\n  name: [1, 2]\n").unwrap_err();
    assert!(matches!(error, ResourceError::InvalidEntry { index: 0, .. }));
}

#[rstest]
#[case("just a string")]
#[case("42")]
fn parse_invalid_document_test(#[case] text: &str) {
    assert!(matches!(parse_resources(text), Err(ResourceError::InvalidDocument(0))));
}

#[test]
fn parse_syntax_error_test() {
    assert!(matches!(
        parse_resources("items: [unclosed"),
        Err(ResourceError::SyntaxError(_))
    ));
}
