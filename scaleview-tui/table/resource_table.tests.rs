use rstest::rstest;
use scaleview_kube::{AutoscalerResource, parse_resources};

use crate::table::STATUS_PLACEHOLDER;

use super::*;

fn cells(row: &TableRow) -> Vec<&str> {
    row.cells.iter().map(String::as_str).collect()
}

#[test]
fn render_empty_test() {
    let view = ResourceTable::autoscalers().render::<AutoscalerResource>(&[]);

    assert!(view.rows.is_empty());
    assert_eq!(1, view.height());
    assert_eq!(
        vec![" Name Namespace Min Pods Max Pods Replicas Status"],
        view.get_text(0)
    );
}

#[test]
fn render_single_autoscaler_test() {
    let items = [AutoscalerResource::new("hpa-1", "default", 1, 10, 3)];
    let view = ResourceTable::autoscalers().render(&items);

    assert_eq!(1, view.rows.len());
    assert_eq!(
        vec!["hpa-1", "default", "1", "10", "3", "Able to scale"],
        cells(&view.rows[0])
    );
    assert!(view.rows[0].is_complete);
    assert_eq!(
        vec![
            " Name  Namespace Min Pods Max Pods Replicas Status       ",
            " hpa-1 default          1       10        3 Able to scale",
        ],
        view.get_text(0)
    );
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(250)]
fn render_keeps_order_test(#[case] count: usize) {
    let items = (0..count)
        .map(|i| AutoscalerResource::new(&format!("hpa-{i}"), "default", 1, 10, i as i64))
        .collect::<Vec<_>>();
    let view = ResourceTable::autoscalers().render(&items);

    assert_eq!(count, view.rows.len());
    for (i, row) in view.rows.iter().enumerate() {
        assert_eq!(format!("hpa-{i}"), row.cells[0]);
        assert_eq!(i.to_string(), row.cells[4]);
        assert_eq!(6, row.cells.len());
    }
}

#[test]
fn render_is_idempotent_test() {
    let items = [
        AutoscalerResource::new("web", "shop", 2, 5, 4),
        AutoscalerResource::new("payments-api", "kube-system", 1, 120, 64),
    ];
    let table = ResourceTable::autoscalers();

    assert_eq!(table.render(&items), table.render(&items));
}

#[test]
fn render_ignores_state_in_status_test() {
    let items = [
        AutoscalerResource::new("over", "default", 1, 2, 9),
        AutoscalerResource::default(),
    ];
    let view = ResourceTable::autoscalers().render(&items);

    assert!(view.rows.iter().all(|row| row.cells[5] == STATUS_PLACEHOLDER));
}

#[test]
fn render_missing_current_replicas_test() {
    let items = parse_resources("metadata:\n  name: web\n  namespace: shop\nspec:\n  minReplicas: 2\n  maxReplicas: 5\n").unwrap();
    let view = ResourceTable::autoscalers().render(&items);

    assert_eq!(vec!["web", "shop", "2", "5", "", "Able to scale"], cells(&view.rows[0]));
    assert_eq!(vec![false, false, false, false, true, false], view.rows[0].missing.to_vec());
    assert!(!view.rows[0].is_complete);
}

#[test]
fn render_unknown_value_test() {
    let items = [AutoscalerResource {
        name: Some("web".to_owned()),
        ..Default::default()
    }];
    let view = ResourceTable::autoscalers().with_unknown_value("n/a").render(&items);

    assert_eq!(vec!["web", "n/a", "n/a", "n/a", "n/a", "Able to scale"], cells(&view.rows[0]));
}

#[test]
fn render_text_fits_widest_values_test() {
    let items = [
        AutoscalerResource {
            current_replicas: None,
            ..AutoscalerResource::new("web", "shop", 2, 5, 0)
        },
        AutoscalerResource::new("payments-api", "kube-system", 1, 120, 64),
    ];
    let view = ResourceTable::autoscalers().render(&items);

    assert_eq!(
        vec![
            " Name         Namespace   Min Pods Max Pods Replicas Status       ",
            " web          shop               2        5          Able to scale",
            " payments-api kube-system        1      120       64 Able to scale",
        ],
        view.get_text(0)
    );
}

#[rstest]
#[case(10, " Name  Nam")]
#[case(3, " Na")]
#[case(500, " Name  Namespace Min Pods Max Pods Replicas Status       ")]
fn get_text_width_test(#[case] width: usize, #[case] expected_header: &str) {
    let items = [AutoscalerResource::new("hpa-1", "default", 1, 10, 3)];
    let lines = ResourceTable::autoscalers().render(&items).get_text(width);

    assert_eq!(expected_header, lines[0]);
    assert!(lines.iter().all(|line| line.chars().count() <= width));
}

#[rstest]
#[case(123_456_789_012)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn render_large_replica_counts_test(#[case] value: i64) {
    let items = [AutoscalerResource::new("a", "b", value, value, value)];
    let lines = ResourceTable::autoscalers().render(&items).get_text(0);

    assert_eq!(3, lines[1].matches(&value.to_string()).count());
}
