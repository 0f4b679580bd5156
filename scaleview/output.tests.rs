use scaleview_kube::AutoscalerResource;
use scaleview_tui::ResourceTable;

use super::*;

fn test_view() -> TableView {
    ResourceTable::autoscalers().render(&[
        AutoscalerResource::new("hpa-1", "default", 1, 10, 3),
        AutoscalerResource {
            namespace: None,
            ..AutoscalerResource::new("hpa-2", "", 2, 4, 2)
        },
    ])
}

#[test]
fn print_plain_test() {
    let mut out = Vec::new();
    print_plain(&mut out, &test_view(), 0).unwrap();

    assert_eq!(
        " Name  Namespace Min Pods Max Pods Replicas Status\n \
         hpa-1 default          1       10        3 Able to scale\n \
         hpa-2                  2        4        2 Able to scale\n",
        String::from_utf8(out).unwrap()
    );
}

#[test]
fn print_plain_width_test() {
    let mut out = Vec::new();
    print_plain(&mut out, &test_view(), 16).unwrap();

    assert_eq!(
        " Name  Namespace\n hpa-1 default\n hpa-2\n",
        String::from_utf8(out).unwrap()
    );
}

#[test]
fn print_colored_test() {
    let mut out = Vec::new();
    print_colored(&mut out, &test_view(), &TableColors::default(), 0).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(3, text.lines().count());
    assert!(text.contains("hpa-1 default"));
    assert!(text.contains("Able to scale"));
    assert!(text.contains('\u{1b}'));
}

#[test]
fn print_colored_all_rows_test() {
    let items = (0..70_000)
        .map(|i| AutoscalerResource::new(&format!("hpa-{i}"), "default", 1, 10, 3))
        .collect::<Vec<_>>();
    let view = ResourceTable::autoscalers().render(&items);

    let mut out = Vec::new();
    print_colored(&mut out, &view, &TableColors::default(), 0).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(70_001, lines.len());
    assert!(lines[0].contains("Name"));
    assert!(lines[1].contains("hpa-0 "));
    assert!(lines[1024].contains("hpa-1023 "));
    assert!(lines[70_000].contains("hpa-69999 "));
}
