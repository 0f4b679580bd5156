use ratatui_core::style::Color;
use scaleview_config::themes::TextColors;
use scaleview_kube::AutoscalerResource;

use crate::ResourceTable;

use super::*;

fn line(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn test_colors() -> TableColors {
    TableColors {
        header: TextColors::bg(Color::Black, Color::Gray),
        row: TextColors::new(Color::White),
        incomplete: TextColors::dim(Color::Yellow, Color::DarkGray, Color::Reset),
    }
}

#[test]
fn render_rows_test() {
    let items = [
        AutoscalerResource::new("hpa-1", "default", 1, 10, 3),
        AutoscalerResource {
            current_replicas: None,
            ..AutoscalerResource::new("hpa-2", "default", 1, 10, 0)
        },
    ];
    let view = ResourceTable::autoscalers().render(&items);
    let colors = test_colors();

    let mut buf = Buffer::empty(Rect::new(0, 0, 60, 4));
    TableWidget::new(&view, &colors).render(buf.area, &mut buf);

    assert_eq!(format!("{:<60}", view.header_text()), line(&buf, 0));
    assert_eq!(format!("{:<60}", " hpa-1 default          1       10        3 Able to scale"), line(&buf, 1));
    assert_eq!(format!("{:<60}", " hpa-2 default          1       10          Able to scale"), line(&buf, 2));
    assert_eq!(" ".repeat(60), line(&buf, 3));

    assert_eq!(Color::Gray, buf[(59, 0)].bg);
    assert_eq!(Color::Black, buf[(1, 0)].fg);
    assert_eq!(Color::White, buf[(1, 1)].fg);
    assert_eq!(Color::Yellow, buf[(1, 2)].fg);
    assert_eq!(Color::Yellow, buf[(34, 2)].fg);
    assert_eq!(Color::DarkGray, buf[(35, 2)].fg);
    assert_eq!(Color::DarkGray, buf[(42, 2)].fg);
    assert_eq!(Color::Yellow, buf[(44, 2)].fg);
}

#[test]
fn render_rows_from_offset_test() {
    let items = (0..5)
        .map(|i| AutoscalerResource::new(&format!("hpa-{i}"), "default", 1, 10, 3))
        .collect::<Vec<_>>();
    let view = ResourceTable::autoscalers().render(&items);
    let colors = test_colors();

    let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
    TableWidget::new(&view, &colors).rows_from(3).render(buf.area, &mut buf);

    assert_eq!(" hpa-3 defau", line(&buf, 0));
    assert_eq!(" hpa-4 defau", line(&buf, 1));
    assert_eq!(" ".repeat(12), line(&buf, 2));
    assert_eq!(Color::White, buf[(1, 0)].fg);
}

#[test]
fn render_missing_cells_clipped_test() {
    let items = [AutoscalerResource {
        current_replicas: None,
        ..AutoscalerResource::new("hpa-1", "default", 1, 10, 0)
    }];
    let view = ResourceTable::autoscalers().render(&items);
    let colors = test_colors();

    let mut buf = Buffer::empty(Rect::new(0, 0, 38, 2));
    TableWidget::new(&view, &colors).render(buf.area, &mut buf);

    assert_eq!(Color::DarkGray, buf[(37, 1)].fg);
    assert_eq!(Color::Yellow, buf[(34, 1)].fg);
}

#[test]
fn render_clips_to_area_test() {
    let items = [
        AutoscalerResource::new("hpa-1", "default", 1, 10, 3),
        AutoscalerResource::new("hpa-2", "default", 1, 10, 3),
    ];
    let view = ResourceTable::autoscalers().render(&items);
    let colors = test_colors();

    let mut buf = Buffer::empty(Rect::new(0, 0, 12, 2));
    TableWidget::new(&view, &colors).render(buf.area, &mut buf);

    assert_eq!(" Name  Names", line(&buf, 0));
    assert_eq!(" hpa-1 defau", line(&buf, 1));
}

#[test]
fn render_empty_area_test() {
    let view = ResourceTable::autoscalers().render::<AutoscalerResource>(&[]);
    let colors = test_colors();

    let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
    TableWidget::new(&view, &colors).render(buf.area, &mut buf);

    assert!(buf.content.is_empty());
}
