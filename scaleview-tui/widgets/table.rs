use ratatui_core::buffer::Buffer;
use ratatui_core::layout::Rect;
use ratatui_core::style::{Color, Style};
use ratatui_core::widgets::Widget;
use scaleview_config::themes::{TableColors, TextColors};

use crate::table::{TableRow, TableView};

#[cfg(test)]
#[path = "./table.tests.rs"]
mod table_tests;

/// Widget that renders [`TableView`] header and as many rows as fit in the area.\
/// Rows with missing values are drawn using `incomplete` colors, the missing cells themselves using its `dim` color.
pub struct TableWidget<'a> {
    view: &'a TableView,
    colors: &'a TableColors,
    offset: Option<usize>,
}

impl<'a> TableWidget<'a> {
    /// Creates new [`TableWidget`] instance.
    pub fn new(view: &'a TableView, colors: &'a TableColors) -> Self {
        Self {
            view,
            colors,
            offset: None,
        }
    }

    /// Draws only rows, starting from the row at `offset`, without the header line.
    pub fn rows_from(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let first_line = if self.offset.is_none() {
            render_line(buf, area, 0, &self.view.header_text(), Style::from(&self.colors.header));
            1
        } else {
            0
        };

        let rows = self.view.rows.iter().skip(self.offset.unwrap_or_default());
        for (line_no, row) in (first_line..area.height).zip(rows) {
            let colors = if row.is_complete {
                &self.colors.row
            } else {
                &self.colors.incomplete
            };

            render_line(buf, area, line_no, &self.view.row_text(row), Style::from(colors));
            self.dim_missing_cells(buf, area, line_no, row, colors);
        }
    }
}

impl TableWidget<'_> {
    fn dim_missing_cells(&self, buf: &mut Buffer, area: Rect, line_no: u16, row: &TableRow, colors: &TextColors) {
        if colors.dim == Color::Reset {
            return;
        }

        let mut x = 0;
        for (column, is_missing) in self.view.header.columns().iter().zip(row.missing.iter()) {
            x += 1;
            if *is_missing && x < usize::from(area.width) {
                let width = column.len().min(usize::from(area.width) - x);
                let cell = Rect::new(area.x + x as u16, area.y + line_no, width as u16, 1);
                buf.set_style(cell, Style::default().fg(colors.dim));
            }

            x += column.len();
        }
    }
}

fn render_line(buf: &mut Buffer, area: Rect, line_no: u16, text: &str, style: Style) {
    let y = area.y + line_no;
    buf.set_style(Rect::new(area.x, y, area.width, 1), style);
    buf.set_stringn(area.x, y, text, usize::from(area.width), style);
}
