use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui_crossterm::IntoCrossterm;
use scaleview_config::themes::TableColors;
use scaleview_tui::{TableView, TableWidget};
use std::io::{Result, Write};

#[cfg(test)]
#[path = "./output.tests.rs"]
mod output_tests;

/// Maximum number of lines drawn into a single buffer.
pub const PAGE_HEIGHT: u16 = 1024;

/// Writes table lines as plain text, `width` equal to `0` means no limit.
pub fn print_plain<W: Write>(out: &mut W, view: &TableView, width: usize) -> Result<()> {
    for line in view.get_text(width) {
        writeln!(out, "{}", line.trim_end())?;
    }

    out.flush()
}

/// Draws table using [`TableWidget`] and writes the resulting buffer with terminal colors.\
/// **Note** that the table is drawn in pages of at most [`PAGE_HEIGHT`] lines, so it can have any number of rows.
pub fn print_colored<W: Write>(out: &mut W, view: &TableView, colors: &TableColors, width: usize) -> Result<()> {
    let width = if width == 0 { view.width() } else { width.min(view.width()) };
    let width = u16::try_from(width).unwrap_or(u16::MAX);

    let page_height = view.height().min(usize::from(PAGE_HEIGHT));
    write_page(out, TableWidget::new(view, colors), width, page_height)?;

    let mut offset = page_height - 1;
    while offset < view.rows.len() {
        let page_height = (view.rows.len() - offset).min(usize::from(PAGE_HEIGHT));
        write_page(out, TableWidget::new(view, colors).rows_from(offset), width, page_height)?;
        offset += page_height;
    }

    out.flush()
}

fn write_page<W: Write>(out: &mut W, widget: TableWidget<'_>, width: u16, height: usize) -> Result<()> {
    let area = Rect::new(0, 0, width, u16::try_from(height).unwrap_or(PAGE_HEIGHT));
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    write_buffer(out, &buf)
}

fn write_buffer<W: Write>(out: &mut W, buf: &Buffer) -> Result<()> {
    for y in buf.area.top()..buf.area.bottom() {
        let mut current: Option<(Color, Color)> = None;
        for x in buf.area.left()..buf.area.right() {
            let cell = &buf[(x, y)];
            if current != Some((cell.fg, cell.bg)) {
                queue!(
                    out,
                    SetForegroundColor(cell.fg.into_crossterm()),
                    SetBackgroundColor(cell.bg.into_crossterm())
                )?;
                current = Some((cell.fg, cell.bg));
            }

            queue!(out, Print(cell.symbol()))?;
        }

        queue!(out, ResetColor, Print("\n"))?;
    }

    Ok(())
}
