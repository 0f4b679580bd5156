use scaleview_common::try_truncate;

use crate::table::{Header, RowStringExt};

/// Single rendered table row.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Box<[String]>,
    /// Cells that display the unknown value.
    pub missing: Box<[bool]>,
    pub is_complete: bool,
}

/// Rendered table: header with column widths fitted to the data and one row for each item.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub header: Header,
    pub rows: Box<[TableRow]>,
}

impl TableView {
    /// Creates new [`TableView`] instance updating header column widths to fit the `rows`.
    pub fn new(header: Header, rows: Box<[TableRow]>) -> Self {
        let mut view = Self { header, rows };
        view.update_data_lengths();
        view
    }

    /// Returns number of lines needed to display the table (header included).
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }

    /// Returns number of characters needed to display the widest line of the table.
    pub fn width(&self) -> usize {
        self.header.columns().iter().map(|c| c.len() + 1).sum()
    }

    /// Returns header text.
    pub fn header_text(&self) -> String {
        self.header.get_text()
    }

    /// Returns text for the provided row with each cell padded to its column length.
    pub fn row_text(&self, row: &TableRow) -> String {
        let mut text = String::with_capacity(self.width());
        for (column, cell) in self.header.columns().iter().zip(row.cells.iter()) {
            text.push(' ');
            text.push_cell(cell, column.len(), column.to_right);
        }

        text
    }

    /// Returns all table lines, header first.\
    /// **Note** that lines are truncated to `width` characters unless `width` is `0`.
    pub fn get_text(&self, width: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height());
        lines.push(self.header_text());
        lines.extend(self.rows.iter().map(|row| self.row_text(row)));

        if width > 0 {
            for line in &mut lines {
                if let Some(truncated) = try_truncate(line, width) {
                    *line = truncated.to_owned();
                }
            }
        }

        lines
    }

    /// Updates widths for all columns basing on current rows.
    fn update_data_lengths(&mut self) {
        self.header.reset_data_lengths();

        let columns_no = self.header.get_columns_count();
        for row in self.rows.iter() {
            for (column, cell) in row.cells.iter().enumerate().take(columns_no) {
                let column_width = std::cmp::max(self.header.get_data_length(column), cell.chars().count());
                self.header.set_data_length(column, column_width);
            }
        }
    }
}
