use crate::table::{Column, ColumnStringExt};

#[cfg(test)]
#[path = "./header.tests.rs"]
mod header_tests;

/// Header for the table.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    columns: Box<[Column]>,
}

impl Header {
    /// Creates new [`Header`] instance with provided columns.
    pub fn from(columns: Box<[Column]>) -> Self {
        Self { columns }
    }

    /// Returns all header columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns number of columns in the header.
    pub fn get_columns_count(&self) -> usize {
        self.columns.len()
    }

    /// Resets `data_len` in each column.
    pub fn reset_data_lengths(&mut self) {
        for column in self.columns.iter_mut() {
            column.data_len = 0;
        }
    }

    /// Returns current data length of the provided column.
    pub fn get_data_length(&self, column: usize) -> usize {
        self.columns.get(column).map(|c| c.data_len).unwrap_or_default()
    }

    /// Sets data length for the provided column.
    pub fn set_data_length(&mut self, column: usize, new_data_len: usize) {
        if let Some(column) = self.columns.get_mut(column) {
            column.data_len = new_data_len;
        }
    }

    /// Returns header text with each column padded to its current length.
    pub fn get_text(&self) -> String {
        let len = self.columns.iter().map(|c| c.len() + 1).sum::<usize>();
        let mut text = String::with_capacity(len);
        for column in self.columns.iter() {
            text.push(' ');
            text.push_column(column);
        }

        text
    }
}
