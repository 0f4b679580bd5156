use scaleview_common::add_padding;
use std::cmp::max;

/// Column for the table header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub to_right: bool,
    pub data_len: usize,
    min_len: usize,
    max_len: usize,
}

impl Column {
    /// Creates new [`Column`] instance that is exactly as wide as its name.
    pub fn new(name: &'static str) -> Self {
        let len = name.chars().count();
        Self {
            name,
            to_right: false,
            data_len: len,
            min_len: len,
            max_len: len,
        }
    }

    /// Creates new [`Column`] instance bound with provided lengths.\
    /// **Note** that column is never narrower than its name.
    pub fn bound(name: &'static str, min_len: usize, max_len: usize, to_right: bool) -> Self {
        let len = name.chars().count();
        Self {
            name,
            to_right,
            data_len: len,
            min_len: max(len, min_len),
            max_len: max(len, max_len),
        }
    }

    /// Returns the current length of a [`Column`].
    #[inline]
    pub fn len(&self) -> usize {
        self.data_len.clamp(self.min_len, self.max_len)
    }

    /// Returns `true` if [`Column`] has a current length of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column extension methods for string.
pub trait ColumnStringExt {
    /// Appends a given column name onto the end of this `String` using the column's current length.
    fn push_column(&mut self, column: &Column);
}

impl ColumnStringExt for String {
    fn push_column(&mut self, column: &Column) {
        if column.is_empty() {
            return;
        }

        self.push_str(&add_padding(column.name, column.len(), column.to_right));
    }
}
