use scaleview_common::truncate;
use std::borrow::Cow;

/// Contract for item that can be rendered as a table row.
pub trait Row {
    /// Returns text value for the specified column number.\
    /// `None` means the value is missing in the item.
    fn column_text(&self, column: usize) -> Option<Cow<'_, str>>;

    /// Returns `true` if the item has values for all of its columns.
    #[inline]
    fn is_complete(&self) -> bool {
        true
    }
}

/// Extension methods for string.
pub trait RowStringExt {
    /// Appends a given cell text onto the end of this `String`.
    fn push_cell(&mut self, s: &str, len: usize, to_right: bool);
}

impl RowStringExt for String {
    fn push_cell(&mut self, s: &str, len: usize, to_right: bool) {
        if len == 0 {
            return;
        }

        let padding_len = len.saturating_sub(s.chars().count());
        if to_right && padding_len > 0 {
            (0..padding_len).for_each(|_| self.push(' '));
        }

        self.push_str(truncate(s, len));

        if !to_right && padding_len > 0 {
            (0..padding_len).for_each(|_| self.push(' '));
        }
    }
}
