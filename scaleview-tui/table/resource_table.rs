use crate::table::{Header, Row, TableRow, TableView, autoscaler};

#[cfg(test)]
#[path = "./resource_table.tests.rs"]
mod resource_table_tests;

/// Stateless table that maps a list of items to the [`TableView`].
#[derive(Clone, Debug)]
pub struct ResourceTable {
    header: Header,
    unknown_value: String,
}

impl ResourceTable {
    /// Creates new [`ResourceTable`] instance.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            unknown_value: String::new(),
        }
    }

    /// Creates new [`ResourceTable`] instance for the horizontal pod autoscalers.
    pub fn autoscalers() -> Self {
        Self::new(autoscaler::header())
    }

    /// Sets text that is displayed in place of the missing values.
    pub fn with_unknown_value(mut self, value: impl Into<String>) -> Self {
        self.unknown_value = value.into();
        self
    }

    /// Renders provided `items` as table rows keeping their order.
    pub fn render<T: Row>(&self, items: &[T]) -> TableView {
        let columns_no = self.header.get_columns_count();
        let rows = items
            .iter()
            .map(|item| {
                let (cells, missing): (Vec<String>, Vec<bool>) = (0..columns_no)
                    .map(|column| match item.column_text(column) {
                        Some(text) => (text.into_owned(), false),
                        None => (self.unknown_value.clone(), true),
                    })
                    .unzip();

                TableRow {
                    cells: cells.into(),
                    missing: missing.into(),
                    is_complete: item.is_complete(),
                }
            })
            .collect();

        TableView::new(self.header.clone(), rows)
    }
}
