pub use self::table::{ResourceTable, Row, TableRow, TableView};
pub use self::widgets::TableWidget;

pub mod table;
pub mod widgets;
