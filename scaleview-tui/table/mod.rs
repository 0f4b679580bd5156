pub use self::autoscaler::STATUS_PLACEHOLDER;
pub use self::column::{Column, ColumnStringExt};
pub use self::header::Header;
pub use self::resource_table::ResourceTable;
pub use self::row::{Row, RowStringExt};
pub use self::view::{TableRow, TableView};

pub mod autoscaler;

mod column;
mod header;
mod resource_table;
mod row;
mod view;
