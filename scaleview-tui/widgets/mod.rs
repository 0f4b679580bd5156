pub use self::table::TableWidget;

mod table;
