pub use self::colors::{TableColors, TextColors};

mod colors;
