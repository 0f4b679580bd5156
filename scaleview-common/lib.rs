pub use self::utils::*;

pub mod logging;

mod utils;
