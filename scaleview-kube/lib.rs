pub use self::document::{ResourceError, parse_resources};
pub use self::resource::{AutoscalerResource, HPA_KIND};

mod document;
mod resource;
