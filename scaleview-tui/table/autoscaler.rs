use scaleview_kube::AutoscalerResource;
use std::borrow::Cow;

use crate::table::{Column, Header, Row};

/// Text shown in the `Status` column for every autoscaler.\
/// **Note** that it does not reflect the autoscaler state.
pub const STATUS_PLACEHOLDER: &str = "Able to scale";

/// Returns [`Header`] for the `horizontalpodautoscaler` kubernetes resource.
pub fn header() -> Header {
    Header::from(Box::new([
        Column::bound("Name", 4, 253, false),
        Column::bound("Namespace", 9, 63, false),
        Column::bound("Min Pods", 8, 20, true),
        Column::bound("Max Pods", 8, 20, true),
        Column::bound("Replicas", 8, 20, true),
        Column::bound("Status", 6, 20, false),
    ]))
}

impl Row for AutoscalerResource {
    fn column_text(&self, column: usize) -> Option<Cow<'_, str>> {
        match column {
            0 => self.name.as_deref().map(Cow::Borrowed),
            1 => self.namespace.as_deref().map(Cow::Borrowed),
            2 => self.min_replicas.map(|v| Cow::Owned(v.to_string())),
            3 => self.max_replicas.map(|v| Cow::Owned(v.to_string())),
            4 => self.current_replicas.map(|v| Cow::Owned(v.to_string())),
            5 => Some(Cow::Borrowed(STATUS_PLACEHOLDER)),
            _ => None,
        }
    }

    fn is_complete(&self) -> bool {
        AutoscalerResource::is_complete(self)
    }
}
