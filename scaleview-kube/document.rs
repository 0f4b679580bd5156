use k8s_openapi::serde_json::{self, Map, Value};
use kube::core::DynamicObject;
use serde::Deserialize;

use crate::{AutoscalerResource, HPA_KIND};

#[cfg(test)]
#[path = "./document.tests.rs"]
mod document_tests;

/// Possible errors from reading autoscaler resources.
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    /// Text is neither valid YAML nor valid JSON.
    #[error("cannot parse resources document")]
    SyntaxError(#[from] serde_yaml::Error),

    /// Document is a scalar instead of an object, a list object or a sequence.
    #[error("document {0} does not contain kubernetes resources")]
    InvalidDocument(usize),

    /// Resource entry cannot be read as a kubernetes object.
    #[error("resource entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Parses YAML or JSON text into the list of [`AutoscalerResource`]s preserving their order.\
/// **Note** that text can hold many YAML documents, each one can be a single object,
/// a list object (e.g. `HorizontalPodAutoscalerList`) or a sequence of objects.
pub fn parse_resources(text: &str) -> Result<Vec<AutoscalerResource>, ResourceError> {
    let mut resources = Vec::new();
    let mut index = 0;

    for (document_no, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let value = Value::deserialize(document)?;
        for entry in get_entries(value, document_no)? {
            if let Some(resource) = to_resource(entry, index)? {
                resources.push(resource);
            }

            index += 1;
        }
    }

    tracing::debug!("parsed {} autoscaler resources from {} entries", resources.len(), index);
    Ok(resources)
}

/// Returns all resource entries stored in the document.
fn get_entries(document: Value, document_no: usize) -> Result<Vec<Value>, ResourceError> {
    match document {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => Ok(entries),
        Value::Object(mut object) if is_list(&object) => match object.remove("items") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Ok(Vec::new()),
        },
        Value::Object(object) => Ok(vec![Value::Object(object)]),
        _ => Err(ResourceError::InvalidDocument(document_no)),
    }
}

/// Returns `true` if object looks like kubernetes list, e.g. `kind: List` with `items`.
fn is_list(object: &Map<String, Value>) -> bool {
    let has_items = object.get("items").is_some_and(|i| i.is_array() || i.is_null());
    let is_list_kind = object
        .get("kind")
        .and_then(Value::as_str)
        .is_none_or(|kind| kind.ends_with("List"));

    has_items && is_list_kind
}

/// Converts resource entry to [`AutoscalerResource`].\
/// Returns `None` if the entry is a kubernetes object of a different kind.
fn to_resource(entry: Value, index: usize) -> Result<Option<AutoscalerResource>, ResourceError> {
    let Value::Object(mut object) = entry else {
        return Err(ResourceError::InvalidEntry {
            index,
            reason: "entry is not a mapping".to_owned(),
        });
    };

    if let Some(kind) = object.get("kind").and_then(Value::as_str)
        && kind != HPA_KIND
    {
        tracing::warn!("skipping resource entry {} of kind {}", index, kind);
        return Ok(None);
    }

    if object.get("metadata").is_none_or(Value::is_null) {
        object.insert("metadata".to_owned(), Value::Object(Map::new()));
    }

    let object = serde_json::from_value::<DynamicObject>(Value::Object(object)).map_err(|error| {
        ResourceError::InvalidEntry {
            index,
            reason: error.to_string(),
        }
    })?;

    Ok(Some(AutoscalerResource::from(&object)))
}
