//! Decoding a resolved spec value into a typed target.
//!
//! Field names come from the target's serde attributes (`rename`,
//! `rename_all`), which play the part of struct field tags. Target fields
//! without a matching key keep their default and unknown keys are skipped,
//! as long as the target does not opt into `deny_unknown_fields`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{error::ExtractError, path::FieldPath};

/// Resolves `path` in `spec` and decodes the value found there into `T`.
///
/// Traversal failures return [`ExtractError::Path`] with nothing attached.
/// If the value is found but does not fit `T`, [`ExtractError::Decode`]
/// carries a best-effort `T` built from the entries that did fit.
pub fn extract_typed_field<T>(
    spec: Option<&Map<String, Value>>,
    path: impl Into<FieldPath>,
) -> Result<T, ExtractError<T>>
where
    T: DeserializeOwned + Default,
{
    let path = path.into();
    let value = path.resolve(spec)?;

    T::deserialize(value).map_err(|source| ExtractError::Decode {
        path: path.to_string(),
        partial: Box::new(salvage(value)),
        source,
    })
}

/// Decodes as much of `value` as `T` accepts.
///
/// Works on a copy of the object that only keeps entries which still let the
/// whole candidate decode, descending into nested objects so one bad leaf
/// does not discard its siblings. Arrays are kept or dropped as a whole.
pub fn salvage<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    let accepts = |candidate: &Value| T::deserialize(candidate).is_ok();

    prune(value, &accepts)
        .and_then(|kept| T::deserialize(&kept).ok())
        .unwrap_or_default()
}

fn prune(value: &Value, accepts: &dyn Fn(&Value) -> bool) -> Option<Value> {
    if accepts(value) {
        return Some(value.clone());
    }

    let Value::Object(map) = value else {
        return None;
    };

    let mut kept = Map::new();
    for (key, child) in map {
        let with_child = |candidate: &Value| {
            let mut attempt = kept.clone();
            attempt.insert(key.clone(), candidate.clone());
            accepts(&Value::Object(attempt))
        };

        if let Some(child) = prune(child, &with_child) {
            kept.insert(key.clone(), child);
        }
    }

    let kept = Value::Object(kept);
    accepts(&kept).then_some(kept)
}
