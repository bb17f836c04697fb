use std::{convert::Infallible, fmt, str::FromStr};

use serde_json::{Map, Value};

use crate::error::PathError;

/// A `.`-separated key path into a spec map, e.g. `template` or `spec.template`.
///
/// Segments are taken literally: `a..b` has an empty middle segment that is
/// looked up as the key `""`. There is no escaping for keys containing `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks `spec` one segment at a time and returns the value at the last one.
    ///
    /// Every value before the last segment must be an object. The last value
    /// is returned whatever its type; checking it is the decoder's job.
    pub fn resolve<'a>(
        &self,
        spec: Option<&'a Map<String, Value>>,
    ) -> Result<&'a Value, PathError> {
        let mut map = spec.ok_or(PathError::MissingSpec)?;
        let Some((last, parents)) = self.segments.split_last() else {
            return Err(self.not_found("", 0));
        };

        for (depth, segment) in parents.iter().enumerate() {
            map = match self.lookup(map, segment, depth)? {
                Value::Object(child) => child,
                other => {
                    return Err(PathError::TypeMismatch {
                        path: self.to_string(),
                        segment: segment.clone(),
                        depth,
                        found: kind_of(other),
                    })
                }
            };
        }

        self.lookup(map, last, parents.len())
    }

    fn lookup<'a>(
        &self,
        map: &'a Map<String, Value>,
        segment: &str,
        depth: usize,
    ) -> Result<&'a Value, PathError> {
        map.get(segment).ok_or_else(|| self.not_found(segment, depth))
    }

    fn not_found(&self, segment: &str, depth: usize) -> PathError {
        PathError::PathNotFound {
            path: self.to_string(),
            segment: segment.to_string(),
            depth,
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test spec must be an object"),
        }
    }

    #[test]
    fn parse_keeps_empty_segments() {
        let path = FieldPath::parse("a..b");
        assert_eq!(path.segments(), ["a", "", "b"]);
        assert_eq!(path.to_string(), "a..b");

        assert_eq!(FieldPath::parse("").segments(), [""]);
        assert_eq!(FieldPath::parse(".template").segments(), ["", "template"]);
    }

    #[test]
    fn resolve_walks_nested_objects() {
        let spec = object(json!({"spec": {"template": {"metadata": {"name": "web"}}}}));
        let value = FieldPath::parse("spec.template").resolve(Some(&spec)).unwrap();
        assert_eq!(value, &json!({"metadata": {"name": "web"}}));
    }

    #[test]
    fn resolve_without_spec_is_missing_spec() {
        let err = FieldPath::parse("template").resolve(None).unwrap_err();
        assert_eq!(err, PathError::MissingSpec);
    }

    #[test]
    fn resolve_reports_the_absent_segment() {
        let spec = object(json!({"spec": {"template": {}}}));
        let err = FieldPath::parse("spec.podTemplate").resolve(Some(&spec)).unwrap_err();
        assert_eq!(
            err,
            PathError::PathNotFound {
                path: "spec.podTemplate".into(),
                segment: "podTemplate".into(),
                depth: 1,
            }
        );
    }

    #[test]
    fn resolve_rejects_scalars_before_the_last_segment() {
        let spec = object(json!({"replicas": 3}));
        let err = FieldPath::parse("replicas.template").resolve(Some(&spec)).unwrap_err();
        assert_eq!(
            err,
            PathError::TypeMismatch {
                path: "replicas.template".into(),
                segment: "replicas".into(),
                depth: 0,
                found: "a number",
            }
        );
    }

    #[test]
    fn resolve_returns_last_value_of_any_type() {
        let spec = object(json!({"template": "not-a-map"}));
        let value = FieldPath::parse("template").resolve(Some(&spec)).unwrap();
        assert_eq!(value, &json!("not-a-map"));
    }

    #[test]
    fn resolve_looks_up_empty_segments_literally() {
        let spec = object(json!({"a": {"": {"b": {"ok": true}}}}));
        let value = FieldPath::parse("a..b").resolve(Some(&spec)).unwrap();
        assert_eq!(value, &json!({"ok": true}));

        let spec = object(json!({"a": {"b": {}}}));
        assert!(matches!(
            FieldPath::parse("a..b").resolve(Some(&spec)),
            Err(PathError::PathNotFound { depth: 1, .. })
        ));
    }
}
