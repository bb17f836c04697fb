//! Pod template extraction for workload controllers whose spec is untyped.
//!
//! A [`GenericResource`] keeps its `spec` as a raw JSON map, so one type can
//! stand in for DaemonSets and any custom controller that embeds a pod
//! template. [`extract_typed_field`] walks a `.`-separated [`FieldPath`] into
//! that map and decodes what it finds.
//!
//! ```
//! use serde_json::json;
//! use workload_common::GenericResource;
//!
//! let ds: GenericResource = serde_json::from_value(json!({
//!     "kind": "DaemonSet",
//!     "spec": {"template": {"spec": {"nodeName": "node-1", "containers": []}}}
//! }))
//! .unwrap();
//!
//! let template = ds.get_pod_template_spec("template").unwrap();
//! assert_eq!(template.spec.unwrap().node_name.as_deref(), Some("node-1"));
//! ```

pub mod decode;
pub mod error;
pub mod path;
pub mod types;

pub use decode::{extract_typed_field, salvage};
pub use error::{ExtractError, PathError};
pub use path::FieldPath;
pub use types::{
    GenericDaemonSet, GenericDaemonSetList, GenericResource, GenericResourceList, TypeMeta,
};
