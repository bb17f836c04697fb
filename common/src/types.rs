use k8s_openapi::api::core::v1::PodTemplateSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{decode::extract_typed_field, error::ExtractError, path::FieldPath};

/// The `apiVersion`/`kind` pair every Kubernetes document carries inline.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// A workload controller whose spec is kept untyped.
///
/// Any controller kind with a pod-template-shaped field somewhere in its spec
/// (DaemonSets, or custom resources) can be read through this one type.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenericResource {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// `None` when the document has no spec (or `spec: null`), which is not
    /// the same as an empty one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Map<String, Value>>,
}

pub type GenericDaemonSet = GenericResource;

impl GenericResource {
    /// Reads the pod template stored at `path` in the spec, e.g. `template`.
    pub fn get_pod_template_spec(
        &self,
        path: impl Into<FieldPath>,
    ) -> Result<PodTemplateSpec, ExtractError<PodTemplateSpec>> {
        self.extract_field(path)
    }

    pub fn extract_field<T>(&self, path: impl Into<FieldPath>) -> Result<T, ExtractError<T>>
    where
        T: DeserializeOwned + Default,
    {
        extract_typed_field(self.spec.as_ref(), path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenericResourceList {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    pub items: Vec<GenericResource>,
}

pub type GenericDaemonSetList = GenericResourceList;
