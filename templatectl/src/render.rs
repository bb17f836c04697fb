use anyhow::{Context, Result};
use clap::ValueEnum;
use k8s_openapi::api::core::v1::PodTemplateSpec;
use serde::Serialize;
use workload_common::GenericResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// One extracted template, labelled with the resource it came from.
#[derive(Debug, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub partial: bool,
    pub template: PodTemplateSpec,
}

impl Entry {
    pub fn new(resource: &GenericResource, template: PodTemplateSpec) -> Self {
        Self {
            name: resource.metadata.name.clone().unwrap_or_default(),
            namespace: resource.metadata.namespace.clone(),
            partial: false,
            template,
        }
    }

    pub fn partial(resource: &GenericResource, template: PodTemplateSpec) -> Self {
        Self {
            partial: true,
            ..Self::new(resource, template)
        }
    }
}

pub fn render(entries: &[Entry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).context("serializing templates as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(entries).context("serializing templates as YAML"),
    }
}
