use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use workload_common::{GenericResource, GenericResourceList};

/// Reads the whole manifest, from stdin when `file` is `-`.
pub fn read_source(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("reading manifest from stdin")?;
        return Ok(raw);
    }

    fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

/// Parses a JSON document, or failing that one or more YAML documents, into
/// resources. Lists are flattened in order.
pub fn parse_resources(raw: &str) -> Result<Vec<GenericResource>> {
    let documents = match serde_json::from_str::<Value>(raw) {
        Ok(document) => vec![document],
        Err(json_err) => {
            tracing::debug!("input is not JSON ({json_err}), trying YAML");
            serde_yaml::Deserializer::from_str(raw)
                .map(Value::deserialize)
                .collect::<Result<Vec<_>, _>>()
                .context("parsing manifest as JSON or YAML")?
        }
    };

    let mut resources = Vec::new();
    for (index, document) in documents.into_iter().enumerate() {
        // blank `---` sections
        if document.is_null() {
            continue;
        }
        let items = split_document(document).with_context(|| format!("reading document {index}"))?;
        resources.extend(items);
    }

    Ok(resources)
}

fn split_document(document: Value) -> Result<Vec<GenericResource>> {
    if document.get("items").is_some_and(Value::is_array) {
        let list: GenericResourceList =
            serde_json::from_value(document).context("parsing resource list")?;
        tracing::debug!(kind = %list.types.kind, items = list.items.len(), "read resource list");
        return Ok(list.items);
    }

    let resource: GenericResource = serde_json::from_value(document).context("parsing resource")?;
    Ok(vec![resource])
}
