mod manifest;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use workload_common::FieldPath;

use crate::render::{Entry, OutputFormat};

/// Print the pod templates embedded in generic workload manifests.
#[derive(Parser, Debug)]
#[command(name = "templatectl", version, about)]
struct Cli {
    /// Manifest to read (JSON or YAML, single resource or list); `-` reads stdin
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Dot-separated location of the pod template inside each resource's spec
    #[arg(short, long, env = "TEMPLATECTL_PATH", default_value = "template")]
    path: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Emit partially decoded templates instead of dropping them
    #[arg(long)]
    best_effort: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let path = FieldPath::parse(&cli.path);

    let raw = manifest::read_source(&cli.file)?;
    let resources = manifest::parse_resources(&raw)?;
    if resources.is_empty() {
        bail!("no resources found in {}", cli.file.display());
    }

    tracing::debug!(count = resources.len(), %path, "extracting pod templates");

    let mut entries = Vec::with_capacity(resources.len());
    let mut failed = 0;

    for resource in &resources {
        let name = resource.metadata.name.as_deref().unwrap_or("<unnamed>");

        match resource.get_pod_template_spec(path.clone()) {
            Ok(template) => entries.push(Entry::new(resource, template)),
            Err(err) if cli.best_effort && err.is_decode_failure() => {
                failed += 1;
                tracing::warn!(
                    resource = name,
                    kind = %resource.types.kind,
                    "emitting partial template: {err}"
                );
                if let Some(partial) = err.into_partial() {
                    entries.push(Entry::partial(resource, partial));
                }
            }
            Err(err) => {
                failed += 1;
                tracing::error!(resource = name, kind = %resource.types.kind, "{err}");
            }
        }
    }

    println!("{}", render::render(&entries, cli.output)?);

    if failed > 0 {
        bail!(
            "{failed} of {} resources did not yield a complete pod template at `{path}`",
            resources.len()
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
