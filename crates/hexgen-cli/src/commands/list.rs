//! `hexgen list` — show previously generated ports.

use std::path::PathBuf;

use hexgen_adapters::LocalFilesystem;
use hexgen_core::prelude::*;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// List the ports discovered under the configured ports directory.
pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: GeneratorConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_root = args.output.unwrap_or_else(|| PathBuf::from("."));
    let fs = LocalFilesystem::new();

    let ports = scan_ports(&fs, &project_root, &config).map_err(CliError::Core)?;

    if ports.is_empty() {
        output.info(&format!(
            "No ports found under {}",
            project_root.join(&config.output.ports).display()
        ))?;
        return Ok(());
    }

    match args.format {
        ListFormat::List => {
            for port in &ports {
                output.print(&port.name)?;
            }
        }
        ListFormat::Json => {
            let rows: Vec<serde_json::Value> = ports
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "name": p.name,
                        "token": p.token_name,
                        "tokenPath": p.token_path.display().to_string(),
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise port list: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&text)?;
        }
        ListFormat::Table => {
            let name_width = ports
                .iter()
                .map(|p| p.name.len())
                .max()
                .unwrap_or(4)
                .max("NAME".len());
            output.header(&format!("{:<name_width$}  TOKEN", "NAME"))?;
            for port in &ports {
                output.print(&format!("{:<name_width$}  {}", port.name, port.token_name))?;
            }
        }
    }

    Ok(())
}
