use std::path::PathBuf;

use serde::Serialize;

use implgen_core::Module;
use implgen_lib::find_interfaces;

use super::module_loader::{load_module, write_output};
use crate::error::CliError;

pub struct InterfacesArgs {
    pub module_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InterfaceSummary<'m> {
    name: &'m str,
    methods: usize,
}

pub fn run(args: InterfacesArgs) -> Result<(), CliError> {
    let module = load_module(&args.module_path)?;
    let listing = render_listing(&module, args.json)?;
    write_output(None, &listing)
}

/// One line per exported interface, or a JSON array.
pub fn render_listing(module: &Module, json: bool) -> Result<String, CliError> {
    let summaries: Vec<_> = find_interfaces(module)
        .into_iter()
        .map(|entry| InterfaceSummary {
            name: entry.name,
            methods: entry.interface.len(),
        })
        .collect();

    if json {
        let mut out = serde_json::to_string_pretty(&summaries)?;
        out.push('\n');
        return Ok(out);
    }

    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for summary in &summaries {
        let noun = if summary.methods == 1 { "method" } else { "methods" };
        out.push_str(&format!(
            "{:width$}  {} {noun}\n",
            summary.name, summary.methods
        ));
    }
    Ok(out)
}
