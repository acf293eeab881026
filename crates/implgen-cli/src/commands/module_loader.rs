//! Reading module descriptions and writing results.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use implgen_core::Module;

use crate::error::CliError;

/// Load a module description from a file, or stdin for `-`.
pub fn load_module(path: &Path) -> Result<Module, CliError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let module = Module::from_json(&json).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(module = %module.path, types = module.types.len(), "loaded module");
    Ok(module)
}

/// Write `text` to `output`, or stdout when absent.
pub fn write_output(output: Option<&PathBuf>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
