use std::path::PathBuf;

use tracing::info;

use implgen_core::Module;
use implgen_lib::{BodyStyle, StubConfig, generate_file};

use super::module_loader::{load_module, write_output};
use crate::error::CliError;

pub struct StubArgs {
    pub module_path: PathBuf,
    pub type_name: String,
    pub receiver: String,
    pub pointer: bool,
    pub interfaces: Vec<String>,
    pub body: BodyStyle,
    pub message: String,
    pub declare_type: bool,
    pub package: Option<String>,
    pub package_path: Option<String>,
    pub header: bool,
    pub output: Option<PathBuf>,
}

pub fn run(args: StubArgs) -> Result<(), CliError> {
    let module = load_module(&args.module_path)?;
    let source = generate(&module, &args)?;
    write_output(args.output.as_ref(), &source)?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "wrote stub file");
    }
    Ok(())
}

pub fn generate(module: &Module, args: &StubArgs) -> Result<String, CliError> {
    Ok(generate_file(module, args.interfaces.as_slice(), &config(args))?)
}

pub fn config(args: &StubArgs) -> StubConfig {
    let mut config = StubConfig::new()
        .receiver_type(args.type_name.as_str())
        .binding(args.receiver.as_str())
        .pointer(args.pointer)
        .body(args.body)
        .message(args.message.as_str())
        .declare_type(args.declare_type);
    if let Some(package) = &args.package {
        config = config.package(package.as_str());
    }
    if let Some(path) = &args.package_path {
        config = config.package_path(path.as_str());
    }
    if !args.header {
        config = config.header(None);
    }
    config
}
