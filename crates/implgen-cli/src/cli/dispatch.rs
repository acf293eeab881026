//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use implgen_lib::BodyStyle;

use crate::commands::interfaces::InterfacesArgs;
use crate::commands::stub::StubArgs;

pub struct InterfacesParams {
    pub module_path: PathBuf,
    pub json: bool,
}

impl InterfacesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: module_path(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<InterfacesParams> for InterfacesArgs {
    fn from(p: InterfacesParams) -> Self {
        Self {
            module_path: p.module_path,
            json: p.json,
        }
    }
}

pub struct StubParams {
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
    pub no_header: bool,
    pub output: Option<PathBuf>,
}

impl StubParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: module_path(m),
            type_name: string(m, "type_name").unwrap_or_default(),
            receiver: string(m, "receiver").unwrap_or_default(),
            pointer: m.get_flag("pointer"),
            interfaces: m
                .get_many::<String>("interfaces")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            body: parse_body(m),
            message: string(m, "message").unwrap_or_default(),
            declare_type: m.get_flag("declare_type"),
            package: string(m, "package"),
            package_path: string(m, "package_path"),
            no_header: m.get_flag("no_header"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<StubParams> for StubArgs {
    fn from(p: StubParams) -> Self {
        Self {
            module_path: p.module_path,
            type_name: p.type_name,
            receiver: p.receiver,
            pointer: p.pointer,
            interfaces: p.interfaces,
            body: p.body,
            message: p.message,
            declare_type: p.declare_type,
            package: p.package,
            package_path: p.package_path,
            header: !p.no_header,
            output: p.output,
        }
    }
}

fn module_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("module_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn string(m: &ArgMatches, id: &str) -> Option<String> {
    m.get_one::<String>(id).cloned()
}

fn parse_body(m: &ArgMatches) -> BodyStyle {
    match m.get_one::<String>("body").map(String::as_str) {
        Some("zero") => BodyStyle::Zero,
        _ => BodyStyle::Panic,
    }
}
