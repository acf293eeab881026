//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Module description (positional).
pub fn module_path_arg() -> Arg {
    Arg::new("module_path")
        .value_name("MODULE_JSON")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Module description in JSON, or - for stdin")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Receiver type name (-t/--type).
pub fn type_arg() -> Arg {
    Arg::new("type_name")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .required(true)
        .help("Receiver type of the generated methods")
}

/// Receiver binding (-r/--receiver).
pub fn receiver_arg() -> Arg {
    Arg::new("receiver")
        .short('r')
        .long("receiver")
        .value_name("NAME")
        .default_value("s")
        .help("Receiver variable name")
}

/// Pointer receiver (--pointer).
pub fn pointer_arg() -> Arg {
    Arg::new("pointer")
        .long("pointer")
        .action(ArgAction::SetTrue)
        .help("Use a pointer receiver")
}

/// Interfaces to implement (-i/--interface, repeatable).
pub fn interface_arg() -> Arg {
    Arg::new("interfaces")
        .short('i')
        .long("interface")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Interface to implement (repeatable; default: all)")
}

/// Method body style (--body).
pub fn body_arg() -> Arg {
    Arg::new("body")
        .long("body")
        .value_name("STYLE")
        .default_value("panic")
        .value_parser(["panic", "zero"])
        .help("Method bodies: panic, or return zero values")
}

/// Panic message (-m/--message).
pub fn message_arg() -> Arg {
    Arg::new("message")
        .short('m')
        .long("message")
        .value_name("TEXT")
        .default_value("not implemented")
        .help("Message of panic bodies")
}

/// Declare the receiver type (--declare-type).
pub fn declare_type_arg() -> Arg {
    Arg::new("declare_type")
        .long("declare-type")
        .action(ArgAction::SetTrue)
        .help("Emit `type <TYPE> struct{}`")
}

/// Output package name (-p/--package).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .short('p')
        .long("package")
        .value_name("NAME")
        .help("Package of the generated file (default: the module's package)")
}

/// Output package import path (--package-path).
pub fn package_path_arg() -> Arg {
    Arg::new("package_path")
        .long("package-path")
        .value_name("PATH")
        .help("Import path of the generated file's package")
}

/// Omit the generated-code header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit the generated-code header comment")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}
