//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("implgen")
        .about("Generate Go method stubs that implement interfaces")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(interfaces_command())
        .subcommand(stub_command())
}

/// List exported interfaces of a module.
pub fn interfaces_command() -> Command {
    Command::new("interfaces")
        .about("List the exported interfaces of a module")
        .after_help(
            r#"EXAMPLES:
  implgen interfaces kv.json          # name and method count
  implgen interfaces kv.json --json   # as JSON"#,
        )
        .arg(module_path_arg())
        .arg(json_arg())
}

/// Generate a stub file.
pub fn stub_command() -> Command {
    Command::new("stub")
        .about("Generate methods implementing interfaces of a module")
        .after_help(
            r#"EXAMPLES:
  implgen stub kv.json -t Stub                      # every interface
  implgen stub kv.json -t Fake -i Store --pointer   # one interface, *Fake receiver
  implgen stub kv.json -t Fake --body zero -o fake.go"#,
        )
        .arg(module_path_arg())
        .arg(type_arg())
        .arg(receiver_arg())
        .arg(pointer_arg())
        .arg(interface_arg())
        .arg(body_arg())
        .arg(message_arg())
        .arg(declare_type_arg())
        .arg(package_arg())
        .arg(package_path_arg())
        .arg(no_header_arg())
        .arg(output_arg())
}
