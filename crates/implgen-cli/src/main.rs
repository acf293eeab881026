mod cli;
mod commands;
mod error;
mod logging;


use std::process::ExitCode;

use cli::{InterfacesParams, StubParams, build_cli};

fn main() -> ExitCode {
    logging::init();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("interfaces", m)) => {
            let params = InterfacesParams::from_matches(m);
            commands::interfaces::run(params.into())
        }
        Some(("stub", m)) => {
            let params = StubParams::from_matches(m);
            commands::stub::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
