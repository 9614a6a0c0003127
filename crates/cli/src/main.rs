use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use unixtools_cli::arguments::Provider;
use unixtools_cli::cli_args::Args;
use unixtools_cli::dispatch;
use unixtools_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    let request = args.get_request();
    debug!("Request: {:?}", request);

    let mut reader = stdin().lock();
    let mut writer = stdout().lock();

    dispatch::run(&request, &mut reader, &mut writer)
}

// Failures are reported as text only; the exit status is always success.
fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = execute() {
        eprintln!("{e}");
    }

    ExitCode::SUCCESS
}
