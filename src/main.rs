//! Entry point for deploy-check.
use std::{io, process::ExitCode};

use clap::Parser;
use deploy_check::{
    checks::Verdict,
    cli::{execute, CheckArgs, FatalExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<Verdict, FatalExit> {
    telemetry::init_tracing().map_err(FatalExit::from_error)?;
    let args = CheckArgs::parse();
    let profile = args.build().map_err(FatalExit::from_error)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&profile, &mut out).map_err(FatalExit::from_error)
}
