pub mod app;
pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod logger;
pub mod report;

use self::{
    configuration::{Args, Configuration},
    error::Error,
    logger::Logger,
};
use clap::Parser;
use std::{io, process::ExitCode};

fn try_main() -> Result<(), Error> {
    let configuration = Configuration::new(Args::parse())?;
    logger::init(configuration.log_level()).map_err(|err| Error::context("logger err", err))?;
    let logger = Logger::new();
    logger.debug(format!("{:?}", configuration));

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&configuration, &mut stdin.lock(), &mut stdout.lock(), &logger)
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error.message());
            ExitCode::FAILURE
        }
    }
}
