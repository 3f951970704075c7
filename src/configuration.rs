use crate::error::Error;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use serde::Serialize;
use std::{env, fmt, path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "base50", version, about = "Encode binary data as base50 text, or decode it back")]
pub struct Args {
    /// Input file (use "-" for stdin, leave out to read the arguments)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file (use "-" for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Treat input (when encoding) or output (when decoding) as base16
    #[arg(short = 'x', long = "hex")]
    pub hex: bool,

    /// Decode input
    #[arg(short, long)]
    pub decode: bool,

    /// Write a JSON report instead of the raw output
    #[arg(long)]
    pub json: bool,

    /// Log more, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Input data, when no input file is given
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Arguments(Vec<String>),
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encode,
    Decode,
}

#[derive(Debug, Clone)]
pub struct Configuration {
    input: Input,
    output: Output,
    operation: Operation,
    hex: bool,
    json: bool,
    log_level: LevelFilter,
}

fn var_map<T, E: fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: T,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|err| Error::new(format!("Invalid {} {}: {}", key, value, err))),
        None => Ok(default),
    }
}

fn raise(level: LevelFilter, verbose: u8) -> LevelFilter {
    let floor = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    level.max(floor)
}

impl Configuration {
    pub fn new(args: Args) -> Result<Self, Error> {
        Self::with_env(args, |key| env::var(key).ok())
    }

    pub fn with_env(args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let input = match args.input.as_deref() {
            Some("-") => Input::Stdin,
            Some(path) if !path.is_empty() => Input::File(PathBuf::from(path)),
            _ if args.arguments.is_empty() => return Err(Error::new("No arguments given for input.")),
            _ => Input::Arguments(args.arguments),
        };
        let output = match args.output.as_str() {
            "-" | "" => Output::Stdout,
            path => Output::File(PathBuf::from(path)),
        };
        let operation = if args.decode { Operation::Decode } else { Operation::Encode };
        let log_level = var_map(&lookup, "BASE50_LOG", |level| level.parse::<LevelFilter>(), LevelFilter::Warn)?;
        Ok(Self {
            input,
            output,
            operation,
            hex: args.hex,
            json: args.json,
            log_level: raise(log_level, args.verbose),
        })
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn hex(&self) -> bool {
        self.hex
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
