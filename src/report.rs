use crate::{configuration::Operation, error::Error};
use base50::{hex, DecodeError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorReport {
    message: String,
    index: Option<usize>,
    decoded: usize,
}

impl From<DecodeError> for ErrorReport {
    fn from(error: DecodeError) -> Self {
        Self {
            message: error.to_string(),
            index: error.index(),
            decoded: error.decoded(),
        }
    }
}

/// Summary of one run, for `--json`. Decoded bytes are given in hex.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    operation: Operation,
    input_length: usize,
    output_length: usize,
    output: String,
    error: Option<ErrorReport>,
}

impl Report {
    pub fn encoded(input_length: usize, text: &str) -> Self {
        Self {
            operation: Operation::Encode,
            input_length,
            output_length: text.len(),
            output: text.to_string(),
            error: None,
        }
    }

    pub fn decoded(input_length: usize, bytes: &[u8], error: Option<DecodeError>) -> Self {
        Self {
            operation: Operation::Decode,
            input_length,
            output_length: bytes.len(),
            output: hex::encode(bytes),
            error: error.map(ErrorReport::from),
        }
    }

    pub fn write(&self, writer: &mut dyn Write) -> Result<(), Error> {
        serde_json::to_writer(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
