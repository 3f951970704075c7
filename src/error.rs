use base50::{hex, DecodeError};
use std::{error, fmt, io};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn context(context: &str, error: impl fmt::Display) -> Self {
        Self::new(format!("{}: {}", context, error))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Self::context("hex input err", error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Self::context("decode input err", error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::context("report err", error)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use base50::DecodeError;

    #[test]
    fn from_decode_error() {
        let error = Error::from(DecodeError::InvalidByte {
            byte: b'O',
            index: 3,
            decoded: 0,
        });
        assert_eq!(error.message(), "decode input err: Invalid character 'O' at index 3");
    }

    #[test]
    fn from_hex_error() {
        let error = Error::from(base50::hex::Error::InvalidHexCharacter { character: 'g', index: 1 });
        assert_eq!(error.to_string(), "hex input err: Invalid character 'g' at position 1");
    }
}
