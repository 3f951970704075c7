use crate::base50::is_skipped;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidHexCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
        }
    }
}

const fn value(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'A'..=b'F' => Ok(character - b'A' + 10),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'0'..=b'9' => Ok(character - b'0'),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

fn digit_count(input: &[u8]) -> usize {
    input.iter().filter(|&&character| !is_skipped(character)).count()
}

/// Whitespace and `_` between digits are ignored. An odd number of digits reads as if it had a
/// leading `0`, so `f` is `[0x0f]`.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = vec![0u8; (digit_count(input) + 1) / 2];
    let len = decode_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let input = input.as_ref();
    let output = output.as_mut();
    let digits = digit_count(input);
    let len = (digits + 1) / 2;
    if output.len() < len {
        return Err(Error::BufferTooSmall);
    }
    let mut high = if digits % 2 == 1 { Some(0) } else { None };
    let mut index = 0;
    for (position, &character) in input.iter().enumerate() {
        if is_skipped(character) {
            continue;
        }
        let low = value(character, position)?;
        match high.take() {
            Some(high) => {
                output[index] = high << 4 | low;
                index += 1;
            }
            None => high = Some(low),
        }
    }
    Ok(index)
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}
