use super::{is_skipped, length::GROUP_BYTES, Alphabet, ALPHABET, BASE, CHUNK_BYTES, GROUP_DIGITS, MAX_CHUNK_VALUE, STOP};
use std::{error, fmt};

/// Every variant carries `decoded`, the number of bytes written before the failing group.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { decoded: usize },
    InvalidByte { byte: u8, index: usize, decoded: usize },
    InvalidTotal { total: u64, index: usize, decoded: usize },
}

impl Error {
    pub fn decoded(&self) -> usize {
        match *self {
            Error::BufferTooSmall { decoded } | Error::InvalidByte { decoded, .. } | Error::InvalidTotal { decoded, .. } => decoded,
        }
    }

    /// Offset in the input of the invalid byte, or of the start of the invalid group.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Error::BufferTooSmall { .. } => None,
            Error::InvalidByte { index, .. } | Error::InvalidTotal { index, .. } => Some(index),
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall { .. } => write!(f, "Output buffer too small"),
            Error::InvalidByte { byte, index, .. } if byte.is_ascii_graphic() => {
                write!(f, "Invalid character '{}' at index {}", byte as char, index)
            }
            Error::InvalidByte { byte, index, .. } => write!(f, "Invalid byte {:#04x} at index {}", byte, index),
            Error::InvalidTotal { total, index, .. } if total > MAX_CHUNK_VALUE => {
                write!(f, "Invalid group at index {}: {:#x} > 0xFFFF_FFFF_FFFF_FF", index, total)
            }
            Error::InvalidTotal { total, index, .. } => {
                write!(f, "Invalid encoding at index {}: {:#x} (Eg. 56 should be 056)", index, total)
            }
        }
    }
}

/// The digits of one group, read out of the input before anything is written back.
#[derive(Copy, Clone, Debug)]
struct Group {
    value: u64,
    digits: usize,
    index: usize,
}

impl Group {
    fn to_bytes(self, decoded: usize) -> Result<([u8; CHUNK_BYTES], usize), Error> {
        let len = GROUP_BYTES[self.digits];
        let mut bytes = [0u8; CHUNK_BYTES];
        let mut value = self.value;
        for byte in bytes[..len].iter_mut().rev() {
            *byte = (value & 0xFF) as u8;
            value >>= 8;
        }
        if value > 0 {
            return Err(Error::InvalidTotal {
                total: self.value,
                index: self.index,
                decoded,
            });
        }
        Ok((bytes, len))
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<50>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<50>) -> Self {
        Self { alphabet }
    }

    /// Reads up to ten digits starting at `position`, stopping early at a stop character or at
    /// the end of the input. Groups without digits are passed over.
    fn next_group(&self, input: &[u8], position: &mut usize, decoded: usize) -> Result<Option<Group>, Error> {
        while *position < input.len() {
            let index = *position;
            let mut value: u64 = 0;
            let mut digits = 0;
            while digits < GROUP_DIGITS && *position < input.len() {
                let character = input[*position];
                *position += 1;
                if is_skipped(character) {
                    continue;
                }
                if character == STOP {
                    break;
                }
                let digit = self.alphabet.decode(character).ok_or(Error::InvalidByte {
                    byte: character,
                    index: *position - 1,
                    decoded,
                })?;
                // At most 50^10 - 1, well within u64.
                value = value * BASE + digit as u64;
                digits += 1;
            }
            if value > MAX_CHUNK_VALUE {
                return Err(Error::InvalidTotal { total: value, index, decoded });
            }
            if digits > 0 {
                return Ok(Some(Group { value, digits, index }));
            }
        }
        Ok(None)
    }

    /// Decodes `input` into the start of `output` and returns the number of bytes written.
    ///
    /// An `output` of `decode_len(input.len())` bytes is always large enough. On error, the
    /// first `error.decoded()` bytes of `output` hold everything decoded before the failure.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let mut position = 0;
        let mut decoded = 0;
        while let Some(group) = self.next_group(input, &mut position, decoded)? {
            let (bytes, len) = group.to_bytes(decoded)?;
            output
                .get_mut(decoded..decoded + len)
                .ok_or(Error::BufferTooSmall { decoded })?
                .copy_from_slice(&bytes[..len]);
            decoded += len;
        }
        Ok(decoded)
    }

    /// Decodes the text held in `buffer` over itself, leaving the bytes at its start.
    ///
    /// A group never decodes to more bytes than it has characters, so the write position can
    /// not overtake the read position.
    pub fn decode_in_place(&self, buffer: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let buffer = buffer.as_mut();
        let mut position = 0;
        let mut decoded = 0;
        while let Some(group) = self.next_group(buffer, &mut position, decoded)? {
            let (bytes, len) = group.to_bytes(decoded)?;
            debug_assert!(decoded + len <= position);
            buffer[decoded..decoded + len].copy_from_slice(&bytes[..len]);
            decoded += len;
        }
        Ok(decoded)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = input.as_ref().to_vec();
        let len = self.decode_in_place(&mut output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Like `decode`, but hands back the bytes decoded before an error along with it.
    pub fn decode_partial(&self, input: impl AsRef<[u8]>) -> (Vec<u8>, Option<Error>) {
        let mut output = input.as_ref().to_vec();
        let (len, error) = match self.decode_in_place(&mut output) {
            Ok(len) => (len, None),
            Err(error) => (error.decoded(), Some(error)),
        };
        output.truncate(len);
        (output, error)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_partial(input: impl AsRef<[u8]>) -> (Vec<u8>, Option<Error>) {
    Decoder::default().decode_partial(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_in_place(buffer: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_in_place(buffer)
}
