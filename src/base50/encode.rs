use super::{
    length::{encode_len, PARTIAL_DIGITS},
    Alphabet, ALPHABET, BASE, CHUNK_BYTES, GROUP_DIGITS, MAX_CHUNK_VALUE, STOP,
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer is shorter than `encode_len` of the input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// A trailing chunk of `index` bytes whose value is below the limit fits in one digit less.
/// Only the widths where one digit less still decodes to the same number of bytes qualify.
const SHORT_FORM_BELOW: [Option<u64>; CHUNK_BYTES] = [None, Some(BASE.pow(1)), None, Some(BASE.pow(4)), None, Some(BASE.pow(7)), None];

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<50>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<50>) -> Self {
        Self { alphabet }
    }

    fn encode_value(&self, mut value: u64, output: &mut [u8]) {
        debug_assert!(value <= MAX_CHUNK_VALUE);
        debug_assert!(!output.is_empty() && output.len() <= GROUP_DIGITS);
        for digit in output.iter_mut().rev() {
            *digit = self.alphabet.encode((value % BASE) as usize);
            value /= BASE;
        }
        debug_assert_eq!(value, 0);
    }

    fn encode_chunk(&self, chunk: &[u8], output: &mut [u8]) -> usize {
        let value = chunk.iter().fold(0u64, |value, &byte| (value << 8) | byte as u64);
        let digits = match chunk.len() {
            CHUNK_BYTES => GROUP_DIGITS,
            len => match SHORT_FORM_BELOW[len] {
                Some(limit) if value < limit => PARTIAL_DIGITS[len] - 1,
                _ => PARTIAL_DIGITS[len],
            },
        };
        self.encode_value(value, &mut output[..digits]);
        digits
    }

    fn encode_unchecked(&self, input: &[u8], output: &mut [u8]) -> usize {
        let mut index = 0;
        let mut chunks = input.chunks_exact(CHUNK_BYTES);
        for chunk in &mut chunks {
            index += self.encode_chunk(chunk, &mut output[index..]);
        }
        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            index += self.encode_chunk(remainder, &mut output[index..]);
            output[index] = STOP;
            index += 1;
        }
        index
    }

    /// Encodes `input` into the start of `output` and returns the number of characters written.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < encode_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        Ok(self.encode_unchecked(input, output))
    }

    pub fn encode_to_vec(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut output = vec![0u8; encode_len(input.len())];
        let len = self.encode_unchecked(input, &mut output);
        output.truncate(len);
        output
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        // Alphabet characters and the stop character are all ASCII.
        unsafe { String::from_utf8_unchecked(self.encode_to_vec(input)) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    Encoder::default().encode_to_vec(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
