use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    ReservedCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::ReservedCharacter { character, index } => write!(f, "Reserved character {:?} at index {}", character, index),
        }
    }
}

/// Characters that carry framing meaning in an encoded text and can never be digits.
pub const RESERVED: &[u8] = b"._\t\n\r ";

const fn is_reserved(character: u8) -> bool {
    let mut index = 0;
    while index < RESERVED.len() {
        if RESERVED[index] == character {
            return true;
        }
        index += 1;
    }
    false
}

/// An ordered set of `N` ASCII digit characters with its inverse lookup table.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: u8) -> Option<u8> {
        self.decode.get(character as usize).copied().flatten()
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if is_reserved(character) {
                return Err(Error::ReservedCharacter {
                    character: character as char,
                    index,
                });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encode
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error};

    #[test]
    fn new() {
        let alphabet = match Alphabet::new(b"0123") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.encode(2), b'2');
        assert_eq!(alphabet.decode(b'3'), Some(3));
        assert_eq!(alphabet.decode(b'4'), None);
        assert_eq!(alphabet.decode(0xFF), None);
        assert_eq!(alphabet.as_bytes(), b"0123");
    }

    #[test]
    fn rejects() {
        assert_eq!(
            Alphabet::new(b"0120").err(),
            Some(Error::DuplicateCharacter {
                character: '0',
                first: 0,
                second: 3
            })
        );
        assert_eq!(Alphabet::new(b"01\xC3").err(), Some(Error::NonAsciiCharacter { character: 0xC3, index: 2 }));
        assert_eq!(Alphabet::new(b"0.1").err(), Some(Error::ReservedCharacter { character: '.', index: 1 }));
        assert_eq!(Alphabet::new(b"0 1").err(), Some(Error::ReservedCharacter { character: ' ', index: 1 }));
        assert_eq!(Alphabet::new(b"_01").err(), Some(Error::ReservedCharacter { character: '_', index: 0 }));
    }
}
