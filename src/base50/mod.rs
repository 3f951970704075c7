//! Base50: seven bytes of binary data in ten characters of text.
//!
//! The input is split into chunks of seven bytes. Each chunk is read as a big-endian integer of
//! at most 56 bits and written as ten base 50 digits, most significant first:
//!
//! ```text
//!   bytes  max value                                    digits  max value
//!   1      0xFF                =                255     2       2499
//!   2      0xFFFF              =              65535     3       124999
//!   3      0xFFFF_FF           =           16777215     5       312499999
//!   4      0xFFFF_FFFF         =         4294967295     6       15624999999
//!   5      0xFFFF_FFFF_FF      =      1099511627775     8       39062499999999
//!   6      0xFFFF_FFFF_FFFF    =    281474976710655     9       1953124999999999
//!   7      0xFFFF_FFFF_FFFF_FF =  72057594037927935     10      97656249999999999
//! ```
//!
//! A trailing chunk of one to six bytes uses the shorter widths above and is terminated by the
//! stop character, so independently encoded texts can be concatenated and still decoded.

pub mod decode;
pub mod encode;
pub mod length;

pub use crate::base_common::Alphabet;
pub use decode::{decode, decode_in_place, decode_into, decode_partial, Decoder};
pub use encode::{encode, encode_into, encode_to_vec, Encoder};
pub use length::{decode_len, encode_len};

/// Look-alikes are left out: `B D I O i l` and, to a lesser degree, `C Q V c o v`.
pub const ALPHABET: Alphabet<50> = match Alphabet::new(b"0123456789AEFGHJKLMNPRSTUWXYZabdefghjkmnpqrstuwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const BASE: u64 = 50;

/// Terminates a partial group.
pub const STOP: u8 = b'.';

pub const CHUNK_BYTES: usize = 7;

pub const GROUP_DIGITS: usize = 10;

/// Largest value a full chunk can hold, `0xFFFF_FFFF_FFFF_FF`.
pub const MAX_CHUNK_VALUE: u64 = (1 << (8 * CHUNK_BYTES)) - 1;

/// Characters the decoder ignores, so that text can be grouped by hand like `H1jP5_eefyh`.
pub fn is_skipped(character: u8) -> bool {
    matches!(character, b'\t' | b'\n' | b'\r' | b' ' | b'_')
}
