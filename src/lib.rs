//! Binary to text encoding in a 50 character alphabet free of look-alike characters.
//!
//! ```
//! let text = base50::encode("abcdefga");
//! assert_eq!(text, "H1jP5eefyh1x.");
//! assert_eq!(base50::decode(&text), Ok(b"abcdefga".to_vec()));
//! ```

pub mod base50;
pub mod base_common;
pub mod hex;

pub use self::base50::{
    decode, decode_in_place, decode_into, decode_len, decode_partial, encode, encode_into, encode_len, encode_to_vec, Decoder, Encoder,
    ALPHABET, STOP,
};
pub use self::base50::{decode::Error as DecodeError, encode::Error as EncodeError};
