use super::{CHUNK_BYTES, GROUP_DIGITS};

/// Digits written for a trailing chunk of `index` bytes, without the stop character.
pub(super) const PARTIAL_DIGITS: [usize; CHUNK_BYTES] = [0, 2, 3, 5, 6, 8, 9];

/// Bytes produced by a group of `index` digits. Adjacent counts collapse where the encoder may
/// drop an unneeded leading digit.
pub(super) const GROUP_BYTES: [usize; GROUP_DIGITS + 1] = [0, 1, 1, 2, 3, 3, 4, 5, 5, 6, 7];

/// Number of characters, stop character included, needed to encode `len` bytes.
///
/// This is the exact output length unless the last chunk is one, three or five bytes long and
/// its value is small enough for the shortened form, in which case one character less is
/// written.
pub const fn encode_len(len: usize) -> usize {
    let whole = (len / CHUNK_BYTES) * GROUP_DIGITS;
    match len % CHUNK_BYTES {
        0 => whole,
        remainder => whole + PARTIAL_DIGITS[remainder] + 1,
    }
}

/// Number of bytes decoded from `len` digit characters.
///
/// `len` must not count the stop character, nor skipped whitespace. Counting them anyway only
/// makes the result larger, so the raw length of an encoded text is always a large enough
/// output buffer.
pub const fn decode_len(len: usize) -> usize {
    (len / GROUP_DIGITS) * CHUNK_BYTES + GROUP_BYTES[len % GROUP_DIGITS]
}

#[cfg(test)]
mod tests {
    use super::{decode_len, encode_len};

    #[test]
    fn encode_len_values() {
        let lengths: Vec<usize> = (0..=14).map(encode_len).collect();
        assert_eq!(lengths, [0, 3, 4, 6, 7, 9, 10, 10, 13, 14, 16, 17, 19, 20, 20]);
        assert_eq!(encode_len(700), 1000);
        assert_eq!(encode_len(701), 1003);
    }

    #[test]
    fn decode_len_values() {
        let lengths: Vec<usize> = (0..=10).map(decode_len).collect();
        assert_eq!(lengths, [0, 1, 1, 2, 3, 3, 4, 5, 5, 6, 7]);
        assert_eq!(decode_len(10 * 2), 7 * 2);
        assert_eq!(decode_len(10 * 2 + 3), 7 * 2 + 2);
        assert_eq!(decode_len(10 * 4 + 7), 7 * 4 + 5);
        assert_eq!(decode_len(10 * 7), 7 * 7);
    }

    #[test]
    fn decode_len_inverts_encode_len() {
        for len in 0..100 {
            let encoded = encode_len(len);
            let digits = if len % 7 == 0 { encoded } else { encoded - 1 };
            assert_eq!(decode_len(digits), len);
            if len % 7 != 0 {
                assert_eq!(decode_len(encoded), len + 1);
            }
        }
    }
}
