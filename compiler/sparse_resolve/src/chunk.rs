//! Packing names into 64-bit chunks.

use smallvec::SmallVec;

/// Characters per packed chunk.
pub const CHUNK_WIDTH: usize = 8;

/// A character that cannot be packed into one byte.
///
/// NUL is rejected along with everything above U+00FF: a zero byte is
/// indistinguishable from the padding of a short chunk, so `"A"` and `"\0A"`
/// would pack identically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unpackable {
    pub ch: char,
    /// Character (not byte) offset of `ch` in the input.
    pub offset: usize,
}

/// Pack the next chunk of `input`, starting at byte position `*pos`.
///
/// Takes up to [`CHUNK_WIDTH`] characters, shifting each into the low byte of
/// the key, and advances `*pos` past them. At the end of input this returns
/// `0` and leaves `*pos` unchanged.
#[inline]
pub fn next_chunk(input: &str, pos: &mut usize) -> Result<u64, Unpackable> {
    let mut chunk = 0u64;
    let mut consumed = 0usize;
    for (taken, ch) in input[*pos..].chars().enumerate() {
        if taken == CHUNK_WIDTH {
            break;
        }
        let code = u32::from(ch);
        if code == 0 || code > 0xFF {
            return Err(Unpackable {
                ch,
                offset: input[..*pos + consumed].chars().count(),
            });
        }
        chunk = (chunk << 8) | u64::from(code);
        consumed += ch.len_utf8();
    }
    *pos += consumed;
    Ok(chunk)
}

/// Pack a whole name into its chunk sequence.
pub fn pack(input: &str) -> Result<SmallVec<[u64; 4]>, Unpackable> {
    let mut chunks = SmallVec::new();
    let mut pos = 0;
    while pos < input.len() {
        chunks.push(next_chunk(input, &mut pos)?);
    }
    Ok(chunks)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap to fail loudly on unexpected errors"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn packs_big_endian_one_byte_per_char() {
        let mut pos = 0;
        assert_eq!(next_chunk("Id", &mut pos), Ok(0x4964));
        assert_eq!(pos, 2);
    }

    #[test]
    fn splits_long_names_every_eight_chars() {
        let chunks = pack("DecimalProp1").unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], u64::from_be_bytes(*b"DecimalP"));
        assert_eq!(chunks[1], u64::from_be_bytes([0, 0, 0, 0, b'r', b'o', b'p', b'1']));
    }

    #[test]
    fn latin1_characters_pack_as_their_code_point() {
        let mut pos = 0;
        assert_eq!(next_chunk("é", &mut pos), Ok(0xE9));
        assert_eq!(pos, "é".len());
    }

    #[test]
    fn rejects_characters_above_one_byte() {
        let mut pos = 0;
        assert_eq!(
            next_chunk("Price€", &mut pos),
            Err(Unpackable { ch: '€', offset: 5 })
        );
        assert_eq!(pos, 0);
    }

    #[test]
    fn rejects_nul() {
        assert_eq!(pack("A\0"), Err(Unpackable { ch: '\0', offset: 1 }));
    }

    #[test]
    fn offset_counts_characters_in_later_chunks() {
        assert_eq!(
            pack("ÀÀÀÀÀÀÀÀÀ€"),
            Err(Unpackable { ch: '€', offset: 9 })
        );
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        assert!(pack("").unwrap().is_empty());
        let mut pos = 0;
        assert_eq!(next_chunk("", &mut pos), Ok(0));
        assert_eq!(pos, 0);
    }
}
