//! Two-bit nucleotide codec for short alleles.
//!
//! Bases are encoded as A=00, C=01, G=10, T=11. The table is chosen so that the
//! Watson-Crick complement of a base is the bitwise NOT of its code, which lets a
//! packed allele be reverse-complemented without decoding it.
//!
//! Alleles are packed MSB-first: the first base of an allele of `n` bases sits in
//! bits `2(n-1)..2n` of the packed value, the last base in bits `0..2`.
use std::borrow::Cow;

use svart_core::errors::VariantError;

/// Largest combined ref + alt length that fits in a compact variant.
pub const MAX_BASES: usize = 11;

/// Bits used per packed base.
pub const BITS_PER_BASE: u32 = 2;

const INVALID: u8 = 0xFF;

/// Maps ASCII bytes to 2-bit codes; anything outside `ACGTacgt` is `INVALID`.
const ENCODING_ARRAY: [u8; 256] = {
    let mut arr = [INVALID; 256];
    arr[b'A' as usize] = 0b00;
    arr[b'a' as usize] = 0b00;
    arr[b'C' as usize] = 0b01;
    arr[b'c' as usize] = 0b01;
    arr[b'G' as usize] = 0b10;
    arr[b'g' as usize] = 0b10;
    arr[b'T' as usize] = 0b11;
    arr[b't' as usize] = 0b11;
    arr
};

const DECODING_ARRAY: [u8; 4] = *b"ACGT";

/// Every 3-base allele in code order. Entry `i` occupies bytes `3i..3i+3`; alleles of
/// one or two bases are prefixes of the entry whose trailing codes are zero.
const TRIPLETS: &str = concat!(
    "AAAAACAAGAATACAACCACGACTAGAAGCAGGAGTATAATCATGATT",
    "CAACACCAGCATCCACCCCCGCCTCGACGCCGGCGTCTACTCCTGCTT",
    "GAAGACGAGGATGCAGCCGCGGCTGGAGGCGGGGGTGTAGTCGTGGTT",
    "TAATACTAGTATTCATCCTCGTCTTGATGCTGGTGTTTATTCTTGTTT",
);

/// Longest allele served from [`TRIPLETS`] without allocating.
const CACHED_LENGTH: usize = 3;

/// Encode a single base, case-insensitively. Returns `None` for anything but A, C, G, T.
#[inline]
pub fn encode_base(base: u8) -> Option<u64> {
    match ENCODING_ARRAY[base as usize] {
        INVALID => None,
        code => Some(code as u64),
    }
}

/// Decode the two lowest bits of `code` to an upper-case base.
#[inline]
pub fn decode_base(code: u64) -> u8 {
    DECODING_ARRAY[(code & 0b11) as usize]
}

/// Code of the complementary base.
#[inline]
pub fn complement_code(code: u64) -> u64 {
    !code & 0b11
}

/// Mask covering `length` packed bases.
#[inline]
pub fn field_mask(length: usize) -> u64 {
    match length {
        0 => 0,
        _ => u64::MAX >> (64 - BITS_PER_BASE as usize * length),
    }
}

///
/// Pack an allele into the low `2 * allele.len()` bits of a word, first base most significant.
///
/// ```
/// use svart_compact::bases::pack_allele;
///
/// assert_eq!(pack_allele("ACGT").unwrap(), 0b00_01_10_11);
/// assert_eq!(pack_allele("").unwrap(), 0);
/// ```
pub fn pack_allele(allele: &str) -> Result<u64, VariantError> {
    debug_assert!(allele.chars().count() <= 32, "allele longer than a u64 can hold");

    let mut packed = 0u64;
    for base in allele.chars() {
        let code = base
            .is_ascii()
            .then(|| encode_base(base as u8))
            .flatten()
            .ok_or_else(|| VariantError::InvalidAllele {
                allele: allele.to_string(),
                base,
            })?;
        packed = (packed << BITS_PER_BASE) | code;
    }
    Ok(packed)
}

///
/// Unpack the `length`-base allele stored at bit `offset` of `word`.
///
/// Alleles of up to three bases are borrowed from a static table; longer ones are
/// built base by base.
///
pub fn unpack_allele(word: u64, length: usize, offset: u32) -> Cow<'static, str> {
    if length == 0 {
        return Cow::Borrowed("");
    }

    let field = (word >> offset) & field_mask(length);
    if length <= CACHED_LENGTH {
        let index = (field << (BITS_PER_BASE as usize * (CACHED_LENGTH - length))) as usize;
        let start = index * CACHED_LENGTH;
        return Cow::Borrowed(&TRIPLETS[start..start + length]);
    }

    let mut allele = String::with_capacity(length);
    for i in 0..length {
        let shift = BITS_PER_BASE as usize * (length - 1 - i);
        allele.push(decode_base(field >> shift) as char);
    }
    Cow::Owned(allele)
}

///
/// Reverse complement of the `length`-base allele stored at bit `offset` of `word`.
///
/// Every base is complemented by a bitwise NOT and moved to the mirrored position
/// within the field. The result holds the new field at the same `offset`, with all
/// bits outside the field cleared.
///
pub fn reverse_complement_packed(word: u64, length: usize, offset: u32) -> u64 {
    let complemented = !word;
    let mut reversed = 0u64;
    for i in 0..length {
        let from = offset + BITS_PER_BASE * i as u32;
        let to = offset + BITS_PER_BASE * (length - 1 - i) as u32;
        reversed |= ((complemented >> from) & 0b11) << to;
    }
    reversed
}
