//! Bit layout of a compact variant word.
//!
//! All fields of a variant except its contig, id and type live in a single `u64`:
//!
//! | bits    | width | field                                                  |
//! |---------|-------|--------------------------------------------------------|
//! | 63..32  | 32    | zero-based start                                       |
//! | 31      | 1     | strand (`0` positive, `1` negative)                    |
//! | 30      | 1     | coordinate system (`0` zero-based, `1` one-based)      |
//! | 29..26  | 4     | ref length, in bases                                   |
//! | 25..22  | 4     | alt length, in bases                                   |
//! | 21..0   | 22    | packed bases: ref first, alt directly below, rest zero |
//!
//! The ref bases occupy bits `22 - 2 * ref_len .. 22` and the alt bases the
//! `2 * alt_len` bits directly below them. Bases are packed as in [`crate::bases`],
//! first base most significant.
//!
//! The start is always stored zero-based. The coordinate-system bit only changes how
//! the start is reported, so switching coordinate systems toggles one bit and leaves
//! the rest of the word untouched.
use std::borrow::Cow;

use svart_core::models::{CoordinateSystem, Strand};

use crate::bases::{BITS_PER_BASE, MAX_BASES, field_mask, reverse_complement_packed, unpack_allele};

pub const START_SHIFT: u32 = 32;
pub const STRAND_SHIFT: u32 = 31;
pub const COORDINATE_SYSTEM_SHIFT: u32 = 30;
pub const REF_LENGTH_SHIFT: u32 = 26;
pub const ALT_LENGTH_SHIFT: u32 = 22;

pub const LENGTH_MASK: u64 = 0b1111;
pub const STRAND_BIT: u64 = 1 << STRAND_SHIFT;
pub const COORDINATE_SYSTEM_BIT: u64 = 1 << COORDINATE_SYSTEM_SHIFT;

/// Width of the packed bases field.
pub const BASES_BITS: u32 = BITS_PER_BASE * MAX_BASES as u32;
pub const BASES_MASK: u64 = (1 << BASES_BITS) - 1;

/// Bit offset of a ref allele of `ref_length` bases.
#[inline]
pub fn ref_offset(ref_length: usize) -> u32 {
    BASES_BITS - BITS_PER_BASE * ref_length as u32
}

/// Bit offset of the alt allele that follows a ref allele of `ref_length` bases.
#[inline]
pub fn alt_offset(ref_length: usize, alt_length: usize) -> u32 {
    ref_offset(ref_length) - BITS_PER_BASE * alt_length as u32
}

///
/// Assemble a word from its fields.
///
/// `bases` holds both alleles already shifted to their offsets. The lengths must sum
/// to at most [`MAX_BASES`].
///
#[inline]
pub fn pack_word(
    start: u32,
    strand: Strand,
    coordinate_system: CoordinateSystem,
    ref_length: usize,
    alt_length: usize,
    bases: u64,
) -> u64 {
    debug_assert!(ref_length + alt_length <= MAX_BASES);
    debug_assert_eq!(bases & !BASES_MASK, 0);

    ((start as u64) << START_SHIFT)
        | (strand_bit(strand) << STRAND_SHIFT)
        | (coordinate_system_bit(coordinate_system) << COORDINATE_SYSTEM_SHIFT)
        | ((ref_length as u64) << REF_LENGTH_SHIFT)
        | ((alt_length as u64) << ALT_LENGTH_SHIFT)
        | bases
}

///
/// Pack both alleles into the bases field.
///
/// Both alleles must already be packed with [`crate::bases::pack_allele`].
///
#[inline]
pub fn pack_bases(ref_bases: u64, ref_length: usize, alt_bases: u64, alt_length: usize) -> u64 {
    (ref_bases << ref_offset(ref_length)) | (alt_bases << alt_offset(ref_length, alt_length))
}

#[inline]
fn strand_bit(strand: Strand) -> u64 {
    match strand {
        Strand::Positive => 0,
        Strand::Negative => 1,
    }
}

#[inline]
fn coordinate_system_bit(coordinate_system: CoordinateSystem) -> u64 {
    match coordinate_system {
        CoordinateSystem::ZeroBasedHalfOpen => 0,
        CoordinateSystem::OneBasedClosed => 1,
    }
}

/// Zero-based start.
#[inline]
pub fn start(word: u64) -> u32 {
    (word >> START_SHIFT) as u32
}

/// End, identical in both coordinate systems.
#[inline]
pub fn end(word: u64) -> u32 {
    start(word) + ref_length(word) as u32
}

#[inline]
pub fn strand(word: u64) -> Strand {
    match word & STRAND_BIT {
        0 => Strand::Positive,
        _ => Strand::Negative,
    }
}

#[inline]
pub fn coordinate_system(word: u64) -> CoordinateSystem {
    match word & COORDINATE_SYSTEM_BIT {
        0 => CoordinateSystem::ZeroBasedHalfOpen,
        _ => CoordinateSystem::OneBasedClosed,
    }
}

#[inline]
pub fn ref_length(word: u64) -> usize {
    ((word >> REF_LENGTH_SHIFT) & LENGTH_MASK) as usize
}

#[inline]
pub fn alt_length(word: u64) -> usize {
    ((word >> ALT_LENGTH_SHIFT) & LENGTH_MASK) as usize
}

/// Start as reported in the word's own coordinate system.
#[inline]
pub fn reported_start(word: u64) -> u32 {
    match coordinate_system(word) {
        CoordinateSystem::ZeroBasedHalfOpen => start(word),
        CoordinateSystem::OneBasedClosed => start(word) + 1,
    }
}

#[inline]
pub fn change_length(word: u64) -> i32 {
    alt_length(word) as i32 - ref_length(word) as i32
}

pub fn ref_allele(word: u64) -> Cow<'static, str> {
    let ref_length = checked_ref_length(word);
    unpack_allele(word, ref_length, ref_offset(ref_length))
}

pub fn alt_allele(word: u64) -> Cow<'static, str> {
    let ref_length = checked_ref_length(word);
    let alt_length = alt_length(word);
    unpack_allele(word, alt_length, alt_offset(ref_length, alt_length))
}

/// Ref length of a word produced by this module; anything else is a codec bug.
#[inline]
fn checked_ref_length(word: u64) -> usize {
    let (ref_length, alt_length) = (ref_length(word), alt_length(word));
    if ref_length + alt_length > MAX_BASES {
        unreachable!(
            "corrupt compact variant word {:#018x}: {} + {} bases exceed {}",
            word, ref_length, alt_length, MAX_BASES
        );
    }
    ref_length
}

///
/// Move a word to the opposite strand of a contig of `contig_length` bases.
///
/// The new zero-based start is the inverted old end, both alleles are
/// reverse-complemented in place and the strand bit is flipped. Lengths and the
/// coordinate-system bit are unchanged. Flipping twice returns the original word.
///
pub fn flip_strand(word: u64, contig_length: u32) -> u64 {
    let ref_length = checked_ref_length(word);
    let alt_length = alt_length(word);

    let start = CoordinateSystem::ZeroBasedHalfOpen.invert_position(end(word), contig_length);
    let bases = reverse_complement_packed(word, ref_length, ref_offset(ref_length))
        | reverse_complement_packed(word, alt_length, alt_offset(ref_length, alt_length));

    pack_word(
        start,
        strand(word).opposite(),
        coordinate_system(word),
        ref_length,
        alt_length,
        bases,
    )
}

/// Report a word's start in `coordinate_system`; only the flag bit changes.
#[inline]
pub fn set_coordinate_system(word: u64, coordinate_system: CoordinateSystem) -> u64 {
    (word & !COORDINATE_SYSTEM_BIT)
        | (coordinate_system_bit(coordinate_system) << COORDINATE_SYSTEM_SHIFT)
}

/// Bits of the bases field covered by neither allele; zero for every well-formed word.
#[inline]
pub fn unused_bases(word: u64) -> u64 {
    let used = ref_length(word) + alt_length(word);
    word & BASES_MASK & !(field_mask(used) << (BASES_BITS - BITS_PER_BASE * used as u32))
}
