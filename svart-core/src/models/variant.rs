use std::borrow::Cow;
use std::cmp::Ordering;

use crate::errors::VariantError;
use crate::models::{Contig, CoordinateSystem, Strand, VariantType};
use crate::utils::reverse_complement;

///
/// Read operations shared by every variant representation.
///
/// Call sites written against this trait can swap the general [`crate::models::SequenceVariant`]
/// for the packed representation in `svart-compact` without any change in behavior.
///
pub trait Variant {
    fn contig(&self) -> &Contig;

    /// Optional label such as a dbSNP id.
    fn id(&self) -> Option<&str>;

    fn strand(&self) -> Strand;

    fn coordinate_system(&self) -> CoordinateSystem;

    /// Start in [`Variant::coordinate_system`].
    fn start(&self) -> u32;

    /// End, numerically identical in both coordinate systems.
    fn end(&self) -> u32;

    fn ref_allele(&self) -> Cow<'_, str>;

    fn alt_allele(&self) -> Cow<'_, str>;

    fn variant_type(&self) -> VariantType;

    /// Number of reference bases spanned by the variant.
    fn ref_length(&self) -> u32 {
        self.end() - self.start_zero_based()
    }

    /// Length of the alt allele minus length of the ref allele.
    fn change_length(&self) -> i32 {
        self.alt_allele().len() as i32 - self.ref_allele().len() as i32
    }

    fn start_zero_based(&self) -> u32 {
        self.start_with_coordinate_system(CoordinateSystem::ZeroBasedHalfOpen)
    }

    fn start_with_coordinate_system(&self, target: CoordinateSystem) -> u32 {
        (self.start() as i64 + self.coordinate_system().start_delta(target)) as u32
    }

    fn end_with_coordinate_system(&self, target: CoordinateSystem) -> u32 {
        (self.end() as i64 + self.coordinate_system().end_delta(target)) as u32
    }

    ///
    /// Start of the variant when read from `strand`, in the variant's coordinate system.
    ///
    /// Moving to the opposite strand swaps the roles of the two edges: the old end
    /// becomes the new start.
    ///
    fn start_on_strand(&self, strand: Strand) -> u32 {
        if strand == self.strand() {
            self.start()
        } else {
            self.coordinate_system()
                .invert_position(self.end(), self.contig().length())
        }
    }

    fn end_on_strand(&self, strand: Strand) -> u32 {
        if strand == self.strand() {
            self.end()
        } else {
            self.coordinate_system()
                .invert_position(self.start(), self.contig().length())
        }
    }
}

///
/// Validate that a variant fits on its contig and return its zero-based start.
///
/// `start` is interpreted in `coordinate_system`; the implied zero-based interval
/// `[start, start + ref_length)` must lie within `[0, contig.length]`. The reserved
/// unknown contig is rejected.
///
pub fn zero_based_start(
    contig: &Contig,
    coordinate_system: CoordinateSystem,
    start: u32,
    ref_length: usize,
) -> Result<u32, VariantError> {
    if contig.is_unknown() {
        return Err(VariantError::UnknownContig);
    }

    let start = start as i64 + coordinate_system.start_delta(CoordinateSystem::ZeroBasedHalfOpen);
    let end = start + ref_length as i64;
    if start < 0 || end > contig.length() as i64 {
        return Err(VariantError::OutOfContigBounds {
            contig: contig.name().to_string(),
            start,
            end,
            length: contig.length(),
        });
    }
    Ok(start as u32)
}

///
/// Total order over variants of any representation.
///
/// Both variants are normalized to the positive strand and zero-based coordinates, then
/// compared by contig id, start, end, ref allele, change length and alt allele. Two
/// encodings of the same real-world variant compare as equal.
///
pub fn compare_variants<A, B>(a: &A, b: &B) -> Ordering
where
    A: Variant + ?Sized,
    B: Variant + ?Sized,
{
    a.contig()
        .id()
        .cmp(&b.contig().id())
        .then_with(|| positive_start(a).cmp(&positive_start(b)))
        .then_with(|| positive_end(a).cmp(&positive_end(b)))
        .then_with(|| positive_allele(a, a.ref_allele()).cmp(&positive_allele(b, b.ref_allele())))
        .then_with(|| a.change_length().cmp(&b.change_length()))
        .then_with(|| positive_allele(a, a.alt_allele()).cmp(&positive_allele(b, b.alt_allele())))
}

fn positive_start<V: Variant + ?Sized>(variant: &V) -> u32 {
    let start = variant.start_on_strand(Strand::Positive) as i64;
    (start + variant.coordinate_system().start_delta(CoordinateSystem::ZeroBasedHalfOpen)) as u32
}

fn positive_end<V: Variant + ?Sized>(variant: &V) -> u32 {
    variant.end_on_strand(Strand::Positive)
}

fn positive_allele<'a, V: Variant + ?Sized>(variant: &V, allele: Cow<'a, str>) -> Cow<'a, str> {
    match variant.strand() {
        Strand::Positive => allele,
        Strand::Negative => Cow::Owned(reverse_complement(&allele)),
    }
}
