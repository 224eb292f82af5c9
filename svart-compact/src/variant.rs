use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use compact_str::CompactString;
use svart_core::errors::VariantError;
use svart_core::models::{Contig, CoordinateSystem, Strand, Variant, VariantType, zero_based_start};

use crate::bases::{MAX_BASES, encode_base, pack_allele};
use crate::layout;

///
/// A small sequence variant packed into a single 64-bit word.
///
/// Start, strand, coordinate system and both alleles live in [`CompactVariant::bits`]
/// (see [`crate::layout`]); the contig is shared, and the id and variant type are kept
/// next to the word. A `CompactVariant` is immutable and always valid: every check
/// happens in [`CompactVariant::new`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use svart_compact::CompactVariant;
/// use svart_core::models::{Contig, CoordinateSystem, Strand, Variant, VariantType};
///
/// let chr1 = Arc::new(Contig::new(1, "chr1", 100_000).unwrap());
/// let snv = CompactVariant::new(
///     chr1,
///     Some("rs1"),
///     Strand::Positive,
///     CoordinateSystem::OneBasedClosed,
///     12345,
///     "A",
///     "T",
/// )
/// .unwrap();
/// assert_eq!(snv.variant_type(), VariantType::Snv);
///
/// let negative = snv.with_strand(Strand::Negative);
/// assert_eq!((negative.start(), negative.end()), (87656, 87656));
/// assert_eq!(negative.ref_allele(), "T");
/// assert_eq!(negative.alt_allele(), "A");
/// ```
#[derive(Debug, Clone)]
pub struct CompactVariant {
    contig: Arc<Contig>,
    id: Option<CompactString>,
    variant_type: VariantType,
    bits: u64,
}

impl CompactVariant {
    ///
    /// Validate and pack a variant.
    ///
    /// Fails with [`VariantError::AlleleTooLong`] when the alleles hold more than
    /// [`MAX_BASES`] bases together, [`VariantError::InvalidAllele`] for anything but
    /// `A`, `C`, `G`, `T` (any case) and [`VariantError::OutOfContigBounds`] when the
    /// implied zero-based interval does not fit on the contig.
    ///
    pub fn new(
        contig: Arc<Contig>,
        id: Option<&str>,
        strand: Strand,
        coordinate_system: CoordinateSystem,
        start: u32,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Result<Self, VariantError> {
        let length = ref_allele.chars().count() + alt_allele.chars().count();
        if length > MAX_BASES {
            return Err(VariantError::AlleleTooLong {
                length,
                max: MAX_BASES,
            });
        }
        let ref_bases = pack_allele(ref_allele)?;
        let alt_bases = pack_allele(alt_allele)?;

        // both alleles are ASCII once packed, so byte length is base count
        let (ref_length, alt_length) = (ref_allele.len(), alt_allele.len());
        let start = zero_based_start(&contig, coordinate_system, start, ref_length)?;

        let bases = layout::pack_bases(ref_bases, ref_length, alt_bases, alt_length);
        let bits = layout::pack_word(start, strand, coordinate_system, ref_length, alt_length, bases);
        debug_assert_eq!(layout::unused_bases(bits), 0);

        Ok(CompactVariant {
            contig,
            id: id.map(CompactString::from),
            variant_type: VariantType::classify(ref_allele, alt_allele),
            bits,
        })
    }

    ///
    /// Whether a ref/alt pair can be stored in a compact variant.
    ///
    /// ```
    /// use svart_compact::CompactVariant;
    ///
    /// assert!(CompactVariant::is_compactable("", "TACGTACGTAG"));
    /// assert!(!CompactVariant::is_compactable("AGTCAGTCAGTC", ""));
    /// assert!(!CompactVariant::is_compactable("A", "<DEL>"));
    /// ```
    pub fn is_compactable(ref_allele: &str, alt_allele: &str) -> bool {
        ref_allele.chars().count() + alt_allele.chars().count() <= MAX_BASES
            && ref_allele
                .bytes()
                .chain(alt_allele.bytes())
                .all(|base| encode_base(base).is_some())
    }

    /// The packed word.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn contig_arc(&self) -> &Arc<Contig> {
        &self.contig
    }

    fn with_bits(&self, bits: u64) -> Self {
        CompactVariant {
            contig: Arc::clone(&self.contig),
            id: self.id.clone(),
            variant_type: self.variant_type,
            bits,
        }
    }

    ///
    /// The same variant read from `strand`.
    ///
    /// The old end becomes the new start and both alleles are reverse-complemented
    /// directly in the packed word. Flipping back yields a value with the original bits.
    ///
    pub fn with_strand(&self, strand: Strand) -> Self {
        if strand == layout::strand(self.bits) {
            return self.clone();
        }
        self.with_bits(layout::flip_strand(self.bits, self.contig.length()))
    }

    /// The same variant with its start reported in `coordinate_system`.
    pub fn with_coordinate_system(&self, coordinate_system: CoordinateSystem) -> Self {
        if coordinate_system == layout::coordinate_system(self.bits) {
            return self.clone();
        }
        self.with_bits(layout::set_coordinate_system(self.bits, coordinate_system))
    }

    pub fn to_positive_strand(&self) -> Self {
        self.with_strand(Strand::Positive)
    }

    pub fn to_zero_based(&self) -> Self {
        self.with_coordinate_system(CoordinateSystem::ZeroBasedHalfOpen)
    }

    pub fn to_one_based(&self) -> Self {
        self.with_coordinate_system(CoordinateSystem::OneBasedClosed)
    }

    /// Word of this variant on the positive strand, zero-based.
    fn normalized_bits(&self) -> u64 {
        let bits = match layout::strand(self.bits) {
            Strand::Positive => self.bits,
            Strand::Negative => layout::flip_strand(self.bits, self.contig.length()),
        };
        layout::set_coordinate_system(bits, CoordinateSystem::ZeroBasedHalfOpen)
    }
}

impl Variant for CompactVariant {
    fn contig(&self) -> &Contig {
        &self.contig
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn strand(&self) -> Strand {
        layout::strand(self.bits)
    }

    fn coordinate_system(&self) -> CoordinateSystem {
        layout::coordinate_system(self.bits)
    }

    fn start(&self) -> u32 {
        layout::reported_start(self.bits)
    }

    fn end(&self) -> u32 {
        layout::end(self.bits)
    }

    fn ref_allele(&self) -> Cow<'_, str> {
        layout::ref_allele(self.bits)
    }

    fn alt_allele(&self) -> Cow<'_, str> {
        layout::alt_allele(self.bits)
    }

    fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    fn ref_length(&self) -> u32 {
        layout::ref_length(self.bits) as u32
    }

    fn change_length(&self) -> i32 {
        layout::change_length(self.bits)
    }

    fn start_zero_based(&self) -> u32 {
        layout::start(self.bits)
    }
}

impl PartialEq for CompactVariant {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
            && self.variant_type == other.variant_type
            && (Arc::ptr_eq(&self.contig, &other.contig) || self.contig == other.contig)
    }
}

impl Eq for CompactVariant {}

impl Hash for CompactVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.contig.id().hash(state);
        self.bits.hash(state);
        self.variant_type.hash(state);
    }
}

impl Ord for CompactVariant {
    ///
    /// Contig id, then start, end, ref, change length and alt on the positive strand in
    /// zero-based coordinates. Different encodings of the same variant are ordered by
    /// their raw words so that only equal values compare as `Equal`.
    ///
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.normalized_bits(), other.normalized_bits());
        self.contig
            .id()
            .cmp(&other.contig.id())
            .then_with(|| layout::start(a).cmp(&layout::start(b)))
            .then_with(|| layout::end(a).cmp(&layout::end(b)))
            .then_with(|| layout::ref_allele(a).cmp(&layout::ref_allele(b)))
            .then_with(|| layout::change_length(a).cmp(&layout::change_length(b)))
            .then_with(|| layout::alt_allele(a).cmp(&layout::alt_allele(b)))
            .then_with(|| self.bits.cmp(&other.bits))
            .then_with(|| self.variant_type.cmp(&other.variant_type))
            .then_with(|| self.contig.name().cmp(other.contig.name()))
            .then_with(|| self.contig.length().cmp(&other.contig.length()))
    }
}

impl PartialOrd for CompactVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for CompactVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}({}) {}>{}",
            self.contig,
            self.start(),
            self.end(),
            self.strand(),
            self.ref_allele(),
            self.alt_allele()
        )
    }
}
