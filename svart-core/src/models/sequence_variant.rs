use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::errors::VariantError;
use crate::models::variant::{compare_variants, zero_based_start};
use crate::models::{Contig, CoordinateSystem, Strand, Variant, VariantType};
use crate::utils::{is_iupac_base, reverse_complement};

///
/// General representation of a sequence variant with owned allele strings.
///
/// Alleles may contain any IUPAC nucleotide code and have no length limit. Alleles
/// are stored upper-case.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct SequenceVariant {
    contig: Arc<Contig>,
    id: Option<String>,
    strand: Strand,
    coordinate_system: CoordinateSystem,
    start: u32,
    ref_allele: String,
    alt_allele: String,
    variant_type: VariantType,
}

impl SequenceVariant {
    pub fn new(
        contig: Arc<Contig>,
        id: Option<&str>,
        strand: Strand,
        coordinate_system: CoordinateSystem,
        start: u32,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Result<Self, VariantError> {
        let ref_allele = canonical_allele(ref_allele)?;
        let alt_allele = canonical_allele(alt_allele)?;
        zero_based_start(&contig, coordinate_system, start, ref_allele.len())?;

        let variant_type = VariantType::classify(&ref_allele, &alt_allele);
        Ok(SequenceVariant {
            contig,
            id: id.map(str::to_string),
            strand,
            coordinate_system,
            start,
            ref_allele,
            alt_allele,
            variant_type,
        })
    }

    pub fn contig_arc(&self) -> &Arc<Contig> {
        &self.contig
    }

    ///
    /// The same variant read from `strand`.
    ///
    /// Flipping strand reverse-complements both alleles and mirrors the interval
    /// around the contig: the old end becomes the new start.
    ///
    pub fn with_strand(&self, strand: Strand) -> Self {
        if strand == self.strand {
            return self.clone();
        }
        SequenceVariant {
            contig: Arc::clone(&self.contig),
            id: self.id.clone(),
            strand,
            coordinate_system: self.coordinate_system,
            start: self.start_on_strand(strand),
            ref_allele: reverse_complement(&self.ref_allele),
            alt_allele: reverse_complement(&self.alt_allele),
            variant_type: self.variant_type,
        }
    }

    /// The same variant with its start reported in `coordinate_system`.
    pub fn with_coordinate_system(&self, coordinate_system: CoordinateSystem) -> Self {
        if coordinate_system == self.coordinate_system {
            return self.clone();
        }
        SequenceVariant {
            start: self.start_with_coordinate_system(coordinate_system),
            coordinate_system,
            ..self.clone()
        }
    }
}

fn canonical_allele(allele: &str) -> Result<String, VariantError> {
    if let Some(base) = allele.chars().find(|c| !c.is_ascii() || !is_iupac_base(*c as u8)) {
        return Err(VariantError::InvalidAllele {
            allele: allele.to_string(),
            base,
        });
    }
    Ok(allele.to_ascii_uppercase())
}

impl Variant for SequenceVariant {
    fn contig(&self) -> &Contig {
        &self.contig
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn strand(&self) -> Strand {
        self.strand
    }

    fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.start_zero_based() + self.ref_allele.len() as u32
    }

    fn ref_allele(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.ref_allele)
    }

    fn alt_allele(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.alt_allele)
    }

    fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    fn ref_length(&self) -> u32 {
        self.ref_allele.len() as u32
    }
}

impl Ord for SequenceVariant {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_variants(self, other)
            .then_with(|| self.strand.cmp(&other.strand))
            .then_with(|| self.coordinate_system.cmp(&other.coordinate_system))
            .then_with(|| self.contig.name().cmp(other.contig.name()))
            .then_with(|| self.contig.length().cmp(&other.contig.length()))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for SequenceVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SequenceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}({}) {}>{}",
            self.contig, self.start, self.end(), self.strand, self.ref_allele, self.alt_allele
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chr1() -> Arc<Contig> {
        Arc::new(Contig::new(1, "chr1", 100_000).unwrap())
    }

    #[rstest]
    fn test_snv_strand_flip(chr1: Arc<Contig>) {
        let snv = SequenceVariant::new(
            chr1,
            Some("rs123"),
            Strand::Positive,
            CoordinateSystem::OneBasedClosed,
            12345,
            "a",
            "t",
        )
        .unwrap();
        assert_eq!(snv.ref_allele(), "A");
        assert_eq!(snv.variant_type(), VariantType::Snv);
        assert_eq!(snv.start(), 12345);
        assert_eq!(snv.end(), 12345);

        let negative = snv.with_strand(Strand::Negative);
        assert_eq!(negative.start(), 87656);
        assert_eq!(negative.end(), 87656);
        assert_eq!(negative.ref_allele(), "T");
        assert_eq!(negative.alt_allele(), "A");
        assert_eq!(negative.id(), Some("rs123"));
        assert_eq!(negative.with_strand(Strand::Positive), snv);
    }

    #[rstest]
    fn test_coordinate_system_flip(chr1: Arc<Contig>) {
        let del = SequenceVariant::new(
            chr1,
            None,
            Strand::Positive,
            CoordinateSystem::ZeroBasedHalfOpen,
            12344,
            "AG",
            "A",
        )
        .unwrap();
        assert_eq!(del.end(), 12346);
        assert_eq!(del.change_length(), -1);

        let one_based = del.with_coordinate_system(CoordinateSystem::OneBasedClosed);
        assert_eq!(one_based.start(), 12345);
        assert_eq!(one_based.end(), 12346);
        assert_eq!(del.start_with_coordinate_system(CoordinateSystem::OneBasedClosed), 12345);
        assert_eq!(del.end_with_coordinate_system(CoordinateSystem::OneBasedClosed), 12346);
        assert_eq!(one_based.end_with_coordinate_system(CoordinateSystem::ZeroBasedHalfOpen), 12346);
        assert_eq!(
            one_based.with_coordinate_system(CoordinateSystem::ZeroBasedHalfOpen),
            del
        );
        assert_eq!(compare_variants(&del, &one_based), Ordering::Equal);
    }

    #[rstest]
    fn test_iupac_alleles_are_accepted(chr1: Arc<Contig>) {
        let variant = SequenceVariant::new(
            chr1,
            None,
            Strand::Positive,
            CoordinateSystem::OneBasedClosed,
            1,
            "N",
            "rY",
        )
        .unwrap();
        assert_eq!(variant.alt_allele(), "RY");
        assert_eq!(variant.with_strand(Strand::Negative).alt_allele(), "RY");
    }

    #[rstest]
    #[case("<DEL>")]
    #[case("A C")]
    #[case("AÅ")]
    fn test_invalid_allele(chr1: Arc<Contig>, #[case] alt: &str) {
        let err = SequenceVariant::new(
            chr1,
            None,
            Strand::Positive,
            CoordinateSystem::OneBasedClosed,
            1,
            "A",
            alt,
        )
        .unwrap_err();
        assert!(matches!(err, VariantError::InvalidAllele { .. }));
    }

    #[rstest]
    #[case(CoordinateSystem::OneBasedClosed, 1, "A", "T")]
    #[case(CoordinateSystem::ZeroBasedHalfOpen, 0, "", "NN")]
    fn test_unknown_contig_is_rejected(
        #[case] system: CoordinateSystem,
        #[case] start: u32,
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
    ) {
        let err = SequenceVariant::new(
            Arc::new(Contig::unknown()),
            None,
            Strand::Positive,
            system,
            start,
            ref_allele,
            alt_allele,
        )
        .unwrap_err();
        assert_eq!(err, VariantError::UnknownContig);
    }

    #[rstest]
    fn test_order_is_strand_independent(chr1: Arc<Contig>) {
        let make = |start: u32, ref_allele: &str, alt_allele: &str| {
            SequenceVariant::new(
                Arc::clone(&chr1),
                None,
                Strand::Positive,
                CoordinateSystem::OneBasedClosed,
                start,
                ref_allele,
                alt_allele,
            )
            .unwrap()
        };
        let first = make(100, "A", "C");
        let second = make(100, "A", "G");
        let third = make(200, "AT", "A");

        assert_eq!(compare_variants(&first, &second), Ordering::Less);
        assert_eq!(
            compare_variants(&first.with_strand(Strand::Negative), &second),
            Ordering::Less
        );
        assert_eq!(
            compare_variants(&third.with_strand(Strand::Negative), &second),
            Ordering::Greater
        );

        let mut sorted = vec![third.clone(), first.clone(), second.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![first, second, third]);
    }
}
