//! Integration tests for CompactVariant through the public API.
//!
//! These check the laws the packed word must obey (round trip, strand and
//! coordinate-system involutions, a total order independent of encoding) and that
//! it behaves exactly like the general SequenceVariant.

use std::cmp::Ordering;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use svart_compact::CompactVariant;
use svart_compact::bases::{MAX_BASES, field_mask, pack_allele, reverse_complement_packed};
use svart_core::errors::VariantError;
use svart_core::models::{
    Contig, CoordinateSystem, SequenceVariant, Strand, Variant, VariantType, compare_variants,
};

const STRANDS: [Strand; 2] = [Strand::Positive, Strand::Negative];
const SYSTEMS: [CoordinateSystem; 2] = [
    CoordinateSystem::ZeroBasedHalfOpen,
    CoordinateSystem::OneBasedClosed,
];

#[fixture]
fn contig() -> Arc<Contig> {
    Arc::new(Contig::new(1, "chr1", 100_000).unwrap())
}

/// Every allele of up to three bases, plus a handful of longer ones.
fn alleles() -> Vec<String> {
    let mut alleles = vec![String::new()];
    let mut previous = vec![String::new()];
    for _ in 0..3 {
        let next: Vec<String> = previous
            .iter()
            .flat_map(|prefix| ["A", "C", "G", "T"].map(|base| format!("{}{}", prefix, base)))
            .collect();
        alleles.extend(next.iter().cloned());
        previous = next;
    }
    for long in ["ACGT", "GGGTT", "TACGTA", "CATCATC", "AAAAAAAA", "TACGTACGTAG"] {
        alleles.push(long.to_string());
    }
    alleles
}

fn pairs() -> impl Iterator<Item = (String, String)> {
    let alleles = alleles();
    let mut pairs = Vec::new();
    for ref_allele in &alleles {
        for alt_allele in &alleles {
            if ref_allele.len() + alt_allele.len() <= MAX_BASES {
                pairs.push((ref_allele.clone(), alt_allele.clone()));
            }
        }
    }
    pairs.into_iter()
}

fn start_for(coordinate_system: CoordinateSystem, zero_based: u32) -> u32 {
    (zero_based as i64 + CoordinateSystem::ZeroBasedHalfOpen.start_delta(coordinate_system)) as u32
}

#[rstest]
fn test_round_trip(contig: Arc<Contig>) {
    for (ref_allele, alt_allele) in pairs() {
        for strand in STRANDS {
            for system in SYSTEMS {
                for zero_based in [0, 4321, contig.length() - ref_allele.len() as u32] {
                    let start = start_for(system, zero_based);
                    let variant = CompactVariant::new(
                        Arc::clone(&contig),
                        None,
                        strand,
                        system,
                        start,
                        &ref_allele,
                        &alt_allele,
                    )
                    .unwrap();

                    assert_eq!(variant.start(), start);
                    assert_eq!(variant.end(), zero_based + ref_allele.len() as u32);
                    assert_eq!(variant.ref_allele(), ref_allele.as_str());
                    assert_eq!(variant.alt_allele(), alt_allele.as_str());
                    assert_eq!(variant.strand(), strand);
                    assert_eq!(variant.coordinate_system(), system);
                    assert_eq!(
                        variant.change_length(),
                        alt_allele.len() as i32 - ref_allele.len() as i32
                    );
                    assert_eq!(
                        variant.variant_type(),
                        VariantType::classify(&ref_allele, &alt_allele)
                    );
                }
            }
        }
    }
}

#[rstest]
fn test_strand_and_coordinate_system_involutions(contig: Arc<Contig>) {
    for (ref_allele, alt_allele) in pairs() {
        for strand in STRANDS {
            for system in SYSTEMS {
                let start = start_for(system, 777);
                let variant = CompactVariant::new(
                    Arc::clone(&contig),
                    Some("x"),
                    strand,
                    system,
                    start,
                    &ref_allele,
                    &alt_allele,
                )
                .unwrap();

                let flipped = variant.with_strand(strand.opposite());
                assert_eq!(flipped.with_strand(strand).bits(), variant.bits());
                assert_eq!(flipped.with_strand(strand), variant);

                let switched = variant.with_coordinate_system(system.other());
                assert_eq!(switched.with_coordinate_system(system).bits(), variant.bits());
                assert_eq!(switched.end(), variant.end());
            }
        }
    }
}

#[rstest]
fn test_matches_sequence_variant(contig: Arc<Contig>) {
    for (ref_allele, alt_allele) in pairs() {
        for strand in STRANDS {
            for system in SYSTEMS {
                let start = start_for(system, 31_337);
                let compact = CompactVariant::new(
                    Arc::clone(&contig),
                    None,
                    strand,
                    system,
                    start,
                    &ref_allele,
                    &alt_allele,
                )
                .unwrap();
                let general = SequenceVariant::new(
                    Arc::clone(&contig),
                    None,
                    strand,
                    system,
                    start,
                    &ref_allele,
                    &alt_allele,
                )
                .unwrap();

                for target_strand in STRANDS {
                    for target_system in SYSTEMS {
                        let c = compact
                            .with_strand(target_strand)
                            .with_coordinate_system(target_system);
                        let g = general
                            .with_strand(target_strand)
                            .with_coordinate_system(target_system);
                        assert_eq!(c.start(), g.start());
                        assert_eq!(c.end(), g.end());
                        assert_eq!(c.ref_allele(), g.ref_allele());
                        assert_eq!(c.alt_allele(), g.alt_allele());
                        assert_eq!(c.change_length(), g.change_length());
                        assert_eq!(c.variant_type(), g.variant_type());
                        assert_eq!(compare_variants(&c, &g), Ordering::Equal);
                    }
                }
            }
        }
    }
}

#[rstest]
fn test_reverse_complement_packed_involution() {
    let word = 0x0123_4567_89AB_CDEF_u64;
    for length in 0..=MAX_BASES {
        let field = word & field_mask(length);
        let once = reverse_complement_packed(word, length, 0);
        assert_eq!(reverse_complement_packed(once, length, 0), field);
    }
}

#[rstest]
fn test_order_is_total_and_encoding_independent(contig: Arc<Contig>) {
    let seeds = [
        (100, "A", "C"),
        (100, "A", "G"),
        (100, "AT", "A"),
        (100, "", "GG"),
        (101, "C", "CTT"),
        (250, "GAT", "TTACA"),
        (250, "G", ""),
    ];
    let mut variants = Vec::new();
    for (zero_based, ref_allele, alt_allele) in seeds {
        for strand in STRANDS {
            for system in SYSTEMS {
                let positive = CompactVariant::new(
                    Arc::clone(&contig),
                    None,
                    Strand::Positive,
                    CoordinateSystem::ZeroBasedHalfOpen,
                    zero_based,
                    ref_allele,
                    alt_allele,
                )
                .unwrap();
                variants.push(positive.with_strand(strand).with_coordinate_system(system));
            }
        }
    }

    for a in &variants {
        assert_eq!(a.cmp(a), Ordering::Equal);
        for b in &variants {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
            assert_eq!(a.cmp(b) == Ordering::Equal, a == b);
            assert_eq!(
                compare_variants(a, b),
                compare_variants(&a.to_positive_strand().to_zero_based(), &b.to_positive_strand().to_zero_based())
            );
            if compare_variants(a, b) != Ordering::Equal {
                assert_eq!(a.cmp(b), compare_variants(a, b));
            }
            for c in &variants {
                if a <= b && b <= c {
                    assert!(a <= c);
                }
            }
        }
    }

    let mut sorted = variants.clone();
    sorted.sort();
    let firsts: Vec<(u32, String, String)> = sorted
        .iter()
        .step_by(4)
        .map(|v| {
            let positive = v.to_positive_strand();
            (
                positive.start_zero_based(),
                positive.ref_allele().into_owned(),
                positive.alt_allele().into_owned(),
            )
        })
        .collect();
    assert_eq!(
        firsts,
        vec![
            (100, "".to_string(), "GG".to_string()),
            (100, "A".to_string(), "C".to_string()),
            (100, "A".to_string(), "G".to_string()),
            (100, "AT".to_string(), "A".to_string()),
            (101, "C".to_string(), "CTT".to_string()),
            (250, "G".to_string(), "".to_string()),
            (250, "GAT".to_string(), "TTACA".to_string()),
        ]
    );
}

#[rstest]
fn test_scenario_snv_strand_flip() {
    let contig = Arc::new(Contig::new(1, "chr1", 100_000).unwrap());
    let snv = CompactVariant::new(
        contig,
        None,
        Strand::Positive,
        CoordinateSystem::OneBasedClosed,
        12345,
        "A",
        "T",
    )
    .unwrap();
    assert_eq!(snv.variant_type(), VariantType::Snv);
    assert_eq!((snv.start(), snv.end()), (12345, 12345));

    let negative = snv.with_strand(Strand::Negative);
    assert_eq!((negative.start(), negative.end()), (87656, 87656));
    assert_eq!(negative.ref_allele(), "T");
    assert_eq!(negative.alt_allele(), "A");
}

#[rstest]
fn test_scenario_deletion(contig: Arc<Contig>) {
    let del = CompactVariant::new(
        contig,
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
    assert_eq!(del.variant_type(), VariantType::Del);
}

#[rstest]
fn test_scenario_max_length(contig: Arc<Contig>) {
    for strand in STRANDS {
        for system in SYSTEMS {
            let ins = CompactVariant::new(
                Arc::clone(&contig),
                None,
                strand,
                system,
                1000,
                "",
                "TACGTACGTAG",
            )
            .unwrap();
            assert_eq!(ins.ref_allele(), "");
            assert_eq!(ins.alt_allele(), "TACGTACGTAG");
            assert_eq!(ins.variant_type(), VariantType::Ins);
        }
    }
}

#[rstest]
fn test_scenario_rejection(contig: Arc<Contig>) {
    let result = CompactVariant::new(
        contig,
        None,
        Strand::Positive,
        CoordinateSystem::OneBasedClosed,
        1,
        "AGTCAGTCAGTC",
        "",
    );
    assert_eq!(
        result,
        Err(VariantError::AlleleTooLong {
            length: 12,
            max: MAX_BASES
        })
    );
}

#[rstest]
fn test_allele_packing_matches_word(contig: Arc<Contig>) {
    let variant = CompactVariant::new(
        contig,
        None,
        Strand::Positive,
        CoordinateSystem::ZeroBasedHalfOpen,
        0,
        "ACG",
        "TT",
    )
    .unwrap();
    let bases = variant.bits() & ((1 << 22) - 1);
    assert_eq!(bases >> 16, pack_allele("ACG").unwrap());
    assert_eq!((bases >> 12) & 0b1111, pack_allele("TT").unwrap());
    assert_eq!(bases & 0xFFF, 0);
}
