use std::sync::Arc;

use svart_core::errors::VariantError;
use svart_core::models::{SequenceVariant, Variant};

use crate::variant::CompactVariant;

///
/// Compact a general sequence variant.
///
/// Fails for alleles that are too long or contain bases other than A, C, G, T;
/// check [`CompactVariant::is_compactable`] first to keep such variants in their
/// general form instead.
///
impl TryFrom<&SequenceVariant> for CompactVariant {
    type Error = VariantError;

    fn try_from(value: &SequenceVariant) -> Result<Self, Self::Error> {
        CompactVariant::new(
            Arc::clone(value.contig_arc()),
            value.id(),
            value.strand(),
            value.coordinate_system(),
            value.start(),
            &value.ref_allele(),
            &value.alt_allele(),
        )
    }
}

impl From<&CompactVariant> for SequenceVariant {
    fn from(value: &CompactVariant) -> Self {
        let expanded = SequenceVariant::new(
            Arc::clone(value.contig_arc()),
            value.id(),
            value.strand(),
            value.coordinate_system(),
            value.start(),
            &value.ref_allele(),
            &value.alt_allele(),
        );
        match expanded {
            Ok(variant) => variant,
            Err(e) => unreachable!("compact variant {} failed to expand: {}", value, e),
        }
    }
}
