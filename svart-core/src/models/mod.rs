pub mod contig;
pub mod coordinates;
pub mod sequence_variant;
pub mod strand;
pub mod variant;
pub mod variant_type;

// re-export for cleaner imports
pub use self::contig::Contig;
pub use self::coordinates::CoordinateSystem;
pub use self::sequence_variant::SequenceVariant;
pub use self::strand::Strand;
pub use self::variant::{Variant, compare_variants, zero_based_start};
pub use self::variant_type::VariantType;
