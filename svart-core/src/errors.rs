use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Invalid base '{base}' in allele '{allele}'")]
    InvalidAllele { allele: String, base: char },

    #[error("Combined ref and alt length {length} exceeds the maximum of {max} bases")]
    AlleleTooLong { length: usize, max: usize },

    #[error("Variants cannot be placed on the unknown contig")]
    UnknownContig,

    #[error("Interval [{start}, {end}) lies outside contig {contig} of length {length}")]
    OutOfContigBounds {
        contig: String,
        start: i64,
        end: i64,
        length: u32,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContigError {
    #[error("Contig id 0 is reserved for the unknown contig: {0}")]
    ReservedId(String),

    #[error("Contig {name} has an invalid length: {length}")]
    InvalidLength { name: String, length: u64 },

    #[error("Error parsing contig: {0}")]
    ContigParseError(String),
}
