//! Single-word encoding of small sequence variants.
//!
//! A [`CompactVariant`] stores the start, strand, coordinate system and both alleles
//! of a variant in one `u64`, for alleles of at most [`bases::MAX_BASES`] bases
//! together. It implements the same [`svart_core::models::Variant`] capability set as
//! the general [`svart_core::models::SequenceVariant`], so the two can be swapped
//! to save memory without changing behavior.
//!
//! ## Modules
//!
//! - [`bases`]: the two-bit nucleotide codec and packed reverse complement
//! - [`layout`]: field offsets of the packed word and the operations on it
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use svart_compact::CompactVariant;
//! use svart_core::models::{Contig, CoordinateSystem, Strand, Variant};
//!
//! let chr1 = Arc::new(Contig::new(1, "chr1", 100_000).unwrap());
//! let ins = CompactVariant::new(
//!     chr1,
//!     None,
//!     Strand::Positive,
//!     CoordinateSystem::ZeroBasedHalfOpen,
//!     500,
//!     "",
//!     "TACGTACGTAG",
//! )
//! .unwrap();
//!
//! assert_eq!(ins.change_length(), 11);
//! assert_eq!(ins.with_strand(Strand::Negative).alt_allele(), "CTACGTACGTA");
//! ```
pub mod bases;
mod convert;
pub mod layout;
pub mod variant;

pub use variant::CompactVariant;
