//! Core models for working with sequence variants on named contigs.
//!
//! This crate holds the pieces every variant representation in svart agrees on:
//!
//! - [`models::Contig`]: a named reference sequence with a fixed length
//! - [`models::CoordinateSystem`] and [`models::Strand`], with the position algebra
//!   used to move between them
//! - [`models::VariantType`]: classification of a ref/alt allele pair
//! - [`models::Variant`]: the read-only capability set shared by the general
//!   [`models::SequenceVariant`] and the packed representation in `svart-compact`
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use svart_core::models::{Contig, CoordinateSystem, SequenceVariant, Strand, Variant};
//!
//! let chr1 = Arc::new(Contig::new(1, "chr1", 100_000).unwrap());
//! let snv = SequenceVariant::new(
//!     chr1,
//!     None,
//!     Strand::Positive,
//!     CoordinateSystem::OneBasedClosed,
//!     12345,
//!     "A",
//!     "T",
//! )
//! .unwrap();
//!
//! let flipped = snv.with_strand(Strand::Negative);
//! assert_eq!(flipped.start(), 87656);
//! assert_eq!(flipped.ref_allele(), "T");
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{ContigError, VariantError};
