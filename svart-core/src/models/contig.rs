use std::fmt::{self, Display};

use crate::errors::ContigError;

/// Id reserved for the placeholder contig returned by [`Contig::unknown`].
pub const UNKNOWN_CONTIG_ID: u32 = 0;

///
/// A named reference sequence (e.g. a chromosome) with a fixed length in bases.
///
/// Variants hold contigs by shared reference; nothing in svart mutates a contig
/// after it has been built.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contig {
    id: u32,
    name: String,
    length: u32,
}

impl Contig {
    ///
    /// Create a new contig.
    ///
    /// The id must be positive and the length must lie in `1..u32::MAX`, so that a
    /// one-based coordinate one past the last zero-based position still fits in a `u32`.
    ///
    pub fn new(id: u32, name: impl Into<String>, length: u32) -> Result<Self, ContigError> {
        let name = name.into();
        if id == UNKNOWN_CONTIG_ID {
            return Err(ContigError::ReservedId(name));
        }
        if length == 0 || length == u32::MAX {
            return Err(ContigError::InvalidLength {
                name,
                length: length as u64,
            });
        }
        Ok(Contig { id, name, length })
    }

    ///
    /// The placeholder for variants whose contig could not be resolved.
    ///
    pub fn unknown() -> Self {
        Contig {
            id: UNKNOWN_CONTIG_ID,
            name: "na".to_string(),
            length: 1,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_CONTIG_ID
    }
}

impl Display for Contig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
