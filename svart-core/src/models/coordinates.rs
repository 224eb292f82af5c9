use std::fmt::{self, Display};
use std::str::FromStr;

/// Convention for where positions start and whether interval ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateSystem {
    /// First base is 0, start inclusive, end exclusive (BED, VRS).
    ZeroBasedHalfOpen,
    /// First base is 1, start and end inclusive (VCF, GFF).
    OneBasedClosed,
}

impl CoordinateSystem {
    pub fn is_zero_based(&self) -> bool {
        matches!(self, CoordinateSystem::ZeroBasedHalfOpen)
    }

    pub fn is_one_based(&self) -> bool {
        matches!(self, CoordinateSystem::OneBasedClosed)
    }

    /// The other of the two coordinate systems.
    pub fn other(&self) -> Self {
        match self {
            CoordinateSystem::ZeroBasedHalfOpen => CoordinateSystem::OneBasedClosed,
            CoordinateSystem::OneBasedClosed => CoordinateSystem::ZeroBasedHalfOpen,
        }
    }

    ///
    /// Amount to add to a start coordinate in `self` to express it in `target`.
    ///
    /// ```
    /// use svart_core::models::CoordinateSystem::*;
    ///
    /// assert_eq!(ZeroBasedHalfOpen.start_delta(OneBasedClosed), 1);
    /// assert_eq!(OneBasedClosed.start_delta(ZeroBasedHalfOpen), -1);
    /// assert_eq!(OneBasedClosed.start_delta(OneBasedClosed), 0);
    /// ```
    #[inline]
    pub fn start_delta(&self, target: CoordinateSystem) -> i64 {
        match (self, target) {
            (CoordinateSystem::ZeroBasedHalfOpen, CoordinateSystem::OneBasedClosed) => 1,
            (CoordinateSystem::OneBasedClosed, CoordinateSystem::ZeroBasedHalfOpen) => -1,
            _ => 0,
        }
    }

    /// End coordinates are numerically identical in both systems.
    #[inline]
    pub fn end_delta(&self, _target: CoordinateSystem) -> i64 {
        0
    }

    ///
    /// Position of `pos` when read from the opposite end of a contig of `contig_length` bases.
    ///
    /// One-based positions map to `contig_length - pos + 1`, zero-based positions to
    /// `contig_length - pos`. Applying the inversion twice returns `pos`.
    ///
    #[inline]
    pub fn invert_position(&self, pos: u32, contig_length: u32) -> u32 {
        match self {
            CoordinateSystem::OneBasedClosed => {
                debug_assert!(pos <= contig_length + 1);
                contig_length + 1 - pos
            }
            CoordinateSystem::ZeroBasedHalfOpen => {
                debug_assert!(pos <= contig_length);
                contig_length - pos
            }
        }
    }
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::ZeroBasedHalfOpen => write!(f, "zero-based"),
            CoordinateSystem::OneBasedClosed => write!(f, "one-based"),
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero-based" | "zero_based" | "0" => Ok(CoordinateSystem::ZeroBasedHalfOpen),
            "one-based" | "one_based" | "1" => Ok(CoordinateSystem::OneBasedClosed),
            _ => Err(format!("Unknown coordinate system: {}", s)),
        }
    }
}
