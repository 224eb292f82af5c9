use std::fmt::{self, Display};
use std::str::FromStr;

/// Reading direction along a double-stranded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Positive,
    Negative,
}

impl Strand {
    pub fn is_positive(&self) -> bool {
        matches!(self, Strand::Positive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Strand::Negative)
    }

    /// The complementary strand.
    pub fn opposite(&self) -> Self {
        match self {
            Strand::Positive => Strand::Negative,
            Strand::Negative => Strand::Positive,
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Positive),
            "-" => Ok(Strand::Negative),
            _ => Err(format!("Invalid strand: {}", s)),
        }
    }
}
