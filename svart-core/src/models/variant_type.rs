use std::fmt::{self, Display};

/// Kind of change described by a ref/alt allele pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantType {
    Snv,
    Mnv,
    Ins,
    Del,
    DelIns,
    Unknown,
}

impl VariantType {
    ///
    /// Classify a ref/alt allele pair.
    ///
    /// Alleles of equal length are an SNV (one base) or an MNV (several bases); two
    /// empty alleles carry no change and are `Unknown`. When the lengths differ, the
    /// pair is an insertion or deletion if the shorter allele is empty or flanks the
    /// longer one (a VCF padding base, e.g. `AG>A`), and a deletion-insertion otherwise.
    /// A length change alone does not make an indel: `AC>TTT` shares no flanking bases
    /// and is `DelIns`, not `Ins`.
    ///
    /// ```
    /// use svart_core::models::VariantType;
    ///
    /// assert_eq!(VariantType::classify("A", "T"), VariantType::Snv);
    /// assert_eq!(VariantType::classify("AG", "A"), VariantType::Del);
    /// assert_eq!(VariantType::classify("AC", "TTT"), VariantType::DelIns);
    /// ```
    pub fn classify(ref_allele: &str, alt_allele: &str) -> Self {
        let (ref_len, alt_len) = (ref_allele.len(), alt_allele.len());

        if ref_len == alt_len {
            return match ref_len {
                0 => VariantType::Unknown,
                1 => VariantType::Snv,
                _ => VariantType::Mnv,
            };
        }

        let (shorter, longer) = if ref_len < alt_len {
            (ref_allele.as_bytes(), alt_allele.as_bytes())
        } else {
            (alt_allele.as_bytes(), ref_allele.as_bytes())
        };

        let flanks = shorter.is_empty()
            || longer[..shorter.len()].eq_ignore_ascii_case(shorter)
            || longer[longer.len() - shorter.len()..].eq_ignore_ascii_case(shorter);

        match (flanks, ref_len < alt_len) {
            (true, true) => VariantType::Ins,
            (true, false) => VariantType::Del,
            (false, _) => VariantType::DelIns,
        }
    }

    pub fn is_indel(&self) -> bool {
        matches!(self, VariantType::Ins | VariantType::Del)
    }
}

impl Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantType::Snv => write!(f, "SNV"),
            VariantType::Mnv => write!(f, "MNV"),
            VariantType::Ins => write!(f, "INS"),
            VariantType::Del => write!(f, "DEL"),
            VariantType::DelIns => write!(f, "DELINS"),
            VariantType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
