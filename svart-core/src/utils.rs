use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::errors::ContigError;
use crate::models::Contig;

/// Watson-Crick complement of an IUPAC nucleotide code, preserving case.
const COMPLEMENT_ARRAY: [u8; 256] = {
    let mut arr = [0u8; 256];
    let pairs: [(u8, u8); 11] = [
        (b'A', b'T'),
        (b'C', b'G'),
        (b'G', b'C'),
        (b'T', b'A'),
        (b'N', b'N'),
        (b'R', b'Y'),
        (b'Y', b'R'),
        (b'S', b'S'),
        (b'W', b'W'),
        (b'K', b'M'),
        (b'M', b'K'),
    ];
    let mut i = 0;
    while i < pairs.len() {
        let (base, complement) = pairs[i];
        arr[base as usize] = complement;
        arr[base.to_ascii_lowercase() as usize] = complement.to_ascii_lowercase();
        i += 1;
    }
    // B=CGT <-> V=ACG, D=AGT <-> H=ACT
    arr[b'B' as usize] = b'V';
    arr[b'b' as usize] = b'v';
    arr[b'V' as usize] = b'B';
    arr[b'v' as usize] = b'b';
    arr[b'D' as usize] = b'H';
    arr[b'd' as usize] = b'h';
    arr[b'H' as usize] = b'D';
    arr[b'h' as usize] = b'd';
    arr
};

/// True for upper- or lower-case IUPAC nucleotide codes.
#[inline]
pub fn is_iupac_base(base: u8) -> bool {
    COMPLEMENT_ARRAY[base as usize] != 0
}

///
/// Reverse complement of a nucleotide sequence.
///
/// Characters outside the IUPAC alphabet are kept as-is.
///
/// ```
/// use svart_core::utils::reverse_complement;
///
/// assert_eq!(reverse_complement("AACG"), "CGTT");
/// assert_eq!(reverse_complement(""), "");
/// ```
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes()
        .rev()
        .map(|b| match COMPLEMENT_ARRAY[b as usize] {
            0 => b as char,
            c => c as char,
        })
        .collect()
}

///
/// Open a file for buffered reading, decompressing it on the fly when it ends in `.gz`.
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read a chrom.sizes file (`name<TAB>length` per line) into contigs.
///
/// Contig ids are assigned from 1 in file order. Blank lines and lines starting
/// with `#` are skipped.
///
pub fn read_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<Vec<Contig>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut contigs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(name), Some(length)) = (fields.next(), fields.next()) else {
            return Err(ContigError::ContigParseError(line.clone()).into());
        };
        let length = length
            .parse::<u32>()
            .map_err(|_| ContigError::ContigParseError(line.clone()))?;

        let id = contigs.len() as u32 + 1;
        contigs.push(Contig::new(id, name, length)?);
    }

    Ok(contigs)
}
