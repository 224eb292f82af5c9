use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;
use fxhash::FxHashMap as HashMap;
use log::{info, warn};
use serde::Serialize;

use svart_compact::CompactVariant;
use svart_core::models::{Contig, CoordinateSystem, Strand, Variant, VariantType};
use svart_core::utils::{get_dynamic_reader, read_chrom_sizes};

/// How input lines are interpreted and how packed variants are written.
#[derive(Debug, Clone, Copy)]
pub struct CompactOptions {
    pub coordinate_system: CoordinateSystem,
    pub strand: Strand,
    pub json: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CompactSummary {
    pub packed: usize,
    pub skipped: usize,
}

#[derive(Serialize)]
struct CompactRecord<'a> {
    contig: &'a str,
    id: Option<&'a str>,
    start: u32,
    end: u32,
    #[serde(rename = "ref")]
    ref_allele: &'a str,
    #[serde(rename = "alt")]
    alt_allele: &'a str,
    strand: Strand,
    coordinate_system: CoordinateSystem,
    variant_type: VariantType,
    change_length: i32,
    bits: String,
}

pub fn run_compact(matches: &ArgMatches) -> Result<()> {
    let chrom_sizes = matches
        .get_one::<String>("chrom-sizes")
        .expect("A path to a chrom.sizes file is required.");

    let input = matches
        .get_one::<String>("input")
        .expect("A path to a variant table is required.");

    let coordinate_system = matches
        .get_one::<String>("coordinate-system")
        .map(|s| s.parse::<CoordinateSystem>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(CoordinateSystem::OneBasedClosed);

    let strand = matches
        .get_one::<String>("strand")
        .map(|s| s.parse::<Strand>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(Strand::Positive);

    let options = CompactOptions {
        coordinate_system,
        strand,
        json: matches.get_flag("json"),
    };

    let contigs = load_contigs(chrom_sizes)?;
    info!("Loaded {} contigs from {}", contigs.len(), chrom_sizes);

    let reader = get_dynamic_reader(Path::new(input))?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let summary = compact_variants(reader, &mut writer, &contigs, options)?;
    writer.flush()?;

    info!(
        "Packed {} variants, skipped {}",
        summary.packed, summary.skipped
    );

    Ok(())
}

fn load_contigs(path: &str) -> Result<HashMap<String, Arc<Contig>>> {
    let contigs = read_chrom_sizes(path)
        .with_context(|| format!("Failed to read chrom sizes: {}", path))?;
    Ok(contigs
        .into_iter()
        .map(|contig| (contig.name().to_string(), Arc::new(contig)))
        .collect())
}

///
/// Pack every line of a variant table and write one output line per packed variant.
///
/// Lines are `contig<TAB>start<TAB>ref<TAB>alt[<TAB>id]`. Lines starting with `#` are
/// skipped silently; lines naming an unknown contig or failing validation are skipped
/// with a warning.
///
pub fn compact_variants<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    contigs: &HashMap<String, Arc<Contig>>,
    options: CompactOptions,
) -> Result<CompactSummary> {
    let mut summary = CompactSummary::default();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let variant = match parse_variant(&line, contigs, options.coordinate_system) {
            Ok(variant) => variant,
            Err(e) => {
                warn!("Skipping line {}: {}", line_number + 1, e);
                summary.skipped += 1;
                continue;
            }
        };

        let variant = variant.with_strand(options.strand);
        if options.json {
            write_json(writer, &variant)?;
        } else {
            write_tsv(writer, &variant)?;
        }
        summary.packed += 1;
    }

    Ok(summary)
}

fn parse_variant(
    line: &str,
    contigs: &HashMap<String, Arc<Contig>>,
    coordinate_system: CoordinateSystem,
) -> Result<CompactVariant> {
    let mut fields = line.strip_suffix('\r').unwrap_or(line).split('\t');

    let contig_name = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing contig field"))?;
    let start_str = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing start field"))?;
    let ref_allele = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing ref field"))?;
    let alt_allele = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing alt field"))?;
    let id = fields.next().filter(|id| !id.is_empty() && *id != ".");

    let contig = contigs
        .get(contig_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown contig: {}", contig_name))?;
    let start = start_str
        .parse::<u32>()
        .with_context(|| format!("Invalid start: {}", start_str))?;

    // VCF writes an empty allele as "-"
    let ref_allele = if ref_allele == "-" { "" } else { ref_allele };
    let alt_allele = if alt_allele == "-" { "" } else { alt_allele };

    Ok(CompactVariant::new(
        Arc::clone(contig),
        id,
        Strand::Positive,
        coordinate_system,
        start,
        ref_allele,
        alt_allele,
    )?)
}

fn write_tsv<W: Write>(writer: &mut W, variant: &CompactVariant) -> Result<()> {
    let allele = |a: &str| if a.is_empty() { "-".to_string() } else { a.to_string() };
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}\t{:#018x}",
        variant.contig().name(),
        variant.start(),
        variant.end(),
        allele(&variant.ref_allele()),
        allele(&variant.alt_allele()),
        variant.strand(),
        variant.bits()
    )?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, variant: &CompactVariant) -> Result<()> {
    let (ref_allele, alt_allele) = (variant.ref_allele(), variant.alt_allele());
    let record = CompactRecord {
        contig: variant.contig().name(),
        id: variant.id(),
        start: variant.start(),
        end: variant.end(),
        ref_allele: &ref_allele,
        alt_allele: &alt_allele,
        strand: variant.strand(),
        coordinate_system: variant.coordinate_system(),
        variant_type: variant.variant_type(),
        change_length: variant.change_length(),
        bits: format!("{:#018x}", variant.bits()),
    };
    serde_json::to_writer(&mut *writer, &record)?;
    writeln!(writer)?;
    Ok(())
}
