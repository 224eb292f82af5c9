use clap::{Arg, ArgAction, Command};

pub const COMPACT_CMD: &str = "compact";

pub fn create_compact_cli() -> Command {
    Command::new(COMPACT_CMD)
        .about("Pack a table of variants (contig, start, ref, alt[, id]) into compact 64-bit words")
        .arg_required_else_help(true)
        .arg(
            Arg::new("chrom-sizes")
                .long("chrom-sizes")
                .short('s')
                .required(true)
                .help("Path to a chrom.sizes file with the contigs the variants lie on"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .help("Path to a tab-separated variant table (optionally gzipped)"),
        )
        .arg(
            Arg::new("coordinate-system")
                .long("coordinate-system")
                .short('c')
                .default_value("one-based")
                .help("Coordinate system of the input starts (one-based or zero-based)"),
        )
        .arg(
            Arg::new("strand")
                .long("strand")
                .default_value("+")
                .allow_hyphen_values(true)
                .help("Strand to report the variants on (+ or -); input is read as +"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Write one JSON object per variant instead of tab-separated lines"),
        )
}
