mod compact;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "svart";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Monarch Initiative")
        .about("Tools for packing small sequence variants into single 64-bit words.")
        .subcommand_required(true)
        .subcommand(compact::cli::create_compact_cli())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // COMPACT
        //
        Some((compact::cli::COMPACT_CMD, matches)) => {
            compact::handlers::run_compact(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
