use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/render.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["tree", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting weft markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the weft file")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("view")
                .help("Inspect view to render (e.g., 'tree', 'json')")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                .index(2)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Emit compact JSON")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "weft", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "weft", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "weft", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
