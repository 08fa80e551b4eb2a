// Command-line interface for weft
//
// This binary provides commands for converting and inspecting weft markup files.
//
// The main role for the weft program is to interface with weft content: converting it
// to and from the structured JSON representation, canonicalizing it, and inspecting the
// parsed component tree. The codec itself lives in the weft-loom crate; this crate is a
// thin shell over it.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file
// extension, while being overwrittable by an explicit --from flag.
// Usage:
//  weft <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  weft convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  weft fmt <input>                      - Canonicalize weft markup to stdout
//  weft inspect <path> [<view>]          - Render the component tree (defaults to "tree")

mod render;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use weft_config::{Loader, WeftConfig};
use weft_loom::{parse_with, serialize_with, ParseOptions, TagRegistry};
use weft_text::{json, Component};

const FORMATS: &[&str] = &["weft", "json"];

/// Detect a conversion format from a filename's extension.
fn detect_format_from_filename(filename: &str) -> Option<&'static str> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())?;

    match extension {
        "weft" => Some("weft"),
        "json" => Some("json"),
        _ => None,
    }
}

fn build_cli() -> Command {
    Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting weft markup")
        .long_about(
            "weft is a command-line tool for working with weft markup files.\n\n\
            Commands:\n  \
            - convert: Transform between representations (weft markup, JSON)\n  \
            - fmt:     Canonicalize markup (aliases collapse, quoting normalizes)\n  \
            - inspect: View the parsed component tree\n\n\
            Examples:\n  \
            weft message.weft --to json             # Convert to JSON (outputs to stdout)\n  \
            weft message.json --to weft -o out.weft # JSON back to canonical markup\n  \
            weft fmt message.weft                   # Canonicalize to stdout\n  \
            weft inspect message.weft               # View component tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a weft.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between representations (default command)")
                .long_about(
                    "Convert documents between representations.\n\n\
                    Supported formats:\n  \
                    - weft: Weft markup (.weft)\n  \
                    - json: Structured component JSON (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    weft convert input.weft --to json            # Markup to JSON (stdout)\n  \
                    weft convert input.json --to weft -o out.weft  # JSON to canonical markup\n  \
                    weft input.weft --to json                    # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Emit compact JSON instead of pretty-printed")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("fmt")
                .about("Canonicalize a weft file")
                .long_about(
                    "Canonicalize a weft markup file.\n\n\
                    This command parses the input and re-serializes it: alias tag names\n\
                    collapse to their canonical spelling and quoting is normalized.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    weft fmt input.weft                   # Canonicalize to stdout\n  \
                    weft fmt input.weft > canonical.weft  # Redirect to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the parsed component tree of a weft file")
                .long_about(
                    "View the component tree a weft file parses into.\n\n\
                    Views:\n  \
                    - tree: indented tree visualization (default)\n  \
                    - json: structured component JSON\n\n\
                    Examples:\n  \
                    weft inspect file.weft       # Tree visualization (default)\n  \
                    weft inspect file.weft json  # Component JSON",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the weft file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to render. Defaults to 'tree'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            render::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "fmt"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                match detect_format_from_filename(input) {
                    Some(detected) => detected.to_string(),
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let compact = sub_matches.get_flag("compact");
            handle_convert_command(input, &from, to, output, compact, &config);
        }
        Some(("fmt", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            // fmt always reads markup and writes markup to stdout
            handle_convert_command(input, "weft", "weft", None, false, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or("tree");
            handle_inspect_command(path, view, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Parse `source` into a component tree according to `from`.
fn read_component(source: &str, from: &str, config: &WeftConfig) -> Component {
    match from {
        "weft" => {
            let registry = TagRegistry::standard();
            let options = ParseOptions::from(&config.parse);
            parse_with(source, &registry, options).unwrap_or_else(|e| {
                eprintln!("Parse error: {e}");
                std::process::exit(1);
            })
        }
        "json" => json::from_json(source).unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }),
        other => {
            eprintln!("Error: Format '{other}' is not supported");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    compact: bool,
    config: &WeftConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = read_component(&source, from, config);

    let result = match to {
        "weft" => serialize_with(&doc, &TagRegistry::standard()),
        "json" => {
            let pretty = config.convert.json.pretty && !compact;
            let rendered = if pretty {
                json::to_json_pretty(&doc)
            } else {
                json::to_json(&doc)
            };
            rendered.unwrap_or_else(|e| {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Error: Format '{other}' is not supported");
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{result}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, view: &str, config: &WeftConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let doc = read_component(&source, "weft", config);

    let output = render::render(&doc, view).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

fn load_cli_config(explicit_path: Option<&str>) -> WeftConfig {
    let loader = Loader::new().with_optional_file("weft.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
