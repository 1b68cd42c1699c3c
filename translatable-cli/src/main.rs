// Command-line interface for translatable documents
//
// This binary exposes the translatable-core operations over files and stdin, so the conversion
// and segmentation behavior an editor relies on can be exercised (and scripted) from a shell.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Configured input filters run on Markdown
// before it is parsed, output filters on Markdown after it is produced.
// Usage:
//  translatable <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  translatable convert <input> --to <format> [--from <format>] [-o <file>] - Same as above
//  translatable blocks <input>             - Split Markdown into blocks (JSON array)
//  translatable join <input.json>          - Join a JSON array of blocks back into Markdown
//  translatable display <input> [--decode] - Encode (or decode) text for a raw editing surface
//  translatable script <input>             - Report the direction and script of a text
//  translatable string <id> [--locale <l>] - Look up a localized UI string
//  translatable --list-formats             - List available formats
//
// Any <input> may be `-` to read from stdin.

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::io::{self, Read};
use translatable_config::{Loader, TranslatableConfig};
use translatable_core::script::detect_rtl_script;
use translatable_core::strings::LANG_NOT_SUPPORTED;
use translatable_core::{
    classify, from_display, is_hebrew, markdown_from_blocks, segment, to_display, FilterList,
    FormatRegistry,
};

const SUBCOMMANDS: &[&str] = &[
    "convert", "blocks", "join", "display", "script", "string", "help",
];

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("translatable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and inspect translatable Markdown documents")
        .long_about(
            "translatable works with the Markdown documents a translator edits block by block.\n\n\
            Commands:\n  \
            - convert: Markdown <-> HTML, with the configured filters applied\n  \
            - blocks / join: split a document into editing blocks and back\n  \
            - display: encode text for (or decode it from) a raw editing surface\n  \
            - script: detect the text direction of a document\n  \
            - string: look up a localized UI string\n\n\
            Examples:\n  \
            translatable story.md --to html              # Convert to HTML (stdout)\n  \
            translatable edit.html --to markdown -o a.md # Convert back to a file\n  \
            translatable blocks story.md                 # JSON array of blocks\n  \
            cat story.md | translatable script -         # Read from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a translatable.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between Markdown and HTML (default command)")
                .long_about(
                    "Convert documents between Markdown and HTML.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown (.md, .markdown)\n  \
                    - html:     HTML fragments (.html, .htm)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Filters from the [filters] configuration table apply to the Markdown side:\n\
                    input filters before Markdown is parsed, output filters after it is written.\n\n\
                    HTML output needs `editor.preview`, HTML input needs `editor.editable`.",
                )
                .arg(input_arg("Input file path (`-` for stdin)"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("blocks")
                .about("Split a Markdown document into editing blocks")
                .long_about(
                    "Prints the blocks of a Markdown document as a JSON array of strings.\n\n\
                    With `editor.blockable = false` the whole document is a single block.",
                )
                .arg(input_arg("Markdown file path (`-` for stdin)")),
        )
        .subcommand(
            Command::new("join")
                .about("Join a JSON array of blocks back into Markdown")
                .arg(input_arg("JSON file path (`-` for stdin)")),
        )
        .subcommand(
            Command::new("display")
                .about("Encode text for a raw editing surface")
                .arg(input_arg("Input file path (`-` for stdin)"))
                .arg(
                    Arg::new("decode")
                        .long("decode")
                        .help("Decode surface text back to plain text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("script")
                .about("Report the text direction and right-to-left script of a text")
                .arg(input_arg("Input file path (`-` for stdin)")),
        )
        .subcommand(
            Command::new("string")
                .about("Look up a localized UI string")
                .arg(
                    Arg::new("id")
                        .help("String id, e.g. 'save'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .help("Locale tag (defaults to the configured locale)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A path (or `-`) in first position means an implied convert
            if args.len() > 1
                && (!args[1].starts_with('-') || args[1] == "-")
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    registry
                        .detect_format_from_filename(input)
                        .unwrap_or_else(|| {
                            eprintln!("Error: Could not detect format from filename '{input}'");
                            eprintln!("Please specify --from explicitly");
                            std::process::exit(1);
                        })
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        Some(("blocks", sub_matches)) => {
            handle_blocks_command(required(sub_matches, "input"), &config);
        }
        Some(("join", sub_matches)) => {
            handle_join_command(required(sub_matches, "input"));
        }
        Some(("display", sub_matches)) => {
            let input = required(sub_matches, "input");
            let decode = sub_matches.get_flag("decode");
            if decode {
                require_surface(config.editor.editable, "Decoding edited text", "editor.editable");
            }
            handle_display_command(input, decode);
        }
        Some(("script", sub_matches)) => {
            handle_script_command(required(sub_matches, "input"));
        }
        Some(("string", sub_matches)) => {
            let id = required(sub_matches, "id");
            let locale = sub_matches.get_one::<String>("locale").map(|s| s.as_str());
            handle_string_command(id, locale, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Value of an argument clap already enforces as required.
fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing argument '{id}'");
            std::process::exit(1);
        })
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &TranslatableConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    if to == "html" {
        require_surface(config.editor.preview, "HTML preview", "editor.preview");
    }
    if from == "html" {
        require_surface(config.editor.editable, "Committing edited HTML", "editor.editable");
    }

    log::debug!("Converting '{input}' from {from} to {to}");
    let mut source = read_input(input);

    if from == "markdown" {
        source = compile_filters(config.filters.input_filters()).apply(&source);
    }

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let mut result = registry.serialize(&doc, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    if to == "markdown" {
        result = compile_filters(config.filters.output_filters()).apply(&result);
    }

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => emit(&result),
    }
}

/// Handle the blocks command
fn handle_blocks_command(input: &str, config: &TranslatableConfig) {
    let source = read_input(input);
    let blocks = segment(&source, config.editor.segmentation());
    let json = serde_json::to_string_pretty(&blocks).unwrap_or_else(|e| {
        eprintln!("Error encoding blocks: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the join command
fn handle_join_command(input: &str) {
    let source = read_input(input);
    let blocks: Vec<String> = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error: '{input}' is not a JSON array of strings: {e}");
        std::process::exit(1);
    });
    emit(&markdown_from_blocks(&blocks));
}

/// Handle the display command
fn handle_display_command(input: &str, decode: bool) {
    let source = read_input(input);
    if decode {
        emit(&from_display(&source));
    } else {
        emit(&to_display(&source));
    }
}

/// Handle the script command
fn handle_script_command(input: &str) {
    let source = read_input(input);
    println!("direction: {}", classify(&source).html_dir());
    if let Some(script) = detect_rtl_script(&source) {
        println!("script: {}", script.name());
    }
    println!("hebrew: {}", is_hebrew(&source));
}

/// Handle the string command
fn handle_string_command(id: &str, locale: Option<&str>, config: &TranslatableConfig) {
    let table = config.string_table();
    let locale = locale.unwrap_or_else(|| config.locale.effective());

    if !table.supports(locale) {
        log::warn!(
            "{}: '{locale}', using '{}'",
            table.localize(locale, LANG_NOT_SUPPORTED),
            table.default_locale()
        );
    }

    println!("{}", table.localize(locale, id));
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let extensions = registry
            .get(&name)
            .map(|format| format.file_extensions().join(", "))
            .unwrap_or_default();
        println!("  {name:<10} ({extensions})");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TranslatableConfig {
    let loader = Loader::new().with_optional_file("translatable.toml");
    let loader = if let Some(path) = explicit_path {
        log::info!("Using configuration file {path}");
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Exit when the editor surface behind a command is switched off in the configuration.
fn require_surface(enabled: bool, action: &str, key: &str) {
    if !enabled {
        eprintln!("Error: {action} is disabled ({key} = false)");
        std::process::exit(1);
    }
}

fn compile_filters(filters: Result<FilterList, translatable_core::FilterError>) -> FilterList {
    filters.unwrap_or_else(|err| {
        eprintln!("Invalid filter configuration: {err}");
        std::process::exit(1);
    })
}

/// Read a file, or stdin when `input` is `-`.
fn read_input(input: &str) -> String {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return buffer;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn emit(text: &str) {
    if text.is_empty() || text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
