// Command-line interface for quill
//
// This binary provides commands for converting, inspecting and editing blog draft files.
//
// A draft file is the JSON form of a BlogDraft (camelCase keys, every value a string). The
// core capabilities live in the quill-babel crate; this binary only owns file I/O,
// configuration and logging.
//
// Converting:
//
// The source format is auto-detected from the file extension, while being overwrittable by an
// explicit --from flag.
// Usage:
//  quill <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  quill convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  quill inspect <path> [<transform>]      - Print a pipeline stage (defaults to "toc-json")
//  quill export <path> [--quick]           - Print the export metadata record
//  quill slug <path> [--write]             - Print (or store) the slug derived from the title
//  quill set <path> <field> <value>        - Update one field in place
//  quill new [-o <file>]                   - Create a starter draft
//  quill generate-css [-o <file>]          - Print the baseline CSS used for HTML output
//  quill --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  quill inspect draft.json body-treeviz --extra-show-linum false

use quill_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use quill_babel::formats::json::{parse_draft, serialize_draft};
use quill_babel::{
    apply_generated_slug, derive_slug, export_json, with_field, BlogDraft, DraftField,
    ExportVariant, FormatRegistry, PreviewOptions,
};
use quill_config::{ExportVariantConfig, Loader, QuillConfig};
use std::collections::HashMap;
use std::fs;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Subcommand names; anything else in first position is treated as a `convert` input.
const SUBCOMMANDS: &[&str] = &[
    "inspect",
    "convert",
    "export",
    "slug",
    "set",
    "new",
    "generate-css",
    "help",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn draft_path_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Path to the draft file (JSON)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting, inspecting and editing blog drafts")
        .long_about(
            "quill is a command-line tool for working with blog draft files.\n\n\
            Commands:\n  \
            - convert: Render a draft as HTML, JSON metadata, tags or a body tree\n  \
            - inspect: View pipeline stages (blocks, anchors, TOC, preview)\n  \
            - export:  Print the CMS metadata record\n  \
            - slug:    Derive the URL slug from the title\n  \
            - set:     Update a single field\n  \
            - new:     Create a starter draft\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quill draft.json --to html -o post.html   # Render the preview page\n  \
            quill inspect draft.json                  # View the table of contents\n  \
            quill export draft.json --quick           # Quick-copy metadata\n  \
            quill slug draft.json --write             # Store the generated slug",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quill.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline details to stderr")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect pipeline stages of a draft")
                .long_about(
                    "View the body of a draft at different processing stages.\n\n\
                    Transforms:\n  \
                    - blocks-json:   classified lines\n  \
                    - anchors-json:  headings with their anchors\n  \
                    - toc-json:      table of contents (default)\n  \
                    - body-treeviz:  rendered body as a tree\n  \
                    - preview-json:  the full article preview\n  \
                    - slug:          slug derived from the title\n\n\
                    Examples:\n  \
                    quill inspect draft.json                 # Table of contents\n  \
                    quill inspect draft.json body-treeviz    # Body tree with line numbers",
                )
                .arg(draft_path_arg("path"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to the configured one ('toc-json')")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a draft to an output format (default command)")
                .long_about(
                    "Serialize a draft through one of the registered formats.\n\n\
                    Supported formats:\n  \
                    - html:       Standalone preview page (.html)\n  \
                    - json:       Full export metadata\n  \
                    - json-quick: Quick-copy export metadata\n  \
                    - tag:        XML-like dump of the preview\n  \
                    - treeviz:    Tree of the rendered body\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    quill convert draft.json --to html -o post.html\n  \
                    quill draft.json --to tag                    # 'convert' is optional",
                )
                .arg(draft_path_arg("input"))
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
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Print the export metadata record")
                .arg(draft_path_arg("path"))
                .arg(
                    Arg::new("quick")
                        .long("quick")
                        .help("Print the quick-copy record instead of the full one")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("slug")
                .about("Derive the URL slug from the draft title")
                .arg(draft_path_arg("path"))
                .arg(
                    Arg::new("write")
                        .long("write")
                        .help("Store the slug in the draft file instead of printing it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set one field of a draft file")
                .arg(draft_path_arg("path"))
                .arg(
                    Arg::new("field")
                        .help("Field name, as in the draft file (e.g. metaTitle)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("value")
                        .help("New value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(3),
                ),
        )
        .subcommand(
            Command::new("new")
                .about("Create a starter draft dated today")
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for HTML export")
                .long_about(
                    "Outputs the default baseline CSS used when converting to HTML.\n\n\
                    Use this as a starting point for custom styling. The output can be\n\
                    saved to a file and customized, then passed via --extra-css to the\n\
                    convert command to extend the default styles.",
                )
                .arg(output_arg()),
        )
}

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .cloned()
                .unwrap_or_else(|| config.inspect.default_transform.clone());
            handle_inspect_command(path, &transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");

            // Auto-detect --from if not provided
            let from = if let Some(f) = sub_matches.get_one::<String>("from") {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("export", sub_matches)) => {
            let path = required(sub_matches, "path");
            let variant = if sub_matches.get_flag("quick") {
                ExportVariant::Quick
            } else {
                config.export.variant.into()
            };
            handle_export_command(path, variant);
        }
        Some(("slug", sub_matches)) => {
            let path = required(sub_matches, "path");
            handle_slug_command(path, sub_matches.get_flag("write"));
        }
        Some(("set", sub_matches)) => {
            let path = required(sub_matches, "path");
            let field = required(sub_matches, "field");
            let value = required(sub_matches, "value");
            handle_set_command(path, field, value);
        }
        Some(("new", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_new_command(output, &config);
        }
        Some(("generate-css", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_generate_css_command(output);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Fetch an argument clap already enforces as required.
fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        })
}

fn read_draft(path: &str) -> BlogDraft {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    parse_draft(&source).unwrap_or_else(|e| {
        eprintln!("Parse error in '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_draft(path: &str, draft: &BlogDraft) {
    let text = serialize_draft(draft).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(Some(path), &text);
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::debug!(path, bytes = text.len(), "wrote output");
        }
        None => print!("{text}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let draft = read_draft(path);
    let preview: PreviewOptions = (&config.preview).into();

    let mut output = transforms::execute_transform(&draft, transform, extra_params, &preview)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });
    if !output.ends_with('\n') {
        output.push('\n');
    }

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let draft = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let mut format_options = match to {
        "html" => html_params_from_config(config),
        "tag" | "treeviz" => preview_params_from_config(config),
        _ => HashMap::new(),
    };
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&draft, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &result);
}

/// Handle the export command
fn handle_export_command(path: &str, variant: ExportVariant) {
    let draft = read_draft(path);
    let json = export_json(&draft, variant).unwrap_or_else(|e| {
        eprintln!("Export error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the slug command
fn handle_slug_command(path: &str, write: bool) {
    let draft = read_draft(path);

    if write {
        let updated = apply_generated_slug(&draft);
        write_draft(path, &updated);
        tracing::info!(slug = %updated.slug, path, "stored generated slug");
    } else {
        println!("{}", derive_slug(&draft.title));
    }
}

/// Handle the set command
fn handle_set_command(path: &str, field: &str, value: &str) {
    let field = DraftField::from_str(field).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let draft = read_draft(path);
    let updated = with_field(&draft, field, value);
    write_draft(path, &updated);
}

/// Handle the new command
fn handle_new_command(output: Option<&str>, config: &QuillConfig) {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let draft = config.draft.starter(&today);

    let text = serialize_draft(&draft).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(output, &text);
}

/// Handle the generate-css command
fn handle_generate_css_command(output: Option<&str>) {
    write_output(output, quill_babel::formats::get_default_css());
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        let description = transforms::describe_transform(transform_name).unwrap_or_default();
        println!("  {transform_name:<14}- {description}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> QuillConfig {
    let loader = Loader::new().with_optional_file("quill.toml");
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

fn apply_config_overrides(config: &mut QuillConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.convert.html.theme = raw;
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = Some(path);
    }

    if let Some(raw) = take_override(extra_params, &["placeholder"]) {
        config.preview.placeholder = raw;
    }
    if let Some(raw) = take_override(extra_params, &["untitled"]) {
        config.preview.untitled = raw;
    }
    if let Some(raw) = take_override(extra_params, &["uncategorized"]) {
        config.preview.uncategorized = raw;
    }
    if let Some(raw) = take_override(extra_params, &["anonymous-author", "anonymous_author"]) {
        config.preview.anonymous_author = raw;
    }

    if let Some(raw) = extra_params.remove("quick") {
        config.export.variant = if parse_bool_arg("quick", &raw) {
            ExportVariantConfig::Quick
        } else {
            ExportVariantConfig::Full
        };
    }
}

/// Fallback texts from `[preview]`, keyed the way the preview formats read them.
fn preview_params_from_config(config: &QuillConfig) -> HashMap<String, String> {
    let preview = &config.preview;
    HashMap::from([
        ("placeholder".to_string(), preview.placeholder.clone()),
        ("untitled".to_string(), preview.untitled.clone()),
        ("uncategorized".to_string(), preview.uncategorized.clone()),
        (
            "anonymous-author".to_string(),
            preview.anonymous_author.clone(),
        ),
    ])
}

/// Options handed to the html format, with the custom stylesheet read from disk.
fn html_params_from_config(config: &QuillConfig) -> HashMap<String, String> {
    let mut params = preview_params_from_config(config);
    params.insert("theme".to_string(), config.convert.html.theme.clone());

    if let Some(css_path) = &config.convert.html.custom_css {
        let css = fs::read_to_string(css_path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{css_path}': {e}");
            std::process::exit(1);
        });
        params.insert("custom-css".to_string(), css);
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
