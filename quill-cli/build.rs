use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-json",
    "anchors-json",
    "toc-json",
    "body-treeviz",
    "preview-json",
    "slug",
];

fn draft_path() -> Arg {
    Arg::new("path")
        .help("Path to the draft file (JSON)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting, inspecting and editing blog drafts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a quill.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("inspect").arg(draft_path()).arg(
                Arg::new("transform")
                    .index(2)
                    .value_parser(clap::builder::PossibleValuesParser::new(
                        AVAILABLE_TRANSFORMS,
                    )),
            ),
        )
        .subcommand(
            Command::new("convert")
                .arg(draft_path())
                .arg(Arg::new("from").long("from"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(["html", "json", "json-quick", "tag", "treeviz"]),
                )
                .arg(output()),
        )
        .subcommand(
            Command::new("export")
                .arg(draft_path())
                .arg(Arg::new("quick").long("quick").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("slug")
                .arg(draft_path())
                .arg(Arg::new("write").long("write").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("set")
                .arg(draft_path())
                .arg(Arg::new("field").index(2))
                .arg(Arg::new("value").index(3)),
        )
        .subcommand(Command::new("new").arg(output()))
        .subcommand(Command::new("generate-css").arg(output()));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "quill", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "quill", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "quill", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
