use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs, reduced to what completions need.
// Build scripts can't reach src/ modules.
const FORMATS: &[&str] = &["markdown", "html"];

fn path_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("translatable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and inspect translatable Markdown documents")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .arg(path_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("blocks").arg(path_arg("input")))
        .subcommand(Command::new("join").arg(path_arg("input")))
        .subcommand(
            Command::new("display").arg(path_arg("input")).arg(
                Arg::new("decode")
                    .long("decode")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(Command::new("script").arg(path_arg("input")))
        .subcommand(
            Command::new("string")
                .arg(Arg::new("id").required(true).index(1))
                .arg(Arg::new("locale").long("locale")),
        );

    generate_to(Bash, &mut cmd, "translatable", &outdir)?;
    generate_to(Zsh, &mut cmd, "translatable", &outdir)?;
    generate_to(Fish, &mut cmd, "translatable", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
