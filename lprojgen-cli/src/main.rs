use std::{
    io::{IsTerminal, stderr},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser, Subcommand};
use lprojgen_cli::{
    Overrides,
    config::{Resolved, load_config, resolve},
    generate::{default_stringsdict_path, generate_stringsdict, generate_strings},
};
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,

    /// Config file (defaults to ./lprojgen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Flags shared by both generators.
#[derive(clap::Args, Debug)]
struct CommonArgs {
    /// JSON export of the translation terms
    #[arg(short, long)]
    input: PathBuf,

    /// Target language code, e.g. `fr` or `pt-BR`
    #[arg(short, long)]
    lang: Option<String>,

    /// Stamp generated files with the current date
    #[arg(long)]
    print_date: bool,

    /// Skip terms matching this regular expression
    #[arg(long, conflicts_with = "no_exclude")]
    exclude: Option<String>,

    /// Keep every term, including the ones matched by the default exclusion
    #[arg(long)]
    no_exclude: bool,

    /// Literal replacement applied to every translation, as KEY=VALUE (repeatable)
    #[arg(short, long = "substitution", value_name = "KEY=VALUE")]
    substitutions: Vec<String>,

    /// Export source mentioned in generated stringsdict files
    #[arg(long)]
    source: Option<String>,
}

impl CommonArgs {
    fn into_parts(self) -> (PathBuf, Overrides) {
        (
            self.input,
            Overrides {
                language: self.lang,
                print_date: self.print_date,
                exclude: self.exclude,
                no_exclude: self.no_exclude,
                source: self.source,
                substitutions: self.substitutions,
            },
        )
    }
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate .strings files, one per destination in the terms' context
    Strings {
        #[command(flatten)]
        common: CommonArgs,

        /// Directory the terms' context paths are resolved against
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Generate a .stringsdict file from the pluralized terms
    Stringsdict {
        #[command(flatten)]
        common: CommonArgs,

        /// Output file (defaults to <lang>.lproj/Localizable.stringsdict)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(stderr().is_terminal())
        .with_writer(stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn determine_log_level(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;

    match args.commands {
        Commands::Strings { common, root } => {
            let (input, overrides) = common.into_parts();
            let Resolved { language, options } = resolve(config, overrides)?;
            let language = language.ok_or("No language given; pass --lang or set `language`")?;
            generate_strings(&input, &language, &root, &options)?;
        }
        Commands::Stringsdict { common, output } => {
            let (input, overrides) = common.into_parts();
            let Resolved { language, options } = resolve(config, overrides)?;
            let output = match (output, language) {
                (Some(output), _) => output,
                (None, Some(language)) => default_stringsdict_path(&language),
                (None, None) => {
                    return Err("No output given; pass --output or --lang".to_string());
                }
            };
            generate_stringsdict(&input, &output, &options)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(determine_log_level(&args));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
