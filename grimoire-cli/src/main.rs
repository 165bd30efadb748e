//! Command-line interface for grimoire
//! Parses rulebook text files into records and writes them as TSV, JSON or YAML.
//!
//! Usage:
//!   grimoire `<files>...` [--type `<slug>`] [--output `<dir>`] [--format `<name>`]...
//!   grimoire --config `<file>`                 - Take sources and outputs from a config file
//!   grimoire `<files>...` --stdout --format json - Print instead of writing files
//!   grimoire --list-formats

mod inputs;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use grimoire_config::{GrimoireConfig, Loader, OutputConfig};
use grimoire_export::{write_outputs, FormatRegistry, JsonFormat, TsvFormat};
use grimoire_parser::rulebook::DocType;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("grimoire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse rulebook text into structured records")
        .arg(
            Arg::new("files")
                .help("Rulebook text files, in priority order (overrides configured sources)")
                .value_parser(value_parser!(PathBuf))
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .help("Document type of every given file (e.g. 'spells', 'objects-of-power')")
                .value_parser(value_parser!(DocType))
                .requires("files"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output directory"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format; repeat for several (see --list-formats)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the records instead of writing the output tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser progress and skipped lines")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    init_logging(&config.logging.level);
    let registry = build_registry(&config.output);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let doc_type = matches.get_one::<DocType>("type").copied();
    let sources = inputs::resolve_sources(files, doc_type, &config.input.sources);
    if sources.is_empty() {
        bail!("no input files given (pass FILES or set [input] sources in a config file)");
    }

    let corpus = inputs::load_corpus(&sources).context("failed to parse input")?;
    tracing::info!(
        sources = sources.len(),
        documents = corpus.len(),
        entries = corpus.entry_count(),
        "parsed rulebook"
    );

    if matches.get_flag("stdout") {
        for format in &config.output.formats {
            let text = registry
                .serialize_corpus(&corpus, format)
                .with_context(|| format!("failed to render {}", format))?;
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
        }
        return Ok(());
    }

    let written = write_outputs(
        &corpus,
        &config.output.dir,
        &registry,
        &config.output.formats,
    )
    .context("failed to write outputs")?;
    tracing::info!(files = written.len(), dir = %config.output.dir.display(), "done");
    Ok(())
}

/// Defaults, then the --config file, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<GrimoireConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dir) = matches.get_one::<String>("output") {
        loader = loader.set_override("output.dir", dir.as_str())?;
    }
    if let Some(formats) = matches.get_many::<String>("format") {
        let formats: Vec<String> = formats.cloned().collect();
        loader = loader.set_override("output.formats", formats)?;
    }
    if matches.get_flag("verbose") {
        loader = loader.set_override("logging.level", "debug")?;
    }
    loader.build().context("failed to load configuration")
}

/// RUST_LOG wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_registry(output: &OutputConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TsvFormat::new(output.tsv.line_break_separator.as_str()));
    registry.register(JsonFormat::new(output.json.pretty));
    registry
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {} (.{})", name, format.extension());
            println!("    {}", format.description());
            println!();
        }
    }
}
