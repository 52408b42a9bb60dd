mod definitions;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use crate::definitions::{Definitions, write_starter};
use crate::report::ParseReport;

#[derive(Parser)]
#[command(name = "optkit")]
#[command(version, about = "Parse argument vectors against getopt-style option definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter optkit.json
    Init(InitArgs),

    /// Parse the arguments after `--` against the definitions file
    Parse(ParseArgs),

    /// Print usage text for the definitions file
    Usage(UsageArgs),
}

#[derive(Parser)]
struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,
}

#[derive(Parser)]
struct ParseArgs {
    /// Path to the definitions file
    #[arg(short, long, default_value = "optkit.json", value_name = "FILE")]
    definitions: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Arguments to parse
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Parser)]
struct UsageArgs {
    /// Path to the definitions file
    #[arg(short, long, default_value = "optkit.json", value_name = "FILE")]
    definitions: PathBuf,

    /// Command name for the usage line (overrides the definitions file)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => init(args),
        Commands::Parse(args) => parse_command(args),
        Commands::Usage(args) => usage(args),
    }
}

fn init(args: InitArgs) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));
    let path = write_starter(&dir)?;
    eprintln!("Created: {}", path.display());
    Ok(())
}

fn parse_command(args: ParseArgs) -> Result<()> {
    tracing::debug!("executing parse command");

    let definitions = Definitions::from_file(&args.definitions)?;
    let parser = definitions.parser()?;

    let parsed = match parser.parse(&args.args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{}", err.description());
            std::process::exit(1);
        }
    };

    if parsed.help_requested() {
        print!("{}", render_help(definitions.command_name(), &parser));
        return Ok(());
    }

    let report = ParseReport::from_parsed(&parsed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.to_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

fn usage(args: UsageArgs) -> Result<()> {
    tracing::debug!("executing usage command");

    let definitions = Definitions::from_file(&args.definitions)?;
    let parser = definitions.parser()?;
    let name = args
        .name
        .as_deref()
        .unwrap_or_else(|| definitions.command_name());

    print!("{}", render_help(name, &parser));
    Ok(())
}

fn render_help(name: &str, parser: &optkit::Parser) -> String {
    format!(
        "{}\n\n{}",
        parser.help_text(name),
        optkit::options_table(parser.definitions())
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
