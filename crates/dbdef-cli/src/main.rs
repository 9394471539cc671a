mod check;
mod compile;

use anyhow::Result;
use clap::Parser;
use dbdef::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dbdef")]
#[command(about = "dbdef - Database definition compiler")]
#[command(version)]
struct Cli {
    /// Log more; repeat for debug output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Compile definitions and write every output requested by the makefile
    Compile(compile::CompileCommand),

    /// Parse definitions and list them without writing any output
    Check(check::CheckCommand),
}

/// Where the compiler reads from and writes to.
#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Directory holding the makefile, mapping and definition files
    #[arg(short, long, default_value = ".")]
    source: PathBuf,

    /// Root directory for generated files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Makefile name, relative to the source directory
    #[arg(short, long, default_value = dbdef::DEFAULT_MAKEFILE)]
    makefile: String,
}

impl SourceArgs {
    fn config(&self) -> Config {
        Config::new()
            .source_dir(&self.source)
            .output_dir(&self.output)
            .makefile(&self.makefile)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile(cmd) => cmd.run(),
        Command::Check(cmd) => cmd.run(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
