use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dijkstra_cli::output::OutputFormat;
use dijkstra_cli::run::{handle_run, RunArgs};
use dijkstra_cli::session::Session;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Single-source shortest paths over a small undirected graph"
)]
struct Cli {
    /// File the accepted edges are recorded to.
    #[arg(long, default_value = "edges.txt")]
    edges_file: PathBuf,

    /// File the shortest distances are written to.
    #[arg(long, default_value = "output.txt")]
    output_file: PathBuf,

    /// Read answers from a file instead of standard input.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Console presentation of the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log engine decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = RunArgs {
        edges_file: cli.edges_file,
        output_file: cli.output_file,
        format: cli.format,
    };

    let stdout = io::stdout().lock();
    let outcome = match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            handle_run(&args, &mut Session::new(BufReader::new(file), stdout))?
        }
        None => handle_run(&args, &mut Session::new(io::stdin().lock(), stdout))?,
    };

    Ok(ExitCode::from(outcome.exit_code()))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
