use clap::Parser;
use finswap::engine::abbreviations::load_abbreviations;
use finswap::{repl, FinancialAmountTransformation, MarkerSet, TransformConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finswap")]
#[command(version)]
#[command(about = "Perturb financial amounts in text", long_about = None)]
struct Cli {
    /// Sentence to transform (starts an interactive session when omitted)
    text: Vec<String>,

    /// Seed for the random source
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Requested number of outputs (one is always produced)
    #[arg(short = 'n', long, default_value_t = 1)]
    outputs: usize,

    /// Newline-delimited currency abbreviation list replacing the bundled one
    #[arg(short, long)]
    abbreviations: Option<PathBuf>,

    /// Verbose output (show detected spans and currency decisions)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let markers = match &cli.abbreviations {
        Some(path) => MarkerSet::new(load_abbreviations(path)?),
        None => MarkerSet::default(),
    };

    let config = TransformConfig {
        seed: cli.seed,
        max_outputs: cli.outputs,
        ..TransformConfig::default()
    };
    let mut transformation = FinancialAmountTransformation::with_markers(config, markers);

    if cli.text.is_empty() {
        let stdin = io::stdin();
        repl::run(stdin.lock(), io::stdout(), &mut transformation)?;
    } else {
        for output in transformation.generate(&cli.text.join(" ")) {
            println!("{}", output);
        }
    }

    Ok(())
}
