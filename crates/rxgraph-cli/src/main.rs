use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use rxgraph::{GraphvizOptions, RenderOptions, RxgraphOptions, Settings, StoreOptions, run_main};
use rxgraph_error::{ErrorFamily, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rxgraph",
    about = "rxgraph: draw the neighbourhood of an RxNorm concept",
    version
)]
pub struct Cli {
    /// RXCUI of the root concept (or an NDC code with --ndc)
    #[arg(value_name = "IDENTIFIER")]
    identifier: String,

    /// Treat IDENTIFIER as an NDC code and start from its RXCUI
    #[arg(long, default_value_t = false)]
    ndc: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    store: StoreOptions,

    #[command(flatten)]
    render: RenderOptions,

    #[command(flatten)]
    graphviz: GraphvizOptions,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Warnings (degraded lookups) stay visible without RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let opts = RxgraphOptions::resolve(
        args.identifier,
        args.ndc,
        &args.render,
        &args.store,
        &args.graphviz,
        &settings,
    )?;

    if let Some(document) = run_main(&opts)? {
        print!("{document}");
    } else {
        tracing::info!(path = %opts.renderer.output().display(), "output written");
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            match e.family() {
                ErrorFamily::Configuration => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
