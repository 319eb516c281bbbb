use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use frinkiac::Frinkiac;
use miette::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::Level;

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", Args::command().render_usage());
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level(args.verbose))
        .init();

    let mut options = Frinkiac::load_options(args.config.as_deref())?;

    if let Some(base_url) = args.base_url {
        options.base_url = base_url;
    }
    if args.timeout.is_some() {
        options.timeout = args.timeout;
    }

    let frinkiac = Frinkiac::new(options)?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let markdown = frinkiac.meme(&args.query, args.caption.as_deref(), rng.as_mut())?;

    println!("{markdown}");

    Ok(())
}

fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Find a Simpsons frame matching a quote and print it as a markdown image.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Quote to search for.
    #[arg(allow_hyphen_values = true)]
    query: String,

    /// Caption to draw over the image.
    #[arg(allow_hyphen_values = true)]
    caption: Option<String>,

    /// Custom location of configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root URL of the service.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Give up on the search after this many seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Seed for picking among the results, to get the same frame every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more (can be used repeatedly).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
