//! Huffman coding demo
//!
//! Builds an engine from a text, prints its code assignment, then encodes the
//! text and decodes it again.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in sample text
//! huffman_coder
//!
//! # Your own text, report as JSON
//! huffman_coder "abracadabra" --json
//!
//! # Text from a file, discarding trailing partial paths
//! huffman_coder --file notes.txt --lenient --log-level debug
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use huffman_coder::{Engine, EngineConfig};

const SAMPLE_TEXT: &str = "RA RARARARA SSSRARASA RARAaa";

#[derive(Parser, Debug)]
#[command(name = "huffman_coder")]
#[command(version)]
#[command(about = "Huffman coding round-trip demo", long_about = None)]
struct Args {
    /// Text to build the engine from and round-trip
    #[arg(default_value = SAMPLE_TEXT, conflicts_with = "file")]
    text: String,

    /// Read the text from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Discard a trailing partial path instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print the code assignment as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = if args.lenient {
        EngineConfig::lenient()
    } else {
        EngineConfig::default()
    };

    let text = match &args.file {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            info!(path = %path.display(), bytes = bytes.len(), "read input file");
            std::str::from_utf8(&bytes)
                .map_err(huffman_coder::Error::from)?
                .to_owned()
        }
        None => args.text,
    };

    let engine = Engine::with_config(&text, config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.report())?);
    } else {
        print!("{}", engine.describe());
    }

    let encoded = engine.encode(&text)?;
    println!("{encoded}");
    let decoded = engine.decode(&encoded)?;
    println!("{decoded}");

    info!(
        chars = text.chars().count(),
        bits = encoded.len(),
        "round trip complete"
    );
    if decoded != text {
        return Err("decoded text does not match the input".into());
    }
    Ok(())
}
