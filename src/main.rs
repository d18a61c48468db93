use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use huffpack::config::{DEFAULT_BIN_OUTPUT, DEFAULT_TEXT_OUTPUT};
use huffpack::{compress_file, CompressConfig};

/// Compress a file with a static Huffman code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to compress.
    input: PathBuf,

    /// Where to write the packed bitstream.
    #[arg(long, env = "HUFFPACK_BIN_OUTPUT", default_value = DEFAULT_BIN_OUTPUT)]
    bin_output: PathBuf,

    /// Where to write the bitstream as ASCII 0/1 characters.
    #[arg(long, env = "HUFFPACK_TEXT_OUTPUT", default_value = DEFAULT_TEXT_OUTPUT)]
    text_output: PathBuf,

    /// Skip the ASCII bitstream.
    #[arg(long)]
    no_text: bool,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> CompressConfig {
        CompressConfig {
            bin_output: self.bin_output.clone(),
            text_output: (!self.no_text).then(|| self.text_output.clone()),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = compress_file(&cli.input, &cli.config())?;
    report.reduction_percent()?;
    println!("{}", report);
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            let prog = std::env::args().next().unwrap_or_else(|| "huffpack".into());
            println!("Usage: {} <input_file>", prog);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
