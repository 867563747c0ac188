//! pcm_convert - convert a WAV file to another channel layout or bit depth
//!
//! The sample rate is carried over unchanged; no resampling is done.

use clap::Parser;
use pcm_convert::{ConvertConfig, TargetFormat, read_wav_file, write_wav_file};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pcm_convert", version, about)]
struct Cli {
    /// Input WAV file (integer PCM)
    input: PathBuf,

    /// Output WAV file
    output: PathBuf,

    /// Target channel count
    #[arg(short, long)]
    channels: Option<u16>,

    /// Target bits per sample
    #[arg(short, long)]
    bits: Option<u16>,

    /// RON or JSON file with a `target` section; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file_target = match &cli.config {
        Some(path) => ConvertConfig::load(path)?.target,
        None => TargetFormat::default(),
    };
    let target = file_target.overridden_by(TargetFormat {
        channels: cli.channels,
        bits_per_sample: cli.bits,
    });

    let mut buffer = read_wav_file(&cli.input)?;
    let source = buffer.format();
    let target = target.resolve(source)?;

    buffer.convert_in_place(target)?;
    write_wav_file(&buffer, &cli.output)?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        "{} -> {} ({} frames)",
        source,
        target,
        buffer.frame_count()
    );
    Ok(())
}
