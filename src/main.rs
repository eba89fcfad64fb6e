use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use speech_buckets::{run_session, SessionConfig};

#[derive(Parser)]
#[command(name = "speech-buckets")]
#[command(
    author,
    version,
    about = "Organize speech transcriptions into separate files by speaker",
    long_about = None
)]
struct Cli {
    /// The transcript file to process, or a directory of transcripts to
    /// process in one batch
    #[arg(value_name = "FILE(S)")]
    file: PathBuf,

    /// Directory to write the bucket files to [default: "buckets" in the
    /// same folder as the input]
    #[arg(short, long, value_name = "DIRECTORY")]
    output_dir: Option<PathBuf>,

    /// A string that the output files will be prefixed with
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = "")]
    output_prefix: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = SessionConfig {
        output_dir: cli.output_dir,
        output_prefix: cli.output_prefix,
    };

    let session = run_session(&cli.file, &config)
        .with_context(|| format!("Failed to process {:?}", cli.file))?;

    info!(
        "Finished! {} files processed; {} buckets created",
        session.transcripts_processed, session.buckets_created
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
