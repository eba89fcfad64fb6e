use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while splitting transcripts into buckets
#[derive(Error, Debug)]
pub enum BucketError {
    /// The input target does not exist; nothing is processed
    #[error("input {0:?} does not exist")]
    SourceNotFound(PathBuf),

    /// A transcript could not be opened or read; it is skipped
    #[error("failed to read transcript {path:?}")]
    TranscriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bucket file could not be created
    #[error("failed to create bucket file {path:?}")]
    SinkCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a bucket failed; the transcript is abandoned rather than
    /// left looking complete with lines silently missing
    #[error("failed to write bucket for speaker {speaker} at line {line_number}")]
    SinkWrite {
        speaker: String,
        line_number: usize,
        #[source]
        source: std::io::Error,
    },
}
