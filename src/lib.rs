pub mod bucket;
pub mod classify;
pub mod error;
pub mod io;
pub mod session;

pub use bucket::{process_transcript, SinkProvider, TranscriptReport, Warning};
pub use classify::{classify_line, is_speaker_name, Classification};
pub use error::BucketError;
pub use io::{discover_transcripts, read_transcript_lines, FileSinkProvider};
pub use session::{run_session, Session, SessionConfig};
