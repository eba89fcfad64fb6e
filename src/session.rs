use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::bucket::process_transcript;
use crate::error::BucketError;
use crate::io::input::{discover_transcripts, read_transcript_lines};
use crate::io::output::{resolve_output_dir, FileSinkProvider};

/// Options for a processing run, parsed at the CLI boundary
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Where bucket files go; defaults to "buckets" beside the input
    pub output_dir: Option<PathBuf>,
    /// Prepended to every bucket file name
    pub output_prefix: String,
}

/// Aggregate counters for one run across one or more transcripts
#[derive(Debug, Default)]
pub struct Session {
    pub transcripts_processed: usize,
    pub buckets_created: usize,
}

/// Process a transcript file, or every file in a transcript directory,
/// into per-speaker buckets.
///
/// A transcript that cannot be read, or whose buckets cannot be written,
/// is reported and skipped; the rest of the batch still runs. Only a
/// missing input target fails the run outright.
pub fn run_session(target: &Path, config: &SessionConfig) -> Result<Session, BucketError> {
    let transcripts = discover_transcripts(target)?;
    let output_dir = resolve_output_dir(target, config.output_dir.as_deref());

    if !output_dir.exists() {
        info!("Creating output directory {:?}", output_dir);
        std::fs::create_dir_all(&output_dir).map_err(|source| BucketError::SinkCreate {
            path: output_dir.clone(),
            source,
        })?;
    }

    if target.is_dir() {
        info!("Processing files in {:?}", target);
    }

    let mut session = Session::default();

    for transcript in &transcripts {
        let name = transcript
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        info!("Processing file {}", name);

        let lines = match read_transcript_lines(transcript) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("Skipping {}: {:#}", name, anyhow::Error::new(err));
                continue;
            }
        };

        let mut sinks =
            FileSinkProvider::for_transcript(&output_dir, transcript, &config.output_prefix);
        match process_transcript(lines, &mut sinks) {
            Ok(report) => {
                for warning in &report.warnings {
                    warn!(
                        "{}: missed speaker for line {}: {}",
                        name, warning.line_number, warning.text
                    );
                }
                session.transcripts_processed += 1;
                session.buckets_created += report.buckets_created;
            }
            Err(err) => {
                // Partial buckets may be on disk; the transcript does not
                // count as processed
                error!("Abandoning {}: {:#}", name, anyhow::Error::new(err));
            }
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_transcript(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_single_file_run() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = write_transcript(
            dir.path(),
            "debate.txt",
            "SMITH: Hello.\nNice to see you.\nJONES: Hi Smith.\n",
        );

        let session = run_session(&transcript, &SessionConfig::default()).unwrap();

        assert_eq!(session.transcripts_processed, 1);
        assert_eq!(session.buckets_created, 2);

        let buckets = dir.path().join("buckets");
        let smith = std::fs::read_to_string(buckets.join("debate_SMITH.txt")).unwrap();
        let jones = std::fs::read_to_string(buckets.join("debate_JONES.txt")).unwrap();
        assert_eq!(smith, "Hello.\r\nNice to see you.\r\n");
        assert_eq!(jones, "Hi Smith.\r\n");
    }

    #[test]
    fn test_directory_run_with_prefix_and_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_transcript(dir.path(), "one.txt", "SMITH: A.\n");
        write_transcript(dir.path(), "two.txt", "JONES: B.\nSMITH: C.\n");

        let config = SessionConfig {
            output_dir: Some(out.path().to_path_buf()),
            output_prefix: "x-".to_string(),
        };
        let session = run_session(dir.path(), &config).unwrap();

        assert_eq!(session.transcripts_processed, 2);
        assert_eq!(session.buckets_created, 3);
        assert!(out.path().join("x-one_SMITH.txt").exists());
        assert!(out.path().join("x-two_JONES.txt").exists());
        assert!(out.path().join("x-two_SMITH.txt").exists());
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let result = run_session(Path::new("/no/such/file"), &SessionConfig::default());
        assert!(matches!(result, Err(BucketError::SourceNotFound(_))));
    }

    #[test]
    fn test_rerun_produces_identical_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = write_transcript(
            dir.path(),
            "speech.txt",
            "SMITH: Hello.\n[APPLAUSE]\nStill talking.\n",
        );

        run_session(&transcript, &SessionConfig::default()).unwrap();
        let bucket = dir.path().join("buckets").join("speech_SMITH.txt");
        let first = std::fs::read(&bucket).unwrap();

        run_session(&transcript, &SessionConfig::default()).unwrap();
        let second = std::fs::read(&bucket).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_transcript_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_transcript(dir.path(), "aaa.txt", "SMITH: Hi.\n");
        write_transcript(dir.path(), "bbb.txt", "JONES: Hello.\n");
        // A directory squatting on aaa's bucket path makes its sink fail,
        // abandoning that transcript
        std::fs::create_dir(out.path().join("aaa_SMITH.txt")).unwrap();

        let config = SessionConfig {
            output_dir: Some(out.path().to_path_buf()),
            output_prefix: String::new(),
        };
        let session = run_session(dir.path(), &config).unwrap();

        assert_eq!(session.transcripts_processed, 1);
        assert_eq!(session.buckets_created, 1);
        let jones = std::fs::read_to_string(out.path().join("bbb_JONES.txt")).unwrap();
        assert_eq!(jones, "Hello.\r\n");
    }

    #[test]
    fn test_unreadable_transcript_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_transcript(dir.path(), "good.txt", "SMITH: Hi.\n");
        // Invalid UTF-8 fails read_to_string
        std::fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let session = run_session(dir.path(), &SessionConfig::default()).unwrap();

        assert_eq!(session.transcripts_processed, 1);
        assert_eq!(session.buckets_created, 1);
    }
}
