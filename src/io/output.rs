use std::fs::File;
use std::path::{Path, PathBuf};

use crate::bucket::SinkProvider;
use crate::error::BucketError;

/// Where bucket files for this run go: the configured directory if one
/// was given, otherwise "buckets" beside the input.
pub fn resolve_output_dir(target: &Path, configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    let input_dir = if target.is_dir() {
        target
    } else {
        target.parent().unwrap_or(Path::new(""))
    };
    input_dir.join("buckets")
}

/// Opens bucket files for one transcript.
///
/// Buckets are named `<PREFIX><TRANSCRIPT>_<SPEAKER>.txt` inside the output
/// directory, where `<TRANSCRIPT>` is the transcript file name without its
/// extension. Files are truncated on open, so re-running a transcript into
/// the same directory rewrites its buckets from scratch.
pub struct FileSinkProvider {
    output_dir: PathBuf,
    stem: String,
    prefix: String,
}

impl FileSinkProvider {
    /// Build a provider for one transcript file writing into `output_dir`.
    pub fn for_transcript(output_dir: &Path, transcript: &Path, prefix: &str) -> Self {
        let stem = transcript
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        Self {
            output_dir: output_dir.to_path_buf(),
            stem,
            prefix: prefix.to_string(),
        }
    }

    /// The path a speaker's bucket will be written to.
    pub fn bucket_path(&self, speaker: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}_{}.txt", self.prefix, self.stem, speaker))
    }
}

impl SinkProvider for FileSinkProvider {
    type Sink = File;

    fn open(&mut self, speaker: &str) -> Result<File, BucketError> {
        let path = self.bucket_path(speaker);
        File::create(&path).map_err(|source| BucketError::SinkCreate { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_dir() {
        assert_eq!(
            resolve_output_dir(Path::new("/in/speech.txt"), Some(Path::new("/elsewhere"))),
            Path::new("/elsewhere")
        );
        assert_eq!(
            resolve_output_dir(Path::new("/in/speech.txt"), None),
            Path::new("/in/buckets")
        );
        assert_eq!(
            resolve_output_dir(Path::new("speech.txt"), None),
            Path::new("buckets")
        );
    }

    #[test]
    fn test_bucket_naming() {
        let provider = FileSinkProvider::for_transcript(
            Path::new("/out"),
            Path::new("/in/debate.txt"),
            "run1-",
        );
        assert_eq!(
            provider.bucket_path("SMITH"),
            Path::new("/out/run1-debate_SMITH.txt")
        );
    }

    #[test]
    fn test_bucket_naming_without_extension() {
        let provider =
            FileSinkProvider::for_transcript(Path::new("/out"), Path::new("/in/debate"), "");
        assert_eq!(
            provider.bucket_path("JONES"),
            Path::new("/out/debate_JONES.txt")
        );
    }

    #[test]
    fn test_open_truncates_existing_bucket() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let mut provider =
            FileSinkProvider::for_transcript(dir.path(), Path::new("speech.txt"), "");

        let mut sink = provider.open("SMITH").unwrap();
        write!(sink, "old contents\r\n").unwrap();
        drop(sink);

        let sink = provider.open("SMITH").unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(provider.bucket_path("SMITH")).unwrap();
        assert_eq!(contents, "");
    }
}
