// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raw transcription records as they come out of the decode step
#[allow(dead_code)] // Used by the record tests only
pub const TRANSCRIPTION_RECORDS: &str = r#"[
    {"filename": "cv-valid-dev/sample-000000.mp3", "generated_text": "be careful with your prognostications said the stranger",
     "duration": 5.06, "age": null, "gender": null, "accent": null},
    {"filename": "cv-valid-dev/sample-000001.mp3", "generated_text": "then why on earth did he come",
     "duration": 2.42, "age": "twenties", "gender": "male", "accent": "england"},
    {"filename": "cv-valid-dev/sample-000002.mp3", "generated_text": null,
     "duration": 3.1, "age": "fifties", "gender": "female", "accent": "us"},
    {"filename": "cv-valid-dev/sample-000003.mp3", "generated_text": "i felt i had to",
     "duration": 1.8, "age": "thirties", "gender": "", "accent": "canada"}
]"#;

/// Rows shaped like `cv-valid-dev.csv` after the decode step
///
/// The third row has no transcription; the first has no accent.
#[allow(dead_code)] // Used by the record tests only
pub const CV_VALID_DEV_CSV: &str = "\
filename,text,up_votes,down_votes,age,gender,accent,duration,generated_text
cv-valid-dev/sample-000000.mp3,be careful with your prognostications said the stranger,1,0,,,,5.06,be careful with your prognostications said the stranger
cv-valid-dev/sample-000001.mp3,then why on earth did he come,2,0,twenties,male,england,2.42,then why on earth did he come
cv-valid-dev/sample-000002.mp3,i felt i had to,1,1,fifties,female,us,3.1,
";

/// A config file written to a temporary directory
#[allow(dead_code)] // Not every test binary writes config files
pub struct ConfigFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFile {
    /// Write `contents` as `config.toml` in a fresh temp dir
    #[allow(dead_code)]
    pub fn new(contents: &str) -> Self {
        Self::named("config.toml", contents)
    }

    /// Write `contents` under `name` in a fresh temp dir
    #[allow(dead_code)]
    pub fn named(name: &str, contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        Self { dir, path }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
