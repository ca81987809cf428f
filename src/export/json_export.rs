use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::TextCandidate;
use crate::error::ScanError;
use crate::export::Exporter;

/// Output path for an input image: same directory, extension replaced by
/// `.json`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Writes the candidate list as a single UTF-8 JSON array. The bytes are
/// staged in a temp file next to the destination and renamed into place, so
/// the output either appears whole or not at all.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_path: PathBuf,
}

impl JsonExporter {
    pub fn new(out_path: PathBuf) -> Self {
        Self { out_path }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, candidates: &[TextCandidate]) -> Result<(), ScanError> {
        let data =
            serde_json::to_string_pretty(candidates).map_err(|source| ScanError::Write {
                path: self.out_path.clone(),
                source: source.into(),
            })?;

        let staging = self.out_path.with_extension("json.tmp");
        fs::write(&staging, data.as_bytes()).map_err(|source| ScanError::Write {
            path: self.out_path.clone(),
            source,
        })?;

        fs::rename(&staging, &self.out_path).map_err(|source| {
            // Don't leave the staging file behind on a failed rename.
            let _ = fs::remove_file(&staging);
            ScanError::Write {
                path: self.out_path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use crate::core::geometry::BoundingBox;

    fn temp_output_dir(prefix: &str) -> PathBuf {
        let mut out = std::env::temp_dir();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let pid = std::process::id();
        out.push(format!("{prefix}-{pid}-{now}"));
        out
    }

    #[test]
    fn replaces_input_extension() {
        assert_eq!(
            output_path(Path::new("/photos/receipt.png")),
            PathBuf::from("/photos/receipt.json")
        );
        assert_eq!(
            output_path(Path::new("scan.jpeg")),
            PathBuf::from("scan.json")
        );
    }

    #[test]
    fn writes_candidates_as_json_array() -> anyhow::Result<()> {
        let dir = temp_output_dir("textgrab-export");
        fs::create_dir_all(&dir)?;
        let out = dir.join("result.json");

        let candidates = vec![TextCandidate {
            text: "Hello".to_string(),
            confidence: 0.97,
            bbox: BoundingBox::new(12.0, 34.0, 80.0, 20.0),
        }];

        JsonExporter::new(out.clone()).export(&candidates)?;

        let contents = fs::read_to_string(&out)?;
        let parsed: Vec<TextCandidate> = serde_json::from_str(&contents)?;
        assert_eq!(parsed, candidates);

        let _ = fs::remove_dir_all(&dir);
        Ok(())
    }

    #[test]
    fn empty_result_set_writes_empty_array() -> anyhow::Result<()> {
        let dir = temp_output_dir("textgrab-export-empty");
        fs::create_dir_all(&dir)?;
        let out = dir.join("result.json");

        JsonExporter::new(out.clone()).export(&[])?;

        let contents = fs::read_to_string(&out)?;
        assert_eq!(contents.trim(), "[]");

        let _ = fs::remove_dir_all(&dir);
        Ok(())
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let out = PathBuf::from("/nonexistent-dir/result.json");
        let err = JsonExporter::new(out).export(&[]).unwrap_err();
        assert!(matches!(err, ScanError::Write { .. }));
    }

    #[test]
    fn failed_rename_cleans_up_staging_file() -> anyhow::Result<()> {
        let dir = temp_output_dir("textgrab-export-rename");
        fs::create_dir_all(&dir)?;

        // A directory squatting on the destination makes the rename fail
        // after the staging write has succeeded.
        let out = dir.join("result.json");
        fs::create_dir_all(&out)?;

        let err = JsonExporter::new(out.clone()).export(&[]).unwrap_err();
        assert!(matches!(err, ScanError::Write { .. }));
        assert!(!dir.join("result.json.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
        Ok(())
    }
}
