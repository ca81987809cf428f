use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::core::geometry::NormalizedBox;
use crate::core::model::Observation;
use crate::error::ScanError;
use crate::loader::LoadedImage;
use crate::recognize::{RecognitionMode, TextRecognizer};

/// Raw observation as emitted by the engine process. `bbox` is
/// `[x, y, width, height]` in unit-square coordinates, origin bottom-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireObservation {
    pub text: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub bbox: Option<[f64; 4]>,
}

fn default_confidence() -> f64 {
    0.5
}

impl From<WireObservation> for Observation {
    fn from(wire: WireObservation) -> Self {
        Self {
            text: wire.text,
            confidence: wire.confidence.clamp(0.0, 1.0),
            bbox: wire.bbox.map(|[x, y, w, h]| NormalizedBox::new(x, y, w, h)),
        }
    }
}

/// Subprocess bridge to the recognition engine: spawns the engine command
/// with the image path and recognition level, and parses the JSON payload it
/// prints to stdout.
#[derive(Debug, Clone)]
pub struct RecognizerBridge {
    command: String,
    script_path: PathBuf,
}

impl RecognizerBridge {
    pub fn new() -> Self {
        Self {
            command: "python3".to_string(),
            script_path: PathBuf::from("bridge/recognize.py"),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_script(mut self, script_path: PathBuf) -> Self {
        self.script_path = script_path;
        self
    }
}

impl Default for RecognizerBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for RecognizerBridge {
    fn recognize(
        &self,
        image: &LoadedImage,
        mode: RecognitionMode,
    ) -> Result<Vec<Observation>, ScanError> {
        let output = Command::new(&self.command)
            .arg(&self.script_path)
            .arg("--image")
            .arg(&image.path)
            .arg("--level")
            .arg(mode.as_str())
            .output()
            .map_err(|e| {
                ScanError::Recognition(format!("failed to invoke recognition engine: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Recognition(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let wire: Vec<WireObservation> = serde_json::from_str(&stdout).map_err(|e| {
            ScanError::Recognition(format!("failed to parse engine response: {e}"))
        })?;

        Ok(wire.into_iter().map(Observation::from).collect())
    }
}
