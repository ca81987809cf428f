use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::model::TextCandidate;
use crate::export::{output_path, Exporter, JsonExporter};
use crate::loader::load_image;
use crate::recognize::{RecognitionMode, TextRecognizer};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input: PathBuf,
    pub mode: RecognitionMode,
}

impl ScanConfig {
    pub fn new(input: PathBuf, mode: RecognitionMode) -> Self {
        Self { input, mode }
    }

    pub fn output_path(&self) -> PathBuf {
        output_path(&self.input)
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct ScanReport {
    pub output: PathBuf,
    pub candidates: usize,
}

/// Load the input, run the recognizer, and map every observation into pixel
/// coordinates. Candidates keep the order the engine returned them in; no
/// deduplication of overlapping regions.
pub fn scan_image(
    config: &ScanConfig,
    recognizer: &dyn TextRecognizer,
) -> Result<Vec<TextCandidate>> {
    let image = load_image(&config.input)?;
    let observations = recognizer
        .recognize(&image, config.mode)
        .with_context(|| format!("recognition failed for {}", config.input.display()))?;

    Ok(observations
        .into_iter()
        .map(|obs| TextCandidate::from_observation(obs, image.width, image.height))
        .collect())
}

/// Full run: scan the input and persist the candidates next to it. A write
/// failure is fatal like every other failure; the run never reports success
/// without the output file in place.
pub fn run(config: &ScanConfig, recognizer: &dyn TextRecognizer) -> Result<ScanReport> {
    let candidates = scan_image(config, recognizer)?;
    let output = config.output_path();

    JsonExporter::new(output.clone())
        .export(&candidates)
        .with_context(|| format!("failed to export to: {}", output.display()))?;

    Ok(ScanReport {
        output,
        candidates: candidates.len(),
    })
}
