pub mod bridge;

pub use bridge::RecognizerBridge;

use crate::core::model::Observation;
use crate::error::ScanError;
use crate::loader::LoadedImage;

/// Speed/accuracy trade-off forwarded to the recognition engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecognitionMode {
    Fast,
    #[default]
    Accurate,
}

impl RecognitionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Accurate => "accurate",
        }
    }
}

/// The external text-recognition engine. Implementations block until the
/// engine has finished; the pipeline does nothing concurrently.
pub trait TextRecognizer {
    fn recognize(
        &self,
        image: &LoadedImage,
        mode: RecognitionMode,
    ) -> Result<Vec<Observation>, ScanError>;
}
