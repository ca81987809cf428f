use serde::{Deserialize, Serialize};

use crate::core::geometry::{BoundingBox, NormalizedBox};

/// One text region reported by the recognition engine, still in the engine's
/// coordinate frame. Only the engine's best candidate per region reaches this
/// type; overlapping regions are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub text: String,
    pub confidence: f64,
    pub bbox: Option<NormalizedBox>,
}

/// One output record: recognized text with its confidence and pixel bounding
/// box. Built once per observation and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextCandidate {
    pub text: String,
    pub confidence: f64,
    pub bbox: BoundingBox,
}

impl TextCandidate {
    /// Map an observation into pixel coordinates. An observation without
    /// usable geometry keeps its text and gets the zero-sized box at the
    /// origin rather than being dropped.
    pub fn from_observation(obs: Observation, image_width: u32, image_height: u32) -> Self {
        let bbox = obs
            .bbox
            .map(|b| b.to_pixels(image_width, image_height))
            .unwrap_or(BoundingBox::ZERO);
        Self {
            text: obs.text,
            confidence: obs.confidence,
            bbox,
        }
    }
}
