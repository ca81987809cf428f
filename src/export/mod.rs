pub mod json_export;

pub use json_export::{output_path, JsonExporter};

use crate::core::model::TextCandidate;
use crate::error::ScanError;

pub trait Exporter {
    fn export(&self, candidates: &[TextCandidate]) -> Result<(), ScanError>;
}
