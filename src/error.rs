use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a single scan can fail. All variants are terminal for the run;
/// there are no retries.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("file not loaded: {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("failed to write output to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
