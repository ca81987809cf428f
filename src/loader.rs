use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// A validated input image: the path the recognizer is handed plus the pixel
/// dimensions the coordinate mapper needs. The file has been fully decoded,
/// so downstream consumers can rely on it being a readable bitmap.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Open and decode the input file. A path that cannot be opened or decoded
/// into a bitmap is a `ScanError::Load` ("file not loaded").
pub fn load_image(path: &Path) -> Result<LoadedImage, ScanError> {
    let pixels = image::open(path).map_err(|source| ScanError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LoadedImage {
        path: path.to_path_buf(),
        width: pixels.width(),
        height: pixels.height(),
    })
}
