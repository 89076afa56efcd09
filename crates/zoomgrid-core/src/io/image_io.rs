use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use tracing::debug;

use crate::error::Result;

/// Decode an in-memory image, guessing the format from its content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    debug!(width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

/// Load an image file of any format supported by the `image` crate.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded image"
    );
    Ok(img)
}

/// Output format for `path`, chosen from its extension. Unknown or missing
/// extensions fall back to PNG.
pub fn format_for_path(path: &Path) -> ImageFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        Some("tif" | "tiff") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}

/// Save an RGB image, choosing the format from the file extension.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, format_for_path(path))?;
    Ok(())
}
