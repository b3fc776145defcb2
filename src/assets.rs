use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use image::{RgbaImage, imageops};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("{path}: {source}")]
    Open {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("{0}: image has no pixels")]
    Empty(PathBuf),
}

// ---------------------------------------------------------------------------
// Image loading
// ---------------------------------------------------------------------------

/// Decode an image file as RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(AssetError::Empty(path.to_path_buf()));
    }
    Ok(rgba)
}

/// Load a portrait as a centred square with everything outside the
/// inscribed circle made transparent.
pub fn make_circular_image(path: &Path) -> Result<RgbaImage, AssetError> {
    Ok(circular_crop(&load_rgba(path)?))
}

/// Centre-crop to a square of the shorter side and mask it to a circle.
pub fn circular_crop(img: &RgbaImage) -> RgbaImage {
    let side = img.width().min(img.height());
    let x0 = (img.width() - side) / 2;
    let y0 = (img.height() - side) / 2;
    let mut square = imageops::crop_imm(img, x0, y0, side, side).to_image();

    let r = side as f32 / 2.0;
    for (x, y, px) in square.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy > r * r {
            px[3] = 0;
        }
    }
    square
}

/// Upload an RGBA image to the GPU for display.
pub fn to_texture(ctx: &egui::Context, name: &str, img: &RgbaImage) -> TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color, TextureOptions::LINEAR)
}
