use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, TextureHandle};

use crate::assets;

// ---------------------------------------------------------------------------
// Texture cache for static assets
// ---------------------------------------------------------------------------

/// How an asset is prepared before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    AsIs,
    Circle,
}

/// Decodes each asset once; failures are remembered so a missing file is
/// logged a single time instead of every frame.
#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<(PathBuf, Shape), Result<TextureHandle, String>>,
}

impl ImageCache {
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        path: &Path,
        shape: Shape,
    ) -> Result<&TextureHandle, &str> {
        self.textures
            .entry((path.to_path_buf(), shape))
            .or_insert_with(|| {
                let decoded = match shape {
                    Shape::AsIs => assets::load_rgba(path),
                    Shape::Circle => assets::make_circular_image(path),
                };
                match decoded {
                    Ok(img) => Ok(assets::to_texture(ctx, &path.display().to_string(), &img)),
                    Err(e) => {
                        log::warn!("Failed to load image asset: {e}");
                        Err(e.to_string())
                    }
                }
            })
            .as_ref()
            .map_err(String::as_str)
    }
}
