use eframe::egui;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Loads deck images into GPU textures on first use. Paths are resolved
/// relative to the deck file's directory. A failed load is cached as a miss
/// so the render loop never retries the filesystem.
pub struct ImageCache {
    base_path: PathBuf,
    cache: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn get(&self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.cache.borrow().get(path) {
            return entry.clone();
        }
        let loaded = self.load(ctx, path);
        self.cache
            .borrow_mut()
            .insert(path.to_string(), loaded.clone());
        loaded
    }

    fn load(&self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        let full = self.base_path.join(path);
        let rgba = image::open(&full).ok()?.into_rgba8();
        let (w, h) = rgba.dimensions();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [w as usize, h as usize],
            rgba.as_raw(),
        );
        Some(ctx.load_texture(path, color_image, egui::TextureOptions::LINEAR))
    }
}
