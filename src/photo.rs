use crate::config::*;
use crate::scene::{SceneArt, SceneView, render_scene};
use bevy::prelude::*;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors from persisting a photo
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Somewhere photos of the scene can be developed
pub trait PhotoWriter {
    /// Capture the scene as photo number `index` and return where it went
    fn write_photo(&mut self, index: usize, view: &SceneView) -> Result<PathBuf, PhotoError>;
}

/// File name for photo number `index`
pub fn photo_file_name(index: usize) -> String {
    format!("photo_{}.png", index)
}

/// Writes photos as PNG files into the gallery directory
#[derive(Resource)]
pub struct GalleryWriter {
    dir: PathBuf,
    art: SceneArt,
}

impl GalleryWriter {
    /// Create the writer, making sure the gallery directory exists
    pub fn new(dir: impl Into<PathBuf>, art: SceneArt) -> Result<Self, PhotoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, art })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn photo_path(&self, index: usize) -> PathBuf {
        self.dir.join(photo_file_name(index))
    }
}

impl PhotoWriter for GalleryWriter {
    fn write_photo(&mut self, index: usize, view: &SceneView) -> Result<PathBuf, PhotoError> {
        // The buffer is dropped at the end of this call whether or not the save succeeds
        let mut frame = RgbaImage::new(VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32);
        render_scene(&mut frame, view, &self.art, false);

        let path = self.photo_path(index);
        frame.save(&path)?;
        info!("Saved photo {} to {}", index, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::{Plant, PlantRegistry};
    use crate::player::PlayerState;
    use crate::scene::tests::{species_color, test_art};
    use crate::species::Species;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plant-snap-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_full_viewport_png() {
        let dir = scratch_dir("photo-write");
        let mut writer = GalleryWriter::new(&dir, test_art()).unwrap();
        assert!(dir.is_dir(), "gallery directory is created up front");

        let mut registry = PlantRegistry::new();
        registry.add(Plant::new(700, GROUND_Y, Species::OregonGrape));
        let player = PlayerState::new(VIEWPORT_WIDTH / 2, 96);

        let path = writer.write_photo(3, &SceneView::world(&registry, &player)).unwrap();
        assert_eq!(path, dir.join("photo_3.png"));

        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32));
        assert_eq!(
            *saved.get_pixel(710, (GROUND_Y + 10) as u32),
            species_color(Species::OregonGrape)
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = scratch_dir("photo-fail");
        let mut writer = GalleryWriter::new(&dir, test_art()).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let registry = PlantRegistry::new();
        let player = PlayerState::new(0, 96);
        let result = writer.write_photo(0, &SceneView::world(&registry, &player));
        assert!(result.is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
