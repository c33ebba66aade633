use crate::GameState;
use crate::hud::StatusMessage;
use crate::journal::FieldJournal;
use crate::photo::{GalleryWriter, photo_file_name};
use crate::species::Species;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_egui::{EguiContexts, egui};
use std::path::{Path, PathBuf};

/// Size the photo is shown at inside the viewer
const VIEWER_PHOTO_SIZE: [f32; 2] = [600.0, 320.0];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GalleryError {
    #[error("Gallery is empty! Take some photos first.")]
    Empty,
}

/// One saved photo and what it shows
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub index: usize,
    pub species: Species,
    pub path: PathBuf,
}

impl GalleryEntry {
    pub fn caption(&self) -> String {
        format!("{}: {}", self.species.name(), self.species.description())
    }
}

/// Page-by-page viewer over the saved photos, in capture order
#[derive(Resource, Debug)]
pub struct GalleryViewer {
    entries: Vec<GalleryEntry>,
    current: usize,
    /// Texture of the photo currently on screen
    texture: Option<Handle<Image>>,
}

impl GalleryViewer {
    pub fn open(journal: &FieldJournal, dir: &Path) -> Result<Self, GalleryError> {
        if journal.photos().is_empty() {
            return Err(GalleryError::Empty);
        }
        let entries = journal
            .photos()
            .iter()
            .enumerate()
            .map(|(index, species)| GalleryEntry {
                index,
                species: *species,
                path: dir.join(photo_file_name(index)),
            })
            .collect();
        Ok(Self {
            entries,
            current: 0,
            texture: None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&GalleryEntry> {
        self.entries.get(self.current)
    }

    /// Move to the next photo. Returns false once past the last one.
    pub fn advance(&mut self) -> bool {
        if self.current < self.entries.len() {
            self.current += 1;
        }
        self.texture = None;
        self.current < self.entries.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.entries.len()
    }
}

/// Upload a decoded photo as a texture
fn photo_to_image(photo: image::RgbaImage) -> Image {
    let (width, height) = photo.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        photo.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// System to open the gallery with G
pub fn open_gallery(
    keys: Res<ButtonInput<KeyCode>>,
    journal: Res<FieldJournal>,
    writer: Res<GalleryWriter>,
    mut status: ResMut<StatusMessage>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
) {
    if !keys.just_pressed(KeyCode::KeyG) {
        return;
    }
    match GalleryViewer::open(&journal, writer.dir()) {
        Ok(viewer) => {
            info!("Opening gallery with {} photos", viewer.len());
            commands.insert_resource(viewer);
            next_state.set(GameState::Gallery);
        }
        Err(err) => status.show(err.to_string()),
    }
}

/// System to flip to the next photo on any click or key press
pub fn advance_gallery(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut viewer: ResMut<GalleryViewer>,
    mut contexts: EguiContexts,
) {
    let pressed = keys.get_just_pressed().next().is_some()
        || mouse_button.get_just_pressed().next().is_some();
    if !pressed {
        return;
    }
    if let Some(texture) = viewer.texture.take() {
        contexts.remove_image(&texture);
    }
    viewer.advance();
}

/// System to decode the current photo, skipping files that cannot be read,
/// and to leave the gallery after the last one
pub fn load_gallery_photo(
    mut viewer: ResMut<GalleryViewer>,
    mut images: ResMut<Assets<Image>>,
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<GameState>>,
) {
    while viewer.texture.is_none() {
        let Some(path) = viewer.current().map(|entry| entry.path.clone()) else {
            next_state.set(GameState::Playing);
            return;
        };
        match image::open(&path) {
            Ok(photo) => {
                let handle = images.add(photo_to_image(photo.to_rgba8()));
                contexts.add_image(handle.clone_weak());
                viewer.texture = Some(handle);
            }
            Err(err) => {
                warn!("Skipping unreadable photo {}: {}", path.display(), err);
                viewer.advance();
            }
        }
    }
}

/// System to draw the gallery viewer
pub fn draw_gallery(mut contexts: EguiContexts, viewer: Res<GalleryViewer>) {
    let (Some(entry), Some(texture)) = (viewer.current(), viewer.texture.as_ref()) else {
        return;
    };
    let Some(texture_id) = contexts.image_id(texture) else {
        return;
    };
    let title = format!("Gallery ({} / {})", entry.index + 1, viewer.len());
    let caption = entry.caption();

    egui::Window::new("Gallery")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(title);
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                egui::vec2(VIEWER_PHOTO_SIZE[0], VIEWER_PHOTO_SIZE[1]),
            )));
            ui.add(
                egui::Label::new(egui::RichText::new(caption).color(egui::Color32::WHITE)).wrap(),
            );
            ui.separator();
            ui.label("Click or press any key for the next photo");
        });
}

/// Drop the viewer and its texture when leaving the gallery
pub fn close_gallery(
    mut commands: Commands,
    viewer: Option<Res<GalleryViewer>>,
    mut contexts: EguiContexts,
) {
    if let Some(texture) = viewer.as_ref().and_then(|v| v.texture.as_ref()) {
        contexts.remove_image(texture);
    }
    commands.remove_resource::<GalleryViewer>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_with(species: &[Species]) -> FieldJournal {
        let mut journal = FieldJournal::new();
        for s in species {
            journal.discover(*s);
        }
        journal
    }

    #[test]
    fn test_empty_gallery_does_not_open() {
        let journal = FieldJournal::new();
        let err = GalleryViewer::open(&journal, Path::new("gallery")).unwrap_err();
        assert_eq!(err, GalleryError::Empty);
        assert_eq!(err.to_string(), "Gallery is empty! Take some photos first.");
    }

    #[test]
    fn test_entries_follow_capture_order() {
        let journal = journal_with(&[Species::OregonGrape, Species::Lupine]);
        let viewer = GalleryViewer::open(&journal, Path::new("gallery")).unwrap();

        assert_eq!(viewer.len(), 2);
        let first = viewer.current().unwrap();
        assert_eq!(first.species, Species::OregonGrape);
        assert_eq!(first.path, Path::new("gallery").join("photo_0.png"));
        assert_eq!(
            first.caption(),
            "Oregon Grape: An evergreen shrub with holly-like leaves and yellow flowers."
        );
    }

    #[test]
    fn test_advance_walks_to_the_end() {
        let journal = journal_with(&[Species::Trillium, Species::Lupine]);
        let mut viewer = GalleryViewer::open(&journal, Path::new("gallery")).unwrap();

        assert!(viewer.advance());
        assert_eq!(viewer.current().map(|e| e.species), Some(Species::Lupine));
        assert!(!viewer.advance());
        assert!(viewer.is_finished());
        assert!(viewer.current().is_none());
        // Advancing past the end stays there
        assert!(!viewer.advance());
    }

    #[test]
    fn test_photo_texture_matches_dimensions() {
        let photo = image::RgbaImage::from_pixel(8, 4, image::Rgba([1, 2, 3, 255]));
        let texture = photo_to_image(photo);
        assert_eq!(texture.width(), 8);
        assert_eq!(texture.height(), 4);
    }
}
