//! Software renderer for the world scene.
//!
//! The live game draws with sprites on the GPU, but photos have to be taken
//! without UI overlays and must be testable without a window, so the scene
//! can also be composited on the CPU into any `RgbaImage`.

use crate::config::*;
use crate::plant::PlantRegistry;
use crate::player::{Facing, PlayerState};
use crate::species::Species;
use bevy::prelude::{IRect, IVec2};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OVERLAY_FILL: Rgba<u8> = Rgba([0, 0, 0, 180]);

/// Errors raised while loading art at startup
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("plant sheet is {width}x{height}, expected at least {needed}x{needed}")]
    SheetTooSmall { width: u32, height: u32, needed: u32 },
}

/// Decoded art needed to composite the scene
#[derive(Debug, Clone)]
pub struct SceneArt {
    /// Background tiles, already scaled to the tile size
    backgrounds: [RgbaImage; 2],
    /// One sprite per species, cut out of the sheet
    plants: [RgbaImage; Species::COUNT],
    player: RgbaImage,
    player_mirrored: RgbaImage,
}

impl SceneArt {
    /// Load all scene art from the asset directory
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let open = |name: &str| -> Result<RgbaImage, AssetError> {
            let path = dir.join(name);
            image::open(&path)
                .map(|img| img.to_rgba8())
                .map_err(|source| AssetError::Load { path, source })
        };

        let backgrounds = [open(BACKGROUND_FILES[0])?, open(BACKGROUND_FILES[1])?];
        let sheet = open(PLANT_SHEET_FILE)?;
        let player = open(PLAYER_FILE)?;
        Self::from_images(backgrounds, &sheet, player)
    }

    /// Build scene art from already decoded images
    pub fn from_images(
        backgrounds: [RgbaImage; 2],
        plant_sheet: &RgbaImage,
        player: RgbaImage,
    ) -> Result<Self, AssetError> {
        let needed = 2 * PLANT_SPRITE_SIZE as u32;
        let (width, height) = plant_sheet.dimensions();
        if width < needed || height < needed {
            return Err(AssetError::SheetTooSmall { width, height, needed });
        }

        let backgrounds = backgrounds.map(|bg| {
            imageops::resize(
                &bg,
                BACKGROUND_TILE_WIDTH as u32,
                VIEWPORT_HEIGHT as u32,
                FilterType::Nearest,
            )
        });
        let plants = Species::ALL.map(|species| {
            let cell = species.sprite();
            let size = cell.size();
            imageops::crop_imm(plant_sheet, cell.min.x, cell.min.y, size.x, size.y).to_image()
        });
        let player_mirrored = imageops::flip_horizontal(&player);

        Ok(Self {
            backgrounds,
            plants,
            player,
            player_mirrored,
        })
    }

    pub fn player_size(&self) -> (u32, u32) {
        self.player.dimensions()
    }
}

/// State needed to draw one frame of the scene
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub registry: &'a PlantRegistry,
    pub player: &'a PlayerState,
    /// Cursor in screen space; the reticle is drawn here when UI is included
    pub reticle: Option<IVec2>,
    pub show_log: bool,
}

impl<'a> SceneView<'a> {
    /// Scene without any UI state, as used for photos
    pub fn world(registry: &'a PlantRegistry, player: &'a PlayerState) -> Self {
        Self {
            registry,
            player,
            reticle: None,
            show_log: false,
        }
    }
}

/// Screen x of the leftmost background tile for a camera offset
pub fn background_start(camera_x: i32) -> i32 {
    let start = -((camera_x as f32 * BACKGROUND_PARALLAX) as i32) % BACKGROUND_TILE_WIDTH;
    if start > 0 {
        start - BACKGROUND_TILE_WIDTH
    } else {
        start
    }
}

/// Screen-space bounds of the discovery overlay panel
pub fn log_panel_rect() -> IRect {
    let min = IVec2::new(VIEWPORT_WIDTH / 2 - 150, 20);
    IRect::from_corners(min, min + IVec2::new(300, 20 + 20 * Species::COUNT as i32))
}

/// Composite the scene into `target`.
///
/// With `include_ui` the reticle and the overlay panel are drawn on top;
/// overlay text is only drawn by the live UI.
pub fn render_scene(target: &mut RgbaImage, view: &SceneView, art: &SceneArt, include_ui: bool) {
    let [r, g, b] = SKY_COLOR;
    for pixel in target.pixels_mut() {
        *pixel = Rgba([r, g, b, 255]);
    }

    let camera_x = view.player.camera_offset();
    let width = target.width() as i32;

    let background = &art.backgrounds[view.player.background_index()];
    let mut x = background_start(camera_x);
    while x < width {
        imageops::overlay(target, background, x as i64, 0);
        x += BACKGROUND_TILE_WIDTH;
    }

    for (_, plant) in view.registry.iter_active() {
        let screen_x = plant.x - camera_x;
        if screen_x + PLANT_SPRITE_SIZE <= 0 || screen_x >= width {
            continue;
        }
        let sprite = &art.plants[plant.species.index()];
        imageops::overlay(target, sprite, screen_x as i64, plant.y as i64);
    }

    let sprite = match view.player.facing {
        Facing::Right => &art.player,
        Facing::Left => &art.player_mirrored,
    };
    let player_x = VIEWPORT_WIDTH / 2 - sprite.width() as i32 / 2;
    imageops::overlay(target, sprite, player_x as i64, view.player.y as i64);

    if include_ui {
        draw_ui(target, view);
    }
}

fn draw_ui(target: &mut RgbaImage, view: &SceneView) {
    if let Some(cursor) = view.reticle {
        let half = FOCUS_BOX_SIZE / 2;
        let reticle = Rect::at(cursor.x - half, cursor.y - half)
            .of_size(FOCUS_BOX_SIZE as u32, FOCUS_BOX_SIZE as u32);
        draw_hollow_rect_mut(target, reticle, WHITE);
    }

    if view.show_log {
        let panel = log_panel_rect();
        let (width, height) = target.dimensions();
        for y in panel.min.y.max(0)..panel.max.y.min(height as i32) {
            for x in panel.min.x.max(0)..panel.max.x.min(width as i32) {
                let pixel = target.get_pixel_mut(x as u32, y as u32);
                image::Pixel::blend(pixel, &OVERLAY_FILL);
            }
        }
        let size = panel.size();
        let border = Rect::at(panel.min.x, panel.min.y).of_size(size.x as u32, size.y as u32);
        draw_hollow_rect_mut(target, border, WHITE);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::plant::Plant;

    pub const BACKGROUND_A: Rgba<u8> = Rgba([200, 0, 0, 255]);
    pub const BACKGROUND_B: Rgba<u8> = Rgba([0, 0, 200, 255]);
    pub const PLAYER: Rgba<u8> = Rgba([0, 255, 0, 255]);

    pub fn species_color(species: Species) -> Rgba<u8> {
        Rgba([10 + 40 * species.index() as u8, 100, 100, 255])
    }

    /// Flat-coloured art: distinct colour per layer and species
    pub fn test_art() -> SceneArt {
        let mut sheet = RgbaImage::new(128, 128);
        for species in Species::ALL {
            let cell = species.sprite();
            for y in cell.min.y..cell.max.y {
                for x in cell.min.x..cell.max.x {
                    sheet.put_pixel(x, y, species_color(species));
                }
            }
        }
        // Left column of the player is marked so mirroring is observable
        let mut player = RgbaImage::from_pixel(40, 96, PLAYER);
        for y in 0..96 {
            player.put_pixel(0, y, WHITE);
        }
        SceneArt::from_images(
            [
                RgbaImage::from_pixel(16, 16, BACKGROUND_A),
                RgbaImage::from_pixel(16, 16, BACKGROUND_B),
            ],
            &sheet,
            player,
        )
        .expect("test art is valid")
    }

    fn canvas() -> RgbaImage {
        RgbaImage::new(VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32)
    }

    #[test]
    fn test_background_start_stays_left_of_screen() {
        assert_eq!(background_start(0), 0);
        assert_eq!(background_start(100), -50);
        assert_eq!(background_start(2048 + 10), -5);
        assert_eq!(background_start(-100), 50 - BACKGROUND_TILE_WIDTH);
        for camera in [-5000, -1, 0, 1, 777, 12_345] {
            let start = background_start(camera);
            assert!(start <= 0 && start > -BACKGROUND_TILE_WIDTH);
        }
    }

    #[test]
    fn test_sheet_too_small_is_rejected() {
        let result = SceneArt::from_images(
            [RgbaImage::new(4, 4), RgbaImage::new(4, 4)],
            &RgbaImage::new(64, 64),
            RgbaImage::new(4, 4),
        );
        assert!(matches!(result, Err(AssetError::SheetTooSmall { .. })));
    }

    #[test]
    fn test_missing_asset_reports_path() {
        let dir = std::env::temp_dir().join("plant-snap-missing-assets");
        let err = SceneArt::load(&dir).unwrap_err();
        assert!(err.to_string().contains(BACKGROUND_FILES[0]), "{}", err);
    }

    #[test]
    fn test_renders_background_plants_and_player() {
        let art = test_art();
        let mut registry = PlantRegistry::new();
        registry.add(Plant::new(100, GROUND_Y, Species::Trillium));
        let hidden = registry.add(Plant::new(300, GROUND_Y, Species::Lupine));
        registry.deactivate(hidden);
        let player = PlayerState::new(VIEWPORT_WIDTH / 2, 96);

        let mut target = canvas();
        render_scene(&mut target, &SceneView::world(&registry, &player), &art, false);

        assert_eq!(*target.get_pixel(5, 5), BACKGROUND_A);
        assert_eq!(
            *target.get_pixel(110, (GROUND_Y + 10) as u32),
            species_color(Species::Trillium)
        );
        assert_eq!(*target.get_pixel(310, (GROUND_Y + 10) as u32), BACKGROUND_A);
        assert_eq!(*target.get_pixel(645, 700), PLAYER);
        // Facing right: marked column on the left
        assert_eq!(*target.get_pixel(620, 700), WHITE);
    }

    #[test]
    fn test_player_mirrors_when_facing_left() {
        let art = test_art();
        let registry = PlantRegistry::new();
        let mut player = PlayerState::new(VIEWPORT_WIDTH / 2, 96);
        player.facing = Facing::Left;

        let mut target = canvas();
        render_scene(&mut target, &SceneView::world(&registry, &player), &art, false);

        assert_eq!(*target.get_pixel(620, 700), PLAYER);
        assert_eq!(*target.get_pixel(659, 700), WHITE);
    }

    #[test]
    fn test_second_background_after_switch_distance() {
        let art = test_art();
        let registry = PlantRegistry::new();
        let player = PlayerState::new(BACKGROUND_SWITCH_DISTANCE + 10, 96);

        let mut target = canvas();
        render_scene(&mut target, &SceneView::world(&registry, &player), &art, false);
        assert_eq!(*target.get_pixel(5, 5), BACKGROUND_B);
    }

    #[test]
    fn test_ui_only_drawn_when_requested() {
        let art = test_art();
        let registry = PlantRegistry::new();
        let player = PlayerState::new(VIEWPORT_WIDTH / 2, 96);
        let view = SceneView {
            registry: &registry,
            player: &player,
            reticle: Some(IVec2::new(200, 200)),
            show_log: true,
        };

        let mut clean = canvas();
        render_scene(&mut clean, &view, &art, false);
        assert_eq!(*clean.get_pixel(184, 200), BACKGROUND_A);

        let mut with_ui = canvas();
        render_scene(&mut with_ui, &view, &art, true);
        assert_eq!(*with_ui.get_pixel(184, 200), WHITE);

        let panel = log_panel_rect();
        let inside = with_ui.get_pixel((panel.min.x + 5) as u32, (panel.min.y + 5) as u32);
        assert!(inside.0[0] < BACKGROUND_A.0[0], "panel should darken the scene");
    }
}
