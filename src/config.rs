//! Configuration constants for the plant photography game

use bevy::prelude::*;

// ============================================================================
// VIEWPORT
// ============================================================================

/// Logical viewport width; everything on screen is laid out in these units
pub const VIEWPORT_WIDTH: i32 = 1280;

/// Logical viewport height
pub const VIEWPORT_HEIGHT: i32 = 720;

/// Window title
pub const WINDOW_TITLE: &str = "Snap Game";

// ============================================================================
// WORLD GENERATION
// ============================================================================

/// Plants are kept topped up within ±GENERATION_RADIUS of the player
pub const GENERATION_RADIUS: i32 = 2000;

/// Smallest stride between generator candidate positions
pub const MIN_PLANT_SPACING: i32 = 600;

/// Exclusive upper bound of the stride between candidate positions
pub const MAX_PLANT_SPACING: i32 = 1000;

/// No new plant is placed closer than this (x axis only) to any existing one
pub const PLANT_EXCLUSION_RADIUS: i32 = 400;

/// Maximum vertical jitter applied to freshly placed plants
pub const PLANT_JITTER: i32 = 3;

/// Side length of a plant sprite, both in the sheet and on screen
pub const PLANT_SPRITE_SIZE: i32 = 64;

/// Baseline y coordinate plants are planted on
pub const GROUND_Y: i32 = VIEWPORT_HEIGHT - PLANT_SPRITE_SIZE;

// ============================================================================
// PLAYER
// ============================================================================

/// World units walked per frame while a direction key is held
pub const PLAYER_SPEED: i32 = 2;

/// World x the player starts at
pub const PLAYER_START_X: i32 = VIEWPORT_WIDTH / 2;

// ============================================================================
// PHOTOGRAPHY
// ============================================================================

/// Max world-space distance from player to plant for an in-focus photo
pub const FOCUS_RANGE: i32 = 256;

/// Side length of the square reticle / focus box centred on the cursor
pub const FOCUS_BOX_SIZE: i32 = 32;

/// Directory photos are written to
pub const GALLERY_DIR: &str = "gallery";

/// Directory art and music are read from
pub const ASSET_DIR: &str = "assets";

/// Background images, alternating as the player walks
pub const BACKGROUND_FILES: [&str; 2] = ["forest_park.png", "meadow.png"];

/// 128x128 sheet holding the four 64x64 plant sprites
pub const PLANT_SHEET_FILE: &str = "plants.png";

pub const PLAYER_FILE: &str = "player.png";

pub const TITLE_FILE: &str = "title.png";

/// Looping background music; optional
pub const MUSIC_FILE: &str = "bgmusic.ogg";

// ============================================================================
// PRESENTATION
// ============================================================================

/// Background scroll speed relative to the camera
pub const BACKGROUND_PARALLAX: f32 = 0.5;

/// Width of one background tile
pub const BACKGROUND_TILE_WIDTH: i32 = 1024;

/// Every BACKGROUND_SWITCH_DISTANCE world units the background alternates
pub const BACKGROUND_SWITCH_DISTANCE: i32 = 3000;

/// How long a status message stays on screen (180 frames at 60 Hz)
pub const MESSAGE_DURATION_SECS: f32 = 3.0;

/// Clear colour behind the background
pub const SKY_COLOR: [u8; 3] = [0, 30, 20];

/// Configuration resource for world generation
#[derive(Resource, Debug, Clone)]
pub struct WorldConfig {
    pub generation_radius: i32,
    pub min_spacing: i32,
    pub max_spacing: i32,
    pub exclusion_radius: i32,
    pub ground_y: i32,
    pub jitter: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            generation_radius: GENERATION_RADIUS,
            min_spacing: MIN_PLANT_SPACING,
            max_spacing: MAX_PLANT_SPACING,
            exclusion_radius: PLANT_EXCLUSION_RADIUS,
            ground_y: GROUND_Y,
            jitter: PLANT_JITTER,
        }
    }
}
