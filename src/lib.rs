//! A small side-scrolling plant photography game.
//!
//! The player walks an endless strip of wilderness, plants are generated
//! around them as they go, and clicking on a plant within focus range
//! photographs it. The first photo of every species is saved to the gallery.

pub mod camera;
pub mod capture;
pub mod config;
pub mod gallery;
pub mod hud;
pub mod journal;
pub mod photo;
pub mod plant;
pub mod player;
pub mod scene;
pub mod species;
pub mod sprites;
pub mod title;
pub mod world;

use bevy::prelude::*;

pub use capture::{CaptureOutcome, take_photo};
pub use journal::FieldJournal;
pub use plant::{Plant, PlantRegistry};
pub use player::PlayerState;
pub use species::Species;

/// Top-level screen the game is on
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Title,
    Playing,
    /// Gallery viewer open; the world is paused
    Gallery,
}
