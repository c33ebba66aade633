use crate::camera::cursor_to_screen;
use crate::config::*;
use crate::hud::StatusMessage;
use crate::journal::FieldJournal;
use crate::photo::{GalleryWriter, PhotoWriter};
use crate::plant::PlantRegistry;
use crate::player::PlayerState;
use crate::scene::SceneView;
use crate::species::Species;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::path::PathBuf;

/// Result of one click of the shutter
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// No active plant under the focus box
    Nothing,
    /// A plant was under the focus box but too far from the player
    OutOfFocus { species: Species },
    /// The plant was photographed
    Snapped {
        species: Species,
        /// Present on the first capture of a species
        discovery: Option<Discovery>,
    },
}

/// A first-time capture and its photo
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    pub photo_index: usize,
    /// None if the photo could not be written
    pub path: Option<PathBuf>,
}

impl CaptureOutcome {
    /// Feedback to show the player, if any
    pub fn message(&self) -> Option<String> {
        match self {
            CaptureOutcome::Nothing => Some("Nothing to photograph there!".to_string()),
            CaptureOutcome::OutOfFocus { .. } => Some("Out of focus! Get closer :]".to_string()),
            CaptureOutcome::Snapped {
                species,
                discovery: Some(_),
            } => Some(format!("New plant documented: {}!", species.name())),
            CaptureOutcome::Snapped { discovery: None, .. } => None,
        }
    }
}

/// Focus box centred on a screen-space cursor position
pub fn focus_box(cursor: IVec2) -> IRect {
    IRect::from_center_size(cursor, IVec2::splat(FOCUS_BOX_SIZE))
}

fn overlaps(a: IRect, b: IRect) -> bool {
    !a.intersect(b).is_empty()
}

/// Try to photograph whatever is under `cursor`.
///
/// The first active plant (in registry order) whose sprite overlaps the focus
/// box is the subject. Out of range subjects leave all state untouched. The
/// photo is developed before the plant is deactivated so that it shows up in
/// the picture.
pub fn take_photo(
    registry: &mut PlantRegistry,
    journal: &mut FieldJournal,
    player: &PlayerState,
    cursor: IVec2,
    writer: &mut impl PhotoWriter,
) -> CaptureOutcome {
    let focus = focus_box(cursor);
    let camera_x = player.camera_offset();

    let Some((index, species, x, y)) = registry
        .iter_active()
        .find(|(_, plant)| overlaps(focus, plant.screen_box(camera_x)))
        .map(|(i, plant)| (i, plant.species, plant.x, plant.y))
    else {
        return CaptureOutcome::Nothing;
    };

    let dx = (player.world_x - x) as i64;
    let dy = (player.y - y) as i64;
    let range = FOCUS_RANGE as i64;
    if dx * dx + dy * dy > range * range {
        return CaptureOutcome::OutOfFocus { species };
    }

    let discovery = journal.discover(species).map(|photo_index| {
        let path = match writer.write_photo(photo_index, &SceneView::world(registry, player)) {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("Could not save photo {} of {}: {}", photo_index, species, err);
                None
            }
        };
        Discovery { photo_index, path }
    });

    registry.deactivate(index);
    journal.record_snap(species);

    CaptureOutcome::Snapped { species, discovery }
}

/// System to take a photo on left click
pub fn photograph_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    player: Res<PlayerState>,
    mut registry: ResMut<PlantRegistry>,
    mut journal: ResMut<FieldJournal>,
    mut writer: ResMut<GalleryWriter>,
    mut status: ResMut<StatusMessage>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let cursor = cursor_to_screen(cursor, window.size());

    let outcome = take_photo(&mut registry, &mut journal, &player, cursor, &mut *writer);
    if let CaptureOutcome::Snapped { species, .. } = &outcome {
        info!(
            "Snapped {} ({} total, {} species discovered)",
            species,
            journal.total_snaps(),
            journal.discovered_count()
        );
    }
    if let Some(message) = outcome.message() {
        status.show(message);
    }
}
