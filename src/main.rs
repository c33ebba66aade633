use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use plant_snap::GameState;
use plant_snap::camera::{setup_camera, toggle_fullscreen};
use plant_snap::capture::photograph_on_click;
use plant_snap::config::*;
use plant_snap::gallery::{advance_gallery, close_gallery, draw_gallery, load_gallery_photo, open_gallery};
use plant_snap::hud::{HudState, StatusMessage, draw_hud, handle_hotkeys, tick_status, track_cursor};
use plant_snap::journal::FieldJournal;
use plant_snap::photo::GalleryWriter;
use plant_snap::plant::PlantRegistry;
use plant_snap::player::{PlayerState, move_player};
use plant_snap::scene::SceneArt;
use plant_snap::sprites::{setup_scene, spawn_plant_sprites, sync_background, sync_player, sync_plant_sprites};
use plant_snap::title::{despawn_title, leave_title, spawn_title};
use plant_snap::world::{WorldRng, generate_plants};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Photos are composited on the CPU, so the art has to be decoded up front
    let art = SceneArt::load(Path::new(ASSET_DIR))?;
    let (_, player_height) = art.player_size();
    let writer = GalleryWriter::new(GALLERY_DIR, art)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.to_string(),
                        resolution: (VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: ASSET_DIR.to_string(),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .init_state::<GameState>()
        .insert_resource(writer)
        .insert_resource(PlayerState::new(PLAYER_START_X, player_height as i32))
        .init_resource::<PlantRegistry>()
        .init_resource::<FieldJournal>()
        .init_resource::<WorldConfig>()
        .init_resource::<WorldRng>()
        .init_resource::<HudState>()
        .init_resource::<StatusMessage>()
        .add_systems(Startup, (setup_camera, setup_scene))
        .add_systems(OnEnter(GameState::Title), spawn_title)
        .add_systems(OnExit(GameState::Title), despawn_title)
        .add_systems(OnExit(GameState::Gallery), close_gallery)
        .add_systems(Update, (
            // Always run
            toggle_fullscreen,
            leave_title.run_if(in_state(GameState::Title)),
        ))
        .add_systems(Update, (
            // One frame of play, strictly in order
            handle_hotkeys,
            open_gallery,
            move_player,
            generate_plants,
            track_cursor,
            photograph_on_click,
            spawn_plant_sprites,
            sync_plant_sprites,
            sync_background,
            sync_player,
            tick_status,
            draw_hud,
        ).chain().run_if(in_state(GameState::Playing)))
        .add_systems(Update, (
            advance_gallery,
            load_gallery_photo,
            draw_gallery,
        ).chain().run_if(in_state(GameState::Gallery)))
        .run();

    Ok(())
}
