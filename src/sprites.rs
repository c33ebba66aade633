use crate::camera::screen_to_translation;
use crate::config::*;
use crate::plant::PlantRegistry;
use crate::player::{Facing, PlayerState};
use crate::scene::background_start;
use bevy::prelude::*;
use bevy::sprite::Anchor;

/// Background tiles needed to cover the viewport at any scroll position
const BACKGROUND_TILES: usize = 3;

/// Draw order
const BACKGROUND_Z: f32 = 0.0;
const PLANT_Z: f32 = 1.0;
const PLAYER_Z: f32 = 2.0;

/// Image handles for the live scene
#[derive(Resource, Default)]
pub struct SceneHandles {
    pub backgrounds: [Handle<Image>; 2],
    pub plant_sheet: Handle<Image>,
    pub player: Handle<Image>,
}

/// Sprite entity drawing the plant at this registry index
#[derive(Component)]
pub struct PlantSprite(pub usize);

/// One of the scrolling background tiles
#[derive(Component)]
pub struct BackgroundTile(pub usize);

#[derive(Component)]
pub struct PlayerSprite;

/// System to load scene art and spawn the background, the player and music
pub fn setup_scene(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handles = SceneHandles {
        backgrounds: BACKGROUND_FILES.map(|file| asset_server.load(file)),
        plant_sheet: asset_server.load(PLANT_SHEET_FILE),
        player: asset_server.load(PLAYER_FILE),
    };

    for i in 0..BACKGROUND_TILES {
        commands.spawn((
            BackgroundTile(i),
            Sprite {
                image: handles.backgrounds[0].clone(),
                custom_size: Some(Vec2::new(
                    BACKGROUND_TILE_WIDTH as f32,
                    VIEWPORT_HEIGHT as f32,
                )),
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::from_translation(screen_to_translation(IVec2::ZERO, BACKGROUND_Z)),
        ));
    }

    commands.spawn((
        PlayerSprite,
        Sprite {
            image: handles.player.clone(),
            anchor: Anchor::TopCenter,
            ..default()
        },
        Transform::from_translation(screen_to_translation(
            IVec2::new(VIEWPORT_WIDTH / 2, 0),
            PLAYER_Z,
        )),
    ));

    // A missing music file only produces an asset load error in the log
    commands.spawn((
        AudioPlayer::<AudioSource>(asset_server.load(MUSIC_FILE)),
        PlaybackSettings::LOOP,
    ));

    commands.insert_resource(handles);
}

/// System to spawn a sprite for every plant added to the registry since the last frame
pub fn spawn_plant_sprites(
    mut commands: Commands,
    registry: Res<PlantRegistry>,
    handles: Res<SceneHandles>,
    mut spawned: Local<usize>,
) {
    for index in *spawned..registry.len() {
        let Some(plant) = registry.get(index) else {
            continue;
        };
        commands.spawn((
            PlantSprite(index),
            Sprite {
                image: handles.plant_sheet.clone(),
                rect: Some(plant.sprite().as_rect()),
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::default(),
            Visibility::Inherited,
        ));
    }
    *spawned = registry.len();
}

/// System to scroll plant sprites with the camera and hide photographed ones
pub fn sync_plant_sprites(
    player: Res<PlayerState>,
    registry: Res<PlantRegistry>,
    mut sprites: Query<(&PlantSprite, &mut Transform, &mut Visibility)>,
) {
    let camera_x = player.camera_offset();
    for (PlantSprite(index), mut transform, mut visibility) in sprites.iter_mut() {
        let Some(plant) = registry.get(*index) else {
            continue;
        };
        let screen = IVec2::new(plant.x - camera_x, plant.y);
        transform.translation = screen_to_translation(screen, PLANT_Z);
        let wanted = if plant.active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

/// System to scroll the background with parallax and swap it every few thousand units
pub fn sync_background(
    player: Res<PlayerState>,
    handles: Res<SceneHandles>,
    mut tiles: Query<(&BackgroundTile, &mut Sprite, &mut Transform)>,
) {
    let start = background_start(player.camera_offset());
    let image = &handles.backgrounds[player.background_index()];
    for (BackgroundTile(i), mut sprite, mut transform) in tiles.iter_mut() {
        let x = start + *i as i32 * BACKGROUND_TILE_WIDTH;
        transform.translation = screen_to_translation(IVec2::new(x, 0), BACKGROUND_Z);
        if sprite.image != *image {
            sprite.image = image.clone();
        }
    }
}

/// System to keep the player sprite centred and facing the way it walks
pub fn sync_player(
    player: Res<PlayerState>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<PlayerSprite>>,
) {
    for (mut sprite, mut transform) in sprites.iter_mut() {
        transform.translation =
            screen_to_translation(IVec2::new(VIEWPORT_WIDTH / 2, player.y), PLAYER_Z);
        let flip = player.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
