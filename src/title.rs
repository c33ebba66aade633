use crate::GameState;
use crate::config::*;
use bevy::prelude::*;

/// Full-screen title card shown before play starts
#[derive(Component)]
pub struct TitleCard;

pub fn spawn_title(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        TitleCard,
        Sprite {
            image: asset_server.load(TITLE_FILE),
            custom_size: Some(Vec2::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}

/// System to start playing on any key or mouse button
pub fn leave_title(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.get_just_pressed().next().is_some() || mouse_button.get_just_pressed().next().is_some()
    {
        next_state.set(GameState::Playing);
    }
}

pub fn despawn_title(mut commands: Commands, cards: Query<Entity, With<TitleCard>>) {
    for entity in cards.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
