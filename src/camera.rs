use crate::config::*;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

#[derive(Component)]
pub struct MainCamera;

/// Spawn a camera that always shows the 1280x720 logical viewport, stretched
/// to whatever size the window has.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 0.0),
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: VIEWPORT_WIDTH as f32,
                height: VIEWPORT_HEIGHT as f32,
            },
            ..OrthographicProjection::default_2d()
        },
    ));
}

/// Scale a window cursor position to logical screen coordinates
pub fn cursor_to_screen(cursor: Vec2, window_size: Vec2) -> IVec2 {
    let scale = window_size / Vec2::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32);
    let logical = cursor / scale + Vec2::splat(0.5);
    logical.as_ivec2()
}

/// Translation for a top-left anchored sprite drawn at screen position `screen`.
///
/// Screen space has its origin in the top-left corner with y pointing down;
/// the camera is centred on the viewport with y pointing up.
pub fn screen_to_translation(screen: IVec2, z: f32) -> Vec3 {
    Vec3::new(
        screen.x as f32 - VIEWPORT_WIDTH as f32 / 2.0,
        VIEWPORT_HEIGHT as f32 / 2.0 - screen.y as f32,
        z,
    )
}

/// System to toggle borderless full screen with F11
pub fn toggle_fullscreen(
    keys: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::F11) {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        window.mode = match window.mode {
            WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
            _ => WindowMode::Windowed,
        };
        info!("Window mode set to {:?}", window.mode);
    }
}
