use crate::config::*;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Player position. The camera is not stored anywhere: it is always derived
/// from the player's world x.
#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    pub world_x: i32,
    /// Screen-space y of the top of the player sprite
    pub y: i32,
    pub facing: Facing,
}

impl PlayerState {
    /// Player standing on the ground with a sprite of the given height
    pub fn new(world_x: i32, sprite_height: i32) -> Self {
        Self {
            world_x,
            y: VIEWPORT_HEIGHT - sprite_height,
            facing: Facing::Right,
        }
    }

    /// World x at the left edge of the viewport
    pub fn camera_offset(&self) -> i32 {
        self.world_x - VIEWPORT_WIDTH / 2
    }

    /// Which of the two backgrounds is shown at the current position
    pub fn background_index(&self) -> usize {
        self.world_x
            .div_euclid(BACKGROUND_SWITCH_DISTANCE)
            .rem_euclid(2) as usize
    }

    pub fn walk(&mut self, direction: Facing) {
        match direction {
            Facing::Left => self.world_x -= PLAYER_SPEED,
            Facing::Right => self.world_x += PLAYER_SPEED,
        }
        self.facing = direction;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PLAYER_START_X, 0)
    }
}

/// System to walk the player while A/D (or the arrow keys) are held
pub fn move_player(keys: Res<ButtonInput<KeyCode>>, mut player: ResMut<PlayerState>) {
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        player.walk(Facing::Left);
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        player.walk(Facing::Right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_offset_is_derived() {
        let mut player = PlayerState::new(PLAYER_START_X, 96);
        assert_eq!(player.camera_offset(), 0);
        assert_eq!(player.y, VIEWPORT_HEIGHT - 96);

        player.walk(Facing::Left);
        assert_eq!(player.world_x, PLAYER_START_X - PLAYER_SPEED);
        assert_eq!(player.camera_offset(), -PLAYER_SPEED);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_background_alternates_every_switch_distance() {
        let mut player = PlayerState::new(0, 96);
        assert_eq!(player.background_index(), 0);
        player.world_x = BACKGROUND_SWITCH_DISTANCE;
        assert_eq!(player.background_index(), 1);
        player.world_x = 2 * BACKGROUND_SWITCH_DISTANCE + 5;
        assert_eq!(player.background_index(), 0);
        // Walking left of the origin keeps a valid index
        player.world_x = -1;
        assert_eq!(player.background_index(), 1);
    }
}
