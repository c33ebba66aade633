use crate::config::WorldConfig;
use crate::plant::{Plant, PlantRegistry};
use crate::player::PlayerState;
use crate::species::Species;
use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for world generation
#[derive(Resource)]
pub struct WorldRng(pub StdRng);

impl Default for WorldRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Make sure every stretch of the window around `player_x` has plant coverage.
///
/// Candidate positions are visited at random strides across the window; a
/// candidate only gets a plant if nothing (active or photographed) already
/// sits within the exclusion radius. Covered regions therefore yield nothing,
/// which makes it safe to call every frame. Returns the number of plants added.
pub fn populate_around<R: Rng + ?Sized>(
    registry: &mut PlantRegistry,
    player_x: i32,
    config: &WorldConfig,
    rng: &mut R,
) -> usize {
    let view_max = player_x + config.generation_radius;
    let mut added = 0;
    let mut x = player_x - config.generation_radius;

    while x < view_max {
        if registry.count_near(x, config.exclusion_radius) == 0 {
            let species = Species::random(rng);
            let y = config.ground_y + rng.gen_range(-config.jitter..=config.jitter);
            registry.add(Plant::new(x, y, species));
            added += 1;
        }
        x += rng.gen_range(config.min_spacing..config.max_spacing);
    }

    added
}

/// System to top up plants around the player every frame
pub fn generate_plants(
    player: Res<PlayerState>,
    config: Res<WorldConfig>,
    mut registry: ResMut<PlantRegistry>,
    mut rng: ResMut<WorldRng>,
) {
    let added = populate_around(&mut registry, player.world_x, &config, &mut rng.0);
    if added > 0 {
        debug!(
            "Planted {} new plants around x={} ({} total)",
            added,
            player.world_x,
            registry.len()
        );
    }
}
