use crate::config::*;
use crate::species::Species;
use bevy::prelude::*;

/// A plant placed somewhere in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    /// World-space x of the sprite's left edge
    pub x: i32,
    /// Screen-space y of the sprite's top edge (the world does not scroll vertically)
    pub y: i32,
    pub species: Species,
    /// Cleared once the plant has been photographed; inactive plants are
    /// neither drawn nor hit-tested but still block respawning nearby
    pub active: bool,
}

impl Plant {
    pub fn new(x: i32, y: i32, species: Species) -> Self {
        Self {
            x,
            y,
            species,
            active: true,
        }
    }

    /// Region of the plant sheet to draw for this plant
    pub fn sprite(&self) -> URect {
        self.species.sprite()
    }

    /// On-screen bounding box for a given camera offset
    pub fn screen_box(&self, camera_x: i32) -> IRect {
        let min = IVec2::new(self.x - camera_x, self.y);
        IRect::from_corners(min, min + IVec2::splat(PLANT_SPRITE_SIZE))
    }
}

/// Every plant ever generated, in creation order.
///
/// Append-only: plants are deactivated when photographed, never removed, so
/// the registry grows for the whole session.
#[derive(Resource, Default, Debug)]
pub struct PlantRegistry {
    plants: Vec<Plant>,
}

impl PlantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plant and return its registry index
    pub fn add(&mut self, plant: Plant) -> usize {
        self.plants.push(plant);
        self.plants.len() - 1
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Plant> {
        self.plants.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.iter()
    }

    /// Active plants with their registry index, in registry order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Plant)> {
        self.plants.iter().enumerate().filter(|(_, p)| p.active)
    }

    /// Number of plants, active or not, strictly closer than `radius` to `x` on the x axis
    pub fn count_near(&self, x: i32, radius: i32) -> usize {
        self.plants
            .iter()
            .filter(|p| (p.x - x).abs() < radius)
            .count()
    }

    /// Mark a plant as photographed. Returns false if it was already inactive
    /// or the index is out of range.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.plants.get_mut(index) {
            Some(plant) if plant.active => {
                plant.active = false;
                true
            }
            _ => false,
        }
    }
}
