use bevy::math::{URect, UVec2};
use rand::Rng;
use std::fmt;

/// The four plant kinds that can be found and photographed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Lupine,
    Trillium,
    GoldenPaintbrush,
    OregonGrape,
}

/// Static metadata for one species
#[derive(Debug)]
pub struct SpeciesInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Region of the plant sheet holding this species' sprite
    pub sprite: URect,
}

const SPECIES_TABLE: [SpeciesInfo; Species::COUNT] = [
    SpeciesInfo {
        name: "Lupine",
        description: "A beautiful purple wildflower found in meadows.",
        sprite: URect { min: UVec2::new(0, 0), max: UVec2::new(64, 64) },
    },
    SpeciesInfo {
        name: "Trillium",
        description: "A three-petaled flower often found in forests.",
        sprite: URect { min: UVec2::new(64, 0), max: UVec2::new(128, 64) },
    },
    SpeciesInfo {
        name: "Golden Paintbrush",
        description: "A rare golden plant native to the Pacific Northwest.",
        sprite: URect { min: UVec2::new(0, 64), max: UVec2::new(64, 128) },
    },
    SpeciesInfo {
        name: "Oregon Grape",
        description: "An evergreen shrub with holly-like leaves and yellow flowers.",
        sprite: URect { min: UVec2::new(64, 64), max: UVec2::new(128, 128) },
    },
];

impl Species {
    pub const COUNT: usize = 4;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Lupine,
        Species::Trillium,
        Species::GoldenPaintbrush,
        Species::OregonGrape,
    ];

    /// Uniformly random species
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }

    /// Stable index into per-species tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static SpeciesInfo {
        &SPECIES_TABLE[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn sprite(self) -> URect {
        self.info().sprite
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_index_matches_table_order() {
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i);
        }
        assert_eq!(Species::GoldenPaintbrush.name(), "Golden Paintbrush");
    }

    #[test]
    fn test_sprites_are_distinct_64px_cells() {
        for a in Species::ALL {
            let rect = a.sprite();
            assert_eq!(rect.size(), UVec2::splat(64));
            for b in Species::ALL {
                if a != b {
                    assert_ne!(rect, b.sprite(), "{a} and {b} share a sprite");
                }
            }
        }
    }

    #[test]
    fn test_random_covers_all_species() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; Species::COUNT];
        for _ in 0..200 {
            seen[Species::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
