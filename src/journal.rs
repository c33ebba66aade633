use crate::species::Species;
use bevy::prelude::*;

/// Everything the player has documented so far
#[derive(Resource, Default, Debug, Clone)]
pub struct FieldJournal {
    discovered: [bool; Species::COUNT],
    snaps: [u32; Species::COUNT],
    total_snaps: u32,
    /// Species of each saved photo, indexed by photo number
    photos: Vec<Species>,
}

impl FieldJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_discovered(&self, species: Species) -> bool {
        self.discovered[species.index()]
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.iter().filter(|d| **d).count()
    }

    pub fn snaps(&self, species: Species) -> u32 {
        self.snaps[species.index()]
    }

    pub fn total_snaps(&self) -> u32 {
        self.total_snaps
    }

    pub fn photos(&self) -> &[Species] {
        &self.photos
    }

    /// Index the next saved photo will get
    pub fn next_photo_index(&self) -> usize {
        self.photos.len()
    }

    /// Flag a species as discovered and reserve its photo slot.
    ///
    /// Returns the photo index on the first discovery, `None` if the species
    /// was already known.
    pub fn discover(&mut self, species: Species) -> Option<usize> {
        let slot = &mut self.discovered[species.index()];
        if *slot {
            return None;
        }
        *slot = true;
        self.photos.push(species);
        Some(self.photos.len() - 1)
    }

    /// Count a successful in-focus snap
    pub fn record_snap(&mut self, species: Species) {
        self.snaps[species.index()] += 1;
        self.total_snaps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_only_once() {
        let mut journal = FieldJournal::new();
        assert_eq!(journal.discover(Species::Trillium), Some(0));
        assert_eq!(journal.discover(Species::Trillium), None);
        assert_eq!(journal.discover(Species::Lupine), Some(1));
        assert_eq!(journal.photos(), &[Species::Trillium, Species::Lupine]);
        assert_eq!(journal.discovered_count(), 2);
        assert_eq!(journal.next_photo_index(), 2);
    }

    #[test]
    fn test_total_matches_sum_of_species() {
        let mut journal = FieldJournal::new();
        let sequence = [
            Species::Lupine,
            Species::Lupine,
            Species::OregonGrape,
            Species::GoldenPaintbrush,
            Species::Lupine,
        ];
        for species in sequence {
            journal.record_snap(species);
        }
        let sum: u32 = Species::ALL.iter().map(|s| journal.snaps(*s)).sum();
        assert_eq!(journal.total_snaps(), sum);
        assert_eq!(journal.snaps(Species::Lupine), 3);
        assert_eq!(journal.snaps(Species::Trillium), 0);
    }
}
