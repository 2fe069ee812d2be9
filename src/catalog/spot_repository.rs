use tracing::{debug, instrument};

use crate::catalog::models::{SurfSpot, SURF_SPOTS};

/// Read-only access to the surf spot catalog
#[derive(Clone, Copy)]
pub struct SpotRepository {
    spots: &'static [SurfSpot],
}

impl Default for SpotRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotRepository {
    pub fn new() -> Self {
        Self {
            spots: &SURF_SPOTS,
        }
    }

    /// All spots in catalog order
    pub fn find_all(&self) -> &'static [SurfSpot] {
        self.spots
    }

    /// Linear scan by id; `None` when no spot has that id
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Option<&'static SurfSpot> {
        let spot = self.spots.iter().find(|spot| spot.id == id);
        debug!("Catalog lookup for spot {}: found={}", id, spot.is_some());
        spot
    }

    pub fn count(&self) -> usize {
        self.spots.len()
    }
}
