use crate::catalog::{SpotRepository, SurfSpot};
use crate::utils::parse_spot_id;

#[derive(Clone, Default)]
pub struct SpotService {
    spot_repo: SpotRepository,
}

impl SpotService {
    pub fn new(spot_repo: SpotRepository) -> Self {
        Self { spot_repo }
    }

    /// All spots in catalog order
    pub fn list_spots(&self) -> &'static [SurfSpot] {
        self.spot_repo.find_all()
    }

    pub fn get_spot_by_id(&self, id: i64) -> Option<&'static SurfSpot> {
        self.spot_repo.find_by_id(id)
    }

    /// Resolve a raw path segment to a spot. Unparseable ids resolve to `None`.
    pub fn resolve_spot(&self, raw_id: &str) -> Option<&'static SurfSpot> {
        parse_spot_id(raw_id).and_then(|id| self.get_spot_by_id(id))
    }
}
