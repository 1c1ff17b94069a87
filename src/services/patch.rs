use crate::api::client::{get_json, StatsApi};
use crate::api::endpoints;
use crate::api::models::{PatchInfo, PatchListDto};
use crate::error::StatsError;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Probe response. Rows are counted, never parsed.
#[derive(Deserialize)]
struct RowCount {
    #[serde(default)]
    data: Vec<IgnoredAny>,
}

/// Finds the newest patch that actually has statistics behind it.
pub struct PatchResolver {
    api: Arc<dyn StatsApi>,
}

impl PatchResolver {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        PatchResolver { api }
    }

    /// Candidate patches in server order (newest first).
    pub fn available_patches(&self) -> Result<Vec<PatchInfo>, StatsError> {
        let list: PatchListDto = get_json(self.api.as_ref(), endpoints::CURRENT_PATCH, &[])?;
        Ok(list.patches)
    }

    /// The newest published patch, whether or not it has data yet.
    pub fn current_patch(&self) -> Result<PatchInfo, StatsError> {
        self.available_patches()?
            .into_iter()
            .next()
            .ok_or(StatsError::NoPatchAvailable)
    }

    /// Probes one patch with a single-row query. Any error counts as no data.
    pub fn has_data(&self, patch: &str) -> bool {
        let query = [
            ("limit", "1".to_string()),
            ("page", "1".to_string()),
            ("patch", patch.to_string()),
        ];

        match get_json::<RowCount>(self.api.as_ref(), endpoints::CHAMPION_STATS, &query) {
            Ok(page) => !page.data.is_empty(),
            Err(e) => {
                warn!(patch, error = %e, "probe failed, treating patch as empty");
                false
            }
        }
    }

    /// Probes candidates one after another and returns the first with data.
    /// Later candidates are never probed once a hit is found.
    pub fn resolve_patch_with_data(&self) -> Result<PatchInfo, StatsError> {
        let patches = self.available_patches()?;
        if patches.is_empty() {
            return Err(StatsError::NoPatchAvailable);
        }

        for candidate in patches {
            debug!(patch = %candidate.patch, "checking patch for statistics");
            if self.has_data(&candidate.patch) {
                info!(patch = %candidate.patch, "resolved patch with data");
                return Ok(candidate);
            }
            debug!(patch = %candidate.patch, "no data, trying next patch");
        }

        Err(StatsError::NoDataForAnyPatch)
    }
}
