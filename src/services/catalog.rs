use crate::api::client::{get_json, StatsApi};
use crate::api::endpoints;
use crate::api::models::CatalogChampion;
use crate::error::StatsError;
use crate::roles::Role;
use std::sync::Arc;

/// Static champion catalog lookups.
pub struct ChampionCatalog {
    api: Arc<dyn StatsApi>,
}

impl ChampionCatalog {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        ChampionCatalog { api }
    }

    pub fn all(&self) -> Result<Vec<CatalogChampion>, StatsError> {
        get_json(self.api.as_ref(), endpoints::CHAMPIONS, &[])
    }

    pub fn by_id(&self, id: &str) -> Result<CatalogChampion, StatsError> {
        get_json(self.api.as_ref(), &endpoints::champion(id.trim()), &[]).map_err(|e| {
            if e.is_not_found() {
                StatsError::ChampionNotFound(id.trim().to_string())
            } else {
                e
            }
        })
    }

    pub fn by_role(&self, role: Role) -> Result<Vec<CatalogChampion>, StatsError> {
        get_json(
            self.api.as_ref(),
            &endpoints::champions_by_role(role.label()),
            &[],
        )
    }
}
