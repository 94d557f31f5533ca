use crate::{
    constants::RESOURCE_CATALOG,
    models::domain::{ResourceBundle, ResourceCategory},
};

#[cfg_attr(test, mockall::automock)]
pub trait ResourceRepository: Send + Sync {
    fn find_bundle(&self, category: ResourceCategory) -> Option<ResourceBundle>;
}

pub struct StaticResourceRepository {
    catalog: &'static [(ResourceCategory, ResourceBundle)],
}

impl StaticResourceRepository {
    pub fn new() -> Self {
        Self::with_catalog(RESOURCE_CATALOG)
    }

    pub fn with_catalog(catalog: &'static [(ResourceCategory, ResourceBundle)]) -> Self {
        Self { catalog }
    }
}

impl Default for StaticResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRepository for StaticResourceRepository {
    fn find_bundle(&self, category: ResourceCategory) -> Option<ResourceBundle> {
        self.catalog
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, bundle)| *bundle)
    }
}
