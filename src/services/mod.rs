//! Business logic services

pub mod accounts;
pub mod catalog;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub accounts: accounts::AccountsService,
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            accounts: accounts::AccountsService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository),
        }
    }
}
