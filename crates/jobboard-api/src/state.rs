//! Application state.

use jobboard_store::{AccountRepository, ApplicationRepository, JobRepository};

use crate::auth::TokenCodec;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub codec: TokenCodec,
    pub accounts: AccountRepository,
    pub jobs: JobRepository,
    pub applications: ApplicationRepository,
}

impl AppState {
    /// Create new application state with empty repositories.
    pub fn new(config: ApiConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret, config.token_ttl);
        Self {
            config,
            codec,
            accounts: AccountRepository::new(),
            jobs: JobRepository::new(),
            applications: ApplicationRepository::new(),
        }
    }
}
