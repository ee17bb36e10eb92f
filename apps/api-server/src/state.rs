//! Application state - shared across all handlers.

use std::sync::Arc;

use stagepass_core::ports::{PasswordService, TokenService, UserRepository};
use stagepass_core::services::AuthenticationService;
use stagepass_infra::{Argon2PasswordService, InMemoryUserRepository, JwtConfig, JwtTokenService};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub auth: Arc<AuthenticationService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let users: Arc<dyn UserRepository> = {
            if let Some(db_config) = &config.database {
                match stagepass_infra::database::connect(db_config).await {
                    Ok(conn) => Arc::new(stagepass_infra::PostgresUserRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryUserRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryUserRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let users: Arc<dyn UserRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryUserRepository::new())
        };

        let state = Self::with_repository(users, config.jwt.clone());
        tracing::info!("Application state initialized");
        state
    }

    /// Wire the services around an existing repository.
    ///
    /// The API tests use this with an in-memory repository to build the same
    /// application the binary serves.
    pub fn with_repository(users: Arc<dyn UserRepository>, jwt: JwtConfig) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));
        let auth = Arc::new(AuthenticationService::new(
            users.clone(),
            passwords.clone(),
            tokens,
        ));

        Self {
            users,
            passwords,
            auth,
        }
    }
}
