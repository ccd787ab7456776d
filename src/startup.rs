//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AuthService, AuthServiceImpl, ContentService, ContentServiceImpl, DictionaryService,
    DictionaryServiceImpl, HashtagService, HashtagServiceImpl, SeedService, UserService,
    UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgContentRepository, PgHashtagRepository, PgInvitationRepository, PgPasswordResetRepository,
    PgUserRepository, PgWordRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::crypto::Passwords;
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub dictionary: Arc<dyn DictionaryService>,
    pub hashtags: Arc<dyn HashtagService>,
    pub content: Arc<dyn ContentService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire PostgreSQL-backed services.
    pub fn from_pool(pool: PgPool, settings: Settings, id_generator: Arc<SnowflakeGenerator>) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

        let auth = AuthServiceImpl::new(
            user_repo.clone(),
            Arc::new(PgInvitationRepository::new(pool.clone())),
            Arc::new(PgPasswordResetRepository::new(pool.clone())),
            id_generator.clone(),
            Passwords::new(),
            settings.jwt.clone(),
            settings.auth.clone(),
        );

        Self {
            auth: Arc::new(auth),
            users: Arc::new(UserServiceImpl::new(user_repo)),
            dictionary: Arc::new(DictionaryServiceImpl::new(
                Arc::new(PgWordRepository::new(pool.clone())),
                id_generator,
            )),
            hashtags: Arc::new(HashtagServiceImpl::new(Arc::new(PgHashtagRepository::new(
                pool.clone(),
            )))),
            content: Arc::new(ContentServiceImpl::new(Arc::new(PgContentRepository::new(pool)))),
            settings: Arc::new(settings),
        }
    }
}

/// Router with every route and the outer request layers.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connect, migrate, seed and bind.
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to PostgreSQL")?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        let id_generator = Arc::new(SnowflakeGenerator::new(
            settings.snowflake.epoch,
            settings.snowflake.machine_id,
        ));

        SeedService::new(
            Arc::new(PgUserRepository::new(db.clone())),
            id_generator.clone(),
            Passwords::new(),
        )
        .run(&settings.seed)
        .await
        .context("Failed to seed accounts")?;

        let addr = settings.server_addr();
        let state = AppState::from_pool(db, settings, id_generator);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
