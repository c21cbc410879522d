use ei_server::{AppState, StripeClient, build_router, logger, routes::cors_layer};

use ei_auth::JwtValidator;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = ei_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ei-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Running database migrations...");
    sqlx::migrate!("../crates/ei-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    let jwt_validator = match (config.auth.enabled, config.auth.jwt_secret.as_deref()) {
        (true, Some(secret)) => {
            info!("JWT: HS256 authentication enabled");
            Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes())))
        }
        _ => {
            warn!("Authentication DISABLED - trusting the X-User-Id header");
            None
        }
    };

    let app_state = AppState {
        pool,
        jwt_validator,
        payments: Arc::new(StripeClient::from_config(&config.payment)),
        api_config: config.api.clone(),
    };

    let app = build_router(app_state).layer(cors_layer(&config.server.cors_origins));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
