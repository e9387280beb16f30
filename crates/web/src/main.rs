use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use importer::SteamLeaderboardClient;
use storage::Database;
use storage::catalog::Catalog;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mailer;
mod state;

use config::Config;
use mailer::SmtpMailer;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboards::handlers::get_leaderboard,
        features::leaderboards::handlers::get_hypothetical_rank,
        features::leaderboards::handlers::get_world_records,
        features::runs::handlers::get_run,
        features::runs::handlers::create_run,
        features::runs::handlers::flag_run,
        features::runs::handlers::delete_run,
        features::runners::handlers::get_runner_runs,
        features::steam::handlers::steam_lookup,
    ),
    components(
        schemas(
            features::leaderboards::handlers::LeaderboardResponse,
            features::leaderboards::handlers::LeaderboardEntry,
            features::leaderboards::handlers::HypotheticalRankResponse,
            features::runs::handlers::FlagRunRequest,
            features::runs::handlers::CreateRunResponse,
            features::runners::handlers::RunnerRunsResponse,
            features::steam::handlers::SteamLookupResponse,
            storage::dto::run::CreateRunRequest,
            storage::dto::run::RunnerRunView,
            storage::dto::leaderboard::RankedRun,
            storage::dto::leaderboard::RunnerInfo,
            storage::dto::leaderboard::WorldRecord,
            storage::dto::leaderboard::RecordsByClass,
            storage::models::Run,
            storage::models::Category,
            storage::models::CategoryClass,
            storage::models::Goal,
            storage::models::Loadout,
            storage::services::moderation::FlagOutcome,
        )
    ),
    tags(
        (name = "leaderboards", description = "Category leaderboards and world records"),
        (name = "runs", description = "Run submission, lookup and moderation"),
        (name = "runners", description = "Per-runner run history"),
        (name = "steam", description = "External leaderboard import probe"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Delverank API");

    let config = Config::from_env().context("Failed to load API configuration")?;

    let catalog = match &config.catalog_dir {
        Some(dir) => Catalog::from_dir(dir).context("Failed to load catalog override")?,
        None => Catalog::builtin().context("Builtin catalog is invalid")?,
    };
    tracing::info!(
        categories = catalog.all().len(),
        loadouts = catalog.loadouts().len(),
        "Catalogs loaded"
    );

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database ready");

    let mailer = SmtpMailer::new(&config.smtp).context("Failed to configure SMTP notifier")?;

    let state = AppState {
        db,
        catalog: Arc::new(catalog),
        mailer: Arc::new(mailer),
        steam: Arc::new(SteamLeaderboardClient::new()),
    };

    let app = Router::new()
        .nest("/api/leaderboards", features::leaderboards::routes())
        .nest("/api/runs", features::runs::routes())
        .nest("/api/runners", features::runners::routes())
        .nest("/api/steam", features::steam::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
