use std::sync::Arc;

use importer::SteamLeaderboardClient;
use storage::Database;
use storage::catalog::Catalog;
use storage::notify::Notifier;

/// Shared application state. The catalogs are populated once at startup
/// and read-only afterwards, so unsynchronized concurrent reads are safe.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: Arc<Catalog>,
    pub mailer: Arc<dyn Notifier>,
    pub steam: Arc<SteamLeaderboardClient>,
}
