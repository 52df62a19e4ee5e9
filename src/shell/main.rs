use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use timesheets::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use timesheets::modules::timesheets::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use timesheets::modules::timesheets::adapters::outbound::entry_store_postgres::PostgresEntryStore;
use timesheets::shell::config::Settings;
use timesheets::shell::http::router;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("loading settings")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: Arc<dyn EntryStore> = match &settings.database_url {
        Some(url) => {
            let store = PostgresEntryStore::connect(url.expose_secret(), settings.max_connections)
                .await
                .context("connecting to postgres")?;
            store.migrate().await.context("running migrations")?;
            info!(max_connections = settings.max_connections, "using postgres entry store");
            Arc::new(store)
        }
        None => {
            warn!("no database url configured, entries are kept in memory only");
            Arc::new(InMemoryEntryStore::new())
        }
    };

    let app = router(AppState::new(store));
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("binding {}:{}", settings.host, settings.port))?;
    info!(address = %listener.local_addr()?, "timesheets listening");
    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}
