use engine::{EngineError, storage};
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    let db = match &server.database {
        Database::Memory => storage::open_memory().await,
        Database::Sqlite(path) => storage::open_file(path, server.max_connections).await,
    }
    .inspect_err(|err: &EngineError| tracing::error!("failed to initialize database: {err}"))?;
    tracing::info!("database ready: {:?}", server.database);

    let engine = engine::Engine::builder()
        .database(db)
        .build()
        .await
        .inspect_err(|err| tracing::error!("failed to build engine from database: {err}"))?;

    let addr = format!("{}:{}", server.bind, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .inspect_err(|err| tracing::error!("failed to bind server listener on {addr}: {err}"))?;

    let options = server::ServerOptions {
        name: server.name,
        version: server.version,
        author: server.author,
        categories: server.categories,
    };
    server::run_with_listener(engine, options, listener)
        .await
        .inspect_err(|err| tracing::error!("server failed: {err}"))?;

    Ok(())
}
