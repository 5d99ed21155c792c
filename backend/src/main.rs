use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("analysis")
        }));
    tracing::subscriber::set_global_default(registry)?;

    let args = backend::config::Args::parse();
    tracing::info!("Starting with {:?}", args);

    let datasets = std::sync::Arc::new(backend::datasets::Datasets::new(
        args.data_dir.clone(),
        !args.no_cache,
    ));
    if !datasets.dir().is_dir() {
        tracing::warn!("Data directory {:?} does not exist", datasets.dir());
    }

    let session_store = tower_sessions::MemoryStore::default();
    let session_layer = tower_sessions::SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(tower_sessions::Expiry::OnInactivity(
            time::Duration::hours(48),
        ));

    let frontend = tower_http::services::ServeDir::new(&args.frontend_dir).fallback(
        tower_http::services::ServeFile::new(args.frontend_dir.join("index.html")),
    );

    let router = axum::Router::new()
        .nest("/api", backend::api::router(datasets))
        .layer(session_layer)
        .fallback_service(frontend);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("Listening on {}", args.bind);
    axum::serve(listener, router).await?;

    Ok(())
}
