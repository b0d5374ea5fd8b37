use book_catalog::{
    adapters::{
        in_memory::InMemoryBookRepository, mongodb::MongoBookRepository,
        postgres::PostgresBookRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::{AppConfig, StorageBackend},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Initialize the repository for the configured backend
    let book_repository: Arc<dyn BookRepository> = match config.storage_backend {
        StorageBackend::MongoDb => {
            let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
                .await
                .expect("Failed to connect to MongoDB");
            let database = client.database(&config.db_name);

            tracing::info!("Connected to MongoDB database {}", config.db_name);

            Arc::new(MongoBookRepository::new(&database))
        }
        StorageBackend::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            tracing::info!("Connected to PostgreSQL");

            Arc::new(PostgresBookRepository::new(pool))
        }
        StorageBackend::InMemory => {
            tracing::warn!("Using in-memory storage; books are lost on restart");
            Arc::new(InMemoryBookRepository::new())
        }
    };

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps: ServiceDependencies { book_repository },
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
