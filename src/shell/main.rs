use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use mice_attendance::shared::infrastructure::config::AppConfig;
use mice_attendance::shared::infrastructure::notifier::Notifier;
use mice_attendance::shared::infrastructure::notifier::http::HttpNotifier;
use mice_attendance::shared::infrastructure::notifier::log_only::LogOnlyNotifier;
use mice_attendance::shared::infrastructure::store::in_memory::InMemoryStore;
use mice_attendance::shell::graphql::{AppSchema, build_schema};
use mice_attendance::shell::http::router;
use mice_attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let notifier: Arc<dyn Notifier> = match &config.notifier {
        Some(settings) => {
            tracing::info!(url = %settings.url, "confirmations go to the mail relay");
            Arc::new(HttpNotifier::new(
                &settings.url,
                &settings.sender,
                settings.timeout,
            )?)
        }
        None => {
            tracing::warn!("MICE_NOTIFIER_URL not set, confirmations are only logged");
            Arc::new(LogOnlyNotifier)
        }
    };

    // In-memory store for now
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), store.clone(), store, notifier);
    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
