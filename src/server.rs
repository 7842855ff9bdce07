use crate::config::ServerConfig;
use crate::graphql::{create_schema, GraphQLSchema};
use crate::service::TodoService;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    response::{Html, IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Options for assembling the router
#[derive(Clone, Default)]
pub struct ServerOptions {
    pub graphiql: bool,
    pub metrics: Option<PrometheusHandle>,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "service": "todo-bff",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL IDE endpoint
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Prometheus text exposition
async fn metrics(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
}

/// Create the HTTP router with all routes
pub fn create_server(service: TodoService, options: ServerOptions) -> Router {
    let schema = create_schema(service);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .layer(Extension(schema));

    if options.graphiql {
        router = router.route("/graphiql", get(graphiql));
    }

    if let Some(handle) = options.metrics {
        router = router
            .route("/metrics", get(metrics))
            .layer(Extension(handle));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            )),
    )
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(
    config: &ServerConfig,
    service: TodoService,
    options: ServerOptions,
) -> anyhow::Result<()> {
    let app = create_server(service, options.clone());

    let addr = config.socket_addr().await?;
    let port = config.port;

    info!("🚀 BFF server running on http://localhost:{port}");
    info!("💚 Health check: http://localhost:{port}/health");
    info!("🔎 GraphQL:      http://localhost:{port}/graphql");
    if options.graphiql {
        info!("🧪 GraphiQL UI:  http://localhost:{port}/graphiql");
    }
    if options.metrics.is_some() {
        info!("📈 Metrics:      http://localhost:{port}/metrics");
    }

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
