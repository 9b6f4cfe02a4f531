use crate::handlers::{
    health::health_check,
    report::generate_report,
    scenarios::{create_scenario, delete_scenario, get_scenario, get_scenarios},
    simulate::simulate,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Stateless projection
        .route("/simulate", post(simulate))
        // Saved scenarios
        .route("/scenarios", post(create_scenario).get(get_scenarios))
        .route("/scenarios/:id", get(get_scenario).delete(delete_scenario))
        // Reports
        .route("/report/generate", post(generate_report))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// [`create_router`] plus request metrics exposed on `/metrics`.
///
/// Installs a process-wide recorder, so call at most once per process.
pub fn create_router_with_metrics(state: AppState) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    create_router(state)
        .route(
            "/metrics",
            get(move || {
                let handle = metric_handle.clone();
                async move { handle.render() }
            }),
        )
        .layer(prometheus_layer)
}
