//! API route definitions

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{auth, health, statistics, tasks},
    middleware::{auth::require_auth, logging::logging_middleware},
    state::AppState,
};

/// API routes
///
/// Task and statistics routes sit behind the bearer-token middleware;
/// registration, login, and health do not.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/v1/tasks", get(tasks::list_tasks))
        .route("/api/v1/tasks", post(tasks::create_task))
        .route("/api/v1/tasks/:id", get(tasks::get_task))
        .route("/api/v1/tasks/:id", put(tasks::update_task))
        .route("/api/v1/tasks/:id", delete(tasks::delete_task))
        .route("/api/v1/statistics", get(statistics::get_statistics))
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .merge(protected)
        .layer(axum::middleware::from_fn(logging_middleware))
        // CORS
        .layer(CorsLayer::permissive())
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Combined routes
pub fn all_routes(state: AppState) -> Router<AppState> {
    api_routes(state).merge(swagger_routes())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        tasks::create_task,
        tasks::list_tasks,
        tasks::get_task,
        tasks::update_task,
        tasks::delete_task,
        statistics::get_statistics,
    ),
    components(schemas(
        crate::models::RegisterRequest,
        crate::models::AuthRequest,
        crate::models::AuthResponse,
        crate::models::UserInfo,
        crate::models::CreateTaskRequest,
        crate::models::UpdateTaskRequest,
        crate::models::TaskResponse,
        crate::models::TaskListResponse,
        crate::models::StatisticsResponse,
        crate::models::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    info(
        title = "Taskboard API",
        version = "1.0.0",
        description = "RESTful API for task tracking and completion statistics"
    )
)]
struct ApiDoc;
