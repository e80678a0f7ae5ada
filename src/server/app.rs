use anyhow::{anyhow, Result};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{HeaderValue, Method},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::app_context::AppContext;
use crate::graphql::{build_schema, TodoqlSchema};

use super::handlers::health;

#[derive(Clone)]
pub struct AppState {
    pub app: AppContext,
    pub graphql_schema: TodoqlSchema,
}

pub fn create_app(app: AppContext, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        graphql_schema: build_schema(app.clone()),
        app,
    };

    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_credentials(false),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_credentials(false),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    tracing::debug!("GraphQL request completed");
    response.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
