use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::graphql::AppSchema;

/// One endpoint: `POST` executes GraphQL, `GET` serves GraphiQL pointed back at it.
pub fn router(schema: AppSchema, path: &str) -> Router {
    let page = GraphiQLSource::build().endpoint(path).finish();

    Router::new()
        .route(
            path,
            get(move || {
                let page = page.clone();
                async move { Html(page) }
            })
            .post(graphql),
        )
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
