pub mod auth;
pub mod chat;
pub mod client;
pub mod dm;
pub mod middleware;
pub mod state;
pub mod users;

pub use middleware::AuthUser;
pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    // Every route below the session gate sees a verified AuthUser extension
    let protected = Router::new()
        .route("/logout", post(auth::logout))
        .route("/messages", get(chat::list_messages).post(chat::send_message))
        .route("/online-users", get(users::online_users))
        .route(
            "/dm/:receiver_id",
            get(dm::list_direct_messages).post(dm::send_direct_message),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(client::index))
        .route("/health", get(health))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
