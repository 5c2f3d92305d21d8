use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors, routes};

// 系统路由
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
}

// 用户路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(routes::user::list_users))
        .route("/add/{name}", get(routes::user::add_user))
}

// 创建主路由并注入应用状态
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(system_routes())
        .merge(user_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
