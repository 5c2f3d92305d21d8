use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{MAX_NAME_LEN, User};

/// 用户列表，读穿缓存
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listing =
        User::list_cached(&state.pool, &state.redis, state.config.users_cache_ttl_secs).await?;

    // 缓存中保存的就是 JSON 文本，原样返回并显式声明内容类型
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        listing,
    ))
}

/// 新增用户并使列表缓存失效
#[axum::debug_handler]
pub async fn add_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // 校验名称：拒绝空白名称和超出列宽的名称
    let name = name.trim().to_string();
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "名称长度必须在1到{}个字符之间",
            MAX_NAME_LEN
        )));
    }

    let user = User::create(&state.pool, &state.redis, &name).await?;

    Ok((StatusCode::OK, format!("Added user {}!", user.name)))
}
