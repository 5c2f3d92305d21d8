use chrono::{DateTime, Utc};
use redis::Client as RedisClient;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::cache::UserCacheOperations;

/// 名称列的最大长度，与表结构保持一致
pub const MAX_NAME_LEN: usize = 80;

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

/// 对外返回的用户信息，也是缓存快照的元素类型
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

impl User {
    /// 初始化表结构，启动时执行一次
    pub async fn ensure_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name VARCHAR(80) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// 读取用户列表，优先返回缓存快照，未命中时回源并回填
    pub async fn list_cached(
        pool: &PgPool,
        redis: &Arc<RedisClient>,
        ttl_secs: u64,
    ) -> Result<String, sqlx::Error> {
        // 尝试从缓存读取，缓存不可用时直接回源
        match UserCacheOperations::get_users_listing(redis).await {
            Ok(Some(listing)) => {
                tracing::debug!("Get users listing from cache");
                return Ok(listing);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    "Users listing cache read failed, falling back to database: {}",
                    e
                );
            }
        }

        let users = Self::list_all(pool).await?;
        let infos = users.into_iter().map(UserInfo::from).collect::<Vec<_>>();
        let listing = serde_json::to_string(&infos)
            .map_err(|e| sqlx::Error::Protocol(format!("Failed to serialize users: {}", e)))?;

        // 回填缓存，失败不影响本次请求
        match UserCacheOperations::cache_users_listing(redis, &listing, ttl_secs).await {
            Ok(()) => tracing::debug!("Set users listing to cache"),
            Err(e) => tracing::warn!("Failed to cache users listing: {}", e),
        }

        Ok(listing)
    }

    /// 插入新用户，提交成功后使列表缓存失效
    pub async fn create(
        pool: &PgPool,
        redis: &Arc<RedisClient>,
        name: &str,
    ) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        tracing::info!("Added user {} (id {})", user.name, user.id);

        // 删除列表缓存，失败时快照会在 TTL 内自然过期
        if let Err(e) = UserCacheOperations::invalidate_users_listing(redis).await {
            tracing::warn!("Failed to invalidate users listing cache: {}", e);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: i32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_info_keeps_only_id_and_name() {
        let info = UserInfo::from(sample_user(1, "Alice"));
        assert_eq!(
            info,
            UserInfo {
                id: 1,
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn empty_listing_serializes_to_empty_array() {
        let listing = serde_json::to_string(&Vec::<UserInfo>::new()).unwrap();
        assert_eq!(listing, "[]");
    }

    #[test]
    fn listing_serializes_to_compact_json_array() {
        let infos = vec![
            UserInfo::from(sample_user(1, "Alice")),
            UserInfo::from(sample_user(2, "Bob")),
        ];
        let listing = serde_json::to_string(&infos).unwrap();
        assert_eq!(listing, r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#);
    }

    #[test]
    fn listing_round_trips_without_losing_users() {
        let infos = vec![
            UserInfo::from(sample_user(1, "Alice")),
            UserInfo::from(sample_user(2, "Bob")),
        ];
        let listing = serde_json::to_string(&infos).unwrap();
        let decoded: Vec<UserInfo> = serde_json::from_str(&listing).unwrap();
        assert_eq!(decoded, infos);
    }

    #[test]
    fn created_at_is_not_exposed() {
        let json = serde_json::to_string(&sample_user(1, "Alice")).unwrap();
        assert!(!json.contains("created_at"));
    }
}
