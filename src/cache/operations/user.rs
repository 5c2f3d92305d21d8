use std::sync::Arc;

use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::user_keys;

/// 用户列表缓存操作
///
/// 缓存中保存的是序列化好的 JSON 文本，读写均不做反序列化，
/// 命中时由调用方原样返回。
pub struct UserCacheOperations;

impl UserCacheOperations {
    /// 读取缓存的用户列表快照，未命中返回 None
    pub async fn get_users_listing(
        redis: &Arc<RedisClient>,
    ) -> Result<Option<String>, redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::users_list_key();
        let cached: Option<String> = conn.get(key).await?;

        Ok(cached)
    }

    /// 将序列化好的用户列表写入缓存并设置过期时间
    pub async fn cache_users_listing(
        redis: &Arc<RedisClient>,
        listing: &str,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::users_list_key();
        let _: () = conn.set_ex(key, listing, ttl_secs).await?;

        Ok(())
    }

    /// 删除用户列表缓存，键不存在时同样视为成功
    pub async fn invalidate_users_listing(
        redis: &Arc<RedisClient>,
    ) -> Result<(), redis::RedisError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::users_list_key();
        let _: () = conn.del(key).await?;

        Ok(())
    }
}
