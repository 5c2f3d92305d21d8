use std::env;
use std::fs;
use std::time::Duration;

/// 默认的 Docker secret 密码文件路径
const DEFAULT_PASSWORD_FILE: &str = "/run/secrets/postgres_password";

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub users_cache_ttl_secs: u64,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            // 未显式提供连接串时，按部署约定由 POSTGRES_* 变量拼接
            let user = env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".into());
            let service = env::var("POSTGRES_SERVICE").unwrap_or_else(|_| "db".into());
            let database = env::var("POSTGRES_DB").unwrap_or_else(|_| "db".into());
            compose_database_url(&user, &read_postgres_password(), &service, &database)
        });

        Config {
            database_url,
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379/0".into()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            users_cache_ttl_secs: env::var("USERS_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn users_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.users_cache_ttl_secs)
    }
}

/// 密码优先从 secret 文件读取，读不到时退回环境变量
fn read_postgres_password() -> String {
    let path =
        env::var("POSTGRES_PASSWORD_FILE").unwrap_or_else(|_| DEFAULT_PASSWORD_FILE.into());
    match fs::read_to_string(&path) {
        Ok(contents) => contents.trim().to_string(),
        Err(_) => env::var("POSTGRES_PASSWORD").unwrap_or_default(),
    }
}

fn compose_database_url(user: &str, password: &str, service: &str, database: &str) -> String {
    format!(
        "postgresql://{}:{}@{}:5432/{}",
        user, password, service, database
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_database_url_from_parts() {
        let url = compose_database_url("postgres", "secret", "db", "appdb");
        assert_eq!(url, "postgresql://postgres:secret@db:5432/appdb");
    }

    #[test]
    fn cache_ttl_is_exposed_as_duration() {
        let config = Config {
            database_url: String::new(),
            redis_url: String::new(),
            server_host: String::new(),
            server_port: 0,
            users_cache_ttl_secs: 120,
            environment: "test".into(),
        };
        assert_eq!(config.users_cache_ttl(), Duration::from_secs(120));
    }
}
