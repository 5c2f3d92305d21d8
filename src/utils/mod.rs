use std::env;

/// 获取当前主机名，容器环境下通常是容器 ID
pub fn hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| env::var("HOSTNAME").unwrap_or_else(|_| "unknown".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }
}
