/// 用户列表快照的缓存键
const USERS_LIST_KEY: &str = "users";

/// 生成用户列表缓存键
pub fn users_list_key() -> String {
    USERS_LIST_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_list_key_is_fixed() {
        assert_eq!(users_list_key(), "users");
    }
}
