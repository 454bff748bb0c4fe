//! App Configuration
//!
//! Defaults from the store crate, overridable at build time:
//! `USER_MANAGER_API_URL`, `USER_MANAGER_LOG`.

use user_store::StoreConfig;

pub fn app_config() -> StoreConfig {
    let mut config = StoreConfig::default();
    if let Some(url) = option_env!("USER_MANAGER_API_URL") {
        config = config.with_api_url(url);
    }
    if let Some(level) = option_env!("USER_MANAGER_LOG") {
        config = config.with_log_level(level);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_keeps_storage_key() {
        let config = app_config();

        assert_eq!(config.storage_key, "users");
        assert!(config.api_url.starts_with("http"));
    }
}
