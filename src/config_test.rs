use super::*;

// Each test uses unique env var names to avoid races with parallel tests.
// `from_env` reads fixed names, so only one test touches those.

#[test]
fn env_parse_reads_valid_value() {
    let key = "__TEST_EP_VALID_5120__";
    unsafe { std::env::set_var(key, " 42 ") };
    assert_eq!(env_parse(key, 7_u32), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_EP_GARBAGE_5121__";
    unsafe { std::env::set_var(key, "lots") };
    assert_eq!(env_parse(key, 7_u32), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("__TEST_EP_SURELY_UNSET_5122__", 9_u32), 9);
}

#[test]
fn env_string_treats_blank_as_unset() {
    let key = "__TEST_ES_BLANK_5123__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_string(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn parse_origins_splits_and_trims() {
    assert_eq!(
        parse_origins(" http://localhost:3000, http://127.0.0.1:3000 ,,"),
        vec!["http://localhost:3000".to_owned(), "http://127.0.0.1:3000".to_owned()]
    );
    assert!(parse_origins(" , ").is_empty());
}

#[test]
fn listing_config_clamps_default_into_range() {
    assert_eq!(ListingConfig::new(500, 100), ListingConfig { default_per_page: 100, max_per_page: 100 });
    assert_eq!(ListingConfig::new(0, 100), ListingConfig { default_per_page: 1, max_per_page: 100 });
    assert_eq!(ListingConfig::new(0, 0), ListingConfig { default_per_page: 1, max_per_page: 1 });
    assert_eq!(ListingConfig::default(), ListingConfig { default_per_page: 20, max_per_page: 100 });
}

#[test]
fn from_env_defaults_and_strict_port() {
    for key in [
        "PORT",
        "BIND_ADDR",
        "DATABASE_URL",
        "DB_MAX_CONNECTIONS",
        "CORS_ALLOWED_ORIGINS",
        "PLAYERS_DEFAULT_PAGE_SIZE",
        "PLAYERS_MAX_PAGE_SIZE",
    ] {
        unsafe { std::env::remove_var(key) };
    }

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(config.database_url.is_none());
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(config.cors_allowed_origins.is_empty());
    assert_eq!(config.listing, ListingConfig::default());

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(AppConfig::from_env(), Err(ConfigError::InvalidPort("not-a-port".into())));

    unsafe { std::env::set_var("PORT", "8080") };
    unsafe { std::env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:3000") };
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000".to_owned()]);

    unsafe { std::env::remove_var("PORT") };
    unsafe { std::env::remove_var("CORS_ALLOWED_ORIGINS") };
}
