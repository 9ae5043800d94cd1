use super::*;
use crate::config::ListingConfig;
use std::net::Ipv4Addr;

fn config_with_database(database_url: Option<&str>) -> AppConfig {
    AppConfig {
        bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        database_url: database_url.map(str::to_owned),
        db_max_connections: 1,
        cors_allowed_origins: Vec::new(),
        listing: ListingConfig::default(),
    }
}

#[tokio::test]
async fn open_store_without_database_url_uses_memory() {
    let players = open_store(&config_with_database(None)).await.unwrap();
    let page = players.list(&store::PlayerQuery::default()).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn open_store_reports_bad_database_url_as_error() {
    let err = open_store(&config_with_database(Some("not a database url"))).await.err().unwrap();
    assert!(matches!(err, StartupError::Database(_)), "{err}");
    assert!(err.to_string().starts_with("database init failed: "));
}

#[tokio::test]
async fn bind_reports_address_in_use_as_error() {
    let held = bind(IpAddr::V4(Ipv4Addr::LOCALHOST), 0).await.unwrap();
    let port = held.local_addr().unwrap().port();

    let err = bind(IpAddr::V4(Ipv4Addr::LOCALHOST), port).await.unwrap_err();
    let StartupError::Bind { addr, .. } = &err else {
        panic!("expected bind error, got {err}");
    };
    assert_eq!(addr.port(), port);
    assert!(err.to_string().contains(&format!("127.0.0.1:{port}")));
}

#[test]
fn config_errors_convert_into_startup_errors() {
    let err = StartupError::from(ConfigError::InvalidPort("abc".into()));
    assert_eq!(err.to_string(), "invalid configuration: invalid PORT: abc");
}
