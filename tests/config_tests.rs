//! Configuration file loading
use std::io::Write;

use tripmaster::AppConfig;

#[tokio::test]
async fn loads_overrides_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "server": {{ "hotel_port": 9086 }},
            "browser": {{ "max_scroll_rounds": 5 }}
        }}"#
    )
    .unwrap();

    let config = AppConfig::load(file.path()).await.unwrap();
    assert_eq!(config.server.hotel_port, 9086);
    assert_eq!(config.server.flight_port, 8085);
    assert_eq!(config.browser.max_scroll_rounds, 5);
    assert_eq!(config.pricing.ils_to_usd_rate, 3.75);
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let result = AppConfig::load(std::path::Path::new("/nonexistent/tripmaster.json")).await;
    assert!(result.is_err());
}
