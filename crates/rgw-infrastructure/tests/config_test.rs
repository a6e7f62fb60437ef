//! Configuration Loader Tests

use rgw_infrastructure::config::{AuthMode, CacheBackend, ConfigLoader};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn defaults_load_without_any_sources() {
    figment::Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.mode, AuthMode::Development);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.cache.ttl_secs, 3600);
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rgw.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        "[server]\nport = 9090\n\n[cache]\nbackend = \"redis\"\nredis_url = \"redis://cache:6379\""
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.cache.backend, CacheBackend::Redis);
    assert_eq!(config.cache.redis_url.as_deref(), Some("redis://cache:6379"));
}

#[test]
fn environment_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("rgw.toml", "[server]\nport = 9090")?;
        jail.set_env("RGW__SERVER__PORT", "7070");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.server.port, 7070);
        Ok(())
    });
}

#[test]
fn production_mode_with_dev_header_fails_validation() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("rgw.toml", "[auth]\nmode = \"production\"")?;

        // dev_header_enabled defaults to true; production must disable it
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn production_mode_with_dev_header_disabled_validates() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "rgw.toml",
            "[auth]\nmode = \"production\"\ndev_header_enabled = false",
        )?;
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.auth.mode, AuthMode::Production);
        assert!(!config.auth.dev_header_enabled);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config.server.port, 8080);
}
