use nameforge::config::{Config, ConfigDefaults};

#[test]
fn apply_fills_only_unset_fields() {
    let mut cfg = Config {
        app_name: Some("ops".to_string()),
        default_step: None,
        filter_dir: None,
        logging: None,
    };
    ConfigDefaults {
        app_name: Some("ignored".to_string()),
        default_step: Some(4),
        filter_dir: Some("packs".to_string()),
        logging: None,
    }
    .apply(&mut cfg);

    assert_eq!(cfg.app_name.as_deref(), Some("ops"));
    assert_eq!(cfg.default_step, Some(4));
    assert_eq!(cfg.filter_dir.as_deref(), Some("packs"));
}

#[test]
fn resolve_step_precedence() {
    let cfg = Config {
        app_name: None,
        default_step: Some(3),
        filter_dir: None,
        logging: None,
    };
    assert_eq!(cfg.resolve_step(Some(-2)), -2);
    assert_eq!(cfg.resolve_step(None), 3);

    let bare = Config {
        app_name: None,
        default_step: None,
        filter_dir: None,
        logging: None,
    };
    assert_eq!(bare.resolve_step(None), 1);
}

#[test]
fn config_parses_from_toml() {
    let cfg: Config = toml::from_str(
        r#"
        app_name = "provisioner"
        default_step = 2
        filter_dir = "filters"

        [logging]
        disable_console = true
        json_path = "logs/audit.jsonl"
        json_max_bytes = 1024
        json_rotate = 2
        "#,
    )
    .unwrap();

    assert_eq!(cfg.app_name.as_deref(), Some("provisioner"));
    assert_eq!(cfg.default_step, Some(2));
    assert_eq!(cfg.filter_dir.as_deref(), Some("filters"));
    let logging = cfg.logging.unwrap();
    assert_eq!(logging.disable_console, Some(true));
    assert_eq!(logging.json_path.as_deref(), Some("logs/audit.jsonl"));
    assert_eq!(logging.json_max_bytes, Some(1024));
    assert_eq!(logging.json_rotate, Some(2));
}

#[test]
fn default_config_is_usable() {
    let cfg = Config::default();
    assert_eq!(cfg.default_step, Some(1));
    assert!(cfg.filter_dir.is_none());
}
