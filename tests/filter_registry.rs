use serde_json::{json, Value};

use nameforge::config::ConfigDefaults;
use nameforge::filter_host::{FilterError, FilterManager, FilterRegistrar, NameFilter};

#[test]
fn builtins_are_registered() {
    let manager = FilterManager::with_builtins();
    assert_eq!(
        manager.filter_names(),
        vec!["increment_names".to_string(), "sanitize_name".to_string()]
    );
    assert!(manager.get("increment_names").is_some());
    assert!(manager.get("nope").is_none());
}

#[test]
fn increment_via_json_boundary() {
    let manager = FilterManager::with_builtins();
    let out = manager
        .apply("increment_names", &json!(["host001", "host099"]), &[json!(1)])
        .unwrap();
    assert_eq!(out, json!("host000"));
}

#[test]
fn step_defaults_to_one_without_args() {
    let manager = FilterManager::with_builtins();
    let out = manager
        .apply("increment_names", &json!(["web006"]), &[])
        .unwrap();
    assert_eq!(out, json!("web007"));
}

#[test]
fn absence_is_null_not_error() {
    let manager = FilterManager::with_builtins();
    let out = manager
        .apply("increment_names", &json!(["alpha", "beta"]), &[])
        .unwrap();
    assert!(out.is_null());
    let out = manager.apply("increment_names", &json!([]), &[]).unwrap();
    assert!(out.is_null());
}

#[test]
fn unknown_filter_is_an_error() {
    let manager = FilterManager::with_builtins();
    match manager.apply("does_not_exist", &json!([]), &[]) {
        Err(FilterError::UnknownFilter { name }) => assert_eq!(name, "does_not_exist"),
        other => panic!("expected UnknownFilter, got {:?}", other),
    }
}

#[test]
fn increment_rejects_malformed_input() {
    let manager = FilterManager::with_builtins();
    assert!(matches!(
        manager.apply("increment_names", &json!("not a list"), &[]),
        Err(FilterError::InvalidInput { .. })
    ));
    assert!(matches!(
        manager.apply("increment_names", &json!(["ok", 42]), &[]),
        Err(FilterError::InvalidInput { .. })
    ));
    assert!(matches!(
        manager.apply("increment_names", &json!(["vol001"]), &[json!("two")]),
        Err(FilterError::InvalidArg { index: 0, .. })
    ));
}

#[test]
fn sanitize_handles_string_and_list() {
    let manager = FilterManager::with_builtins();
    let out = manager
        .apply("sanitize_name", &json!("My Cool Volume"), &[])
        .unwrap();
    assert_eq!(out, json!("my-cool-volume"));

    let out = manager
        .apply("sanitize_name", &json!(["Web Tier", "DB Tier"]), &[])
        .unwrap();
    assert_eq!(out, json!(["web-tier", "db-tier"]));

    assert!(matches!(
        manager.apply("sanitize_name", &json!(42), &[]),
        Err(FilterError::InvalidInput { .. })
    ));
}

struct ShadowFilter;

impl NameFilter for ShadowFilter {
    fn name(&self) -> &str {
        "increment_names"
    }
    fn apply(&self, _input: &Value, _args: &[Value]) -> Result<Value, FilterError> {
        Ok(json!("shadowed"))
    }
}

#[test]
fn re_registration_under_same_name_wins() {
    let mut manager = FilterManager::with_builtins();
    manager.register_filter(Box::new(ShadowFilter));
    assert_eq!(manager.filter_names().len(), 2);
    let out = manager.apply("increment_names", &json!([]), &[]).unwrap();
    assert_eq!(out, json!("shadowed"));
}

struct DefaultsFilter {
    id: &'static str,
    step: i64,
    app_name: Option<&'static str>,
}

impl NameFilter for DefaultsFilter {
    fn name(&self) -> &str {
        self.id
    }
    fn apply(&self, _input: &Value, _args: &[Value]) -> Result<Value, FilterError> {
        Ok(Value::Null)
    }
    fn config_defaults(&self) -> Option<ConfigDefaults> {
        Some(ConfigDefaults {
            app_name: self.app_name.map(str::to_string),
            default_step: Some(self.step),
            filter_dir: None,
            logging: None,
        })
    }
}

#[test]
fn config_defaults_merge_last_wins_per_field() {
    let mut manager = FilterManager::new();
    manager.register_filter(Box::new(DefaultsFilter {
        id: "a_filter",
        step: 2,
        app_name: Some("PackA"),
    }));
    manager.register_filter(Box::new(DefaultsFilter {
        id: "b_filter",
        step: 5,
        app_name: None,
    }));

    let merged = manager.collect_config_defaults();
    // Merge walks identifiers in sorted order; b_filter overrides the step
    // but supplies no app_name, so PackA's value survives.
    assert_eq!(merged.default_step, Some(5));
    assert_eq!(merged.app_name.as_deref(), Some("PackA"));
}
