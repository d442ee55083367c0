use scholia::infrastructure::observability::default_env_filter;

#[test]
fn given_warn_level_when_building_default_filter_then_no_target_logs_debug() {
    let filter = default_env_filter("warn").to_string();

    assert!(!filter.contains("debug"));
    assert!(filter.contains("scholia=warn"));
    assert!(filter.contains("tower_http=warn"));
}

#[test]
fn given_debug_level_when_building_default_filter_then_applies_to_crate() {
    let filter = default_env_filter("debug").to_string();

    assert!(filter.contains("scholia=debug"));
}
