use super::*;

#[test]
fn test_levels_match_table() {
    let l1 = EngineProfile::level(1);
    assert_eq!((l1.max_depth, l1.move_time_ms), (1, 60));
    assert_eq!(l1.search.quiescence_depth, 0);
    assert_eq!(l1.search.aspiration_window, None);
    assert!(!l1.search.eval.use_mobility);

    let l4 = EngineProfile::level(4);
    assert_eq!((l4.max_depth, l4.move_time_ms), (4, 350));
    assert_eq!(l4.search.quiescence_depth, 1);
    assert!(l4.search.eval.use_advancement);
    assert!(!l4.search.eval.use_tempo);

    let l6 = EngineProfile::level(6);
    assert_eq!(l6.search.aspiration_window, Some(120));
    assert!(l6.search.eval.use_master_safety);

    let l8 = EngineProfile::level(8);
    assert_eq!((l8.max_depth, l8.move_time_ms), (8, 10_000));
    assert_eq!(l8.search.quiescence_depth, 3);
    assert_eq!(l8.search.aspiration_window, Some(90));
    assert_eq!(l8.search.eval, EvalConfig::full());
}

#[test]
fn test_levels_clamp() {
    assert_eq!(EngineProfile::level(0), EngineProfile::level(1));
    assert_eq!(EngineProfile::level(42), EngineProfile::level(8));
}

#[test]
fn test_profile_from_toml_fills_defaults() {
    let profile = EngineProfile::from_toml_str(
        r#"
        max_depth = 3
        move_time_ms = 100

        [search]
        quiescence_depth = 2

        [search.eval]
        use_center = true

        [search.eval.weights]
        safety = 1500
        "#,
    )
    .unwrap();

    assert_eq!(profile.max_depth, 3);
    assert_eq!(profile.move_time(), Duration::from_millis(100));
    assert_eq!(profile.search.quiescence_depth, 2);
    assert_eq!(profile.search.aspiration_window, None);
    assert!(profile.search.eval.use_center);
    assert!(!profile.search.eval.use_mobility);
    assert_eq!(profile.search.eval.weights.safety, 1500);
    assert_eq!(profile.search.eval.weights.student, 120);
}

#[test]
fn test_profile_rejects_bad_toml() {
    let err = EngineProfile::from_toml_str("max_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ProfileError::Parse(_)));
}

#[test]
fn test_load_missing_file() {
    let err = EngineProfile::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
}

#[test]
fn test_limits_carry_depth_and_time() {
    let limits = EngineProfile::level(3).limits();
    assert_eq!(limits.depth, 3);
    assert_eq!(limits.move_time, Some(Duration::from_millis(200)));
}
