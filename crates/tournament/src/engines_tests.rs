use super::*;

#[test]
fn test_level_spec_builds_that_level() {
    let engine = create_engine("classical:6", None, 0).unwrap();
    assert_eq!(engine.default_limits().depth, 6);
    assert_eq!(engine.name(), "Classical v1.0");
}

#[test]
fn test_profile_applies_to_plain_classical() {
    let profile = EngineProfile::level(2);
    let engine = create_engine("classical", Some(&profile), 0).unwrap();
    assert_eq!(engine.default_limits().depth, 2);

    let default = create_engine("Classical", None, 0).unwrap();
    assert_eq!(default.default_limits().depth, EngineProfile::default().max_depth);
}

#[test]
fn test_level_and_profile_conflict() {
    let profile = EngineProfile::level(2);
    let err = create_engine("classical:7", Some(&profile), 0).err();
    assert_eq!(err, Some(EngineSpecError::LevelWithProfile("classical:7".into())));
}

#[test]
fn test_bad_specs_are_rejected() {
    assert_eq!(
        create_engine("classical:hard", None, 0).err(),
        Some(EngineSpecError::InvalidLevel("classical:hard".into()))
    );
    assert_eq!(
        create_engine("stockfish", None, 0).err(),
        Some(EngineSpecError::Unknown("stockfish".into()))
    );
}

#[test]
fn test_random_ignores_profile() {
    let profile = EngineProfile::level(2);
    let engine = create_engine("random", Some(&profile), 9).unwrap();
    assert_eq!(engine.default_limits().depth, 1);
    assert_eq!(engine.name(), "Random v1.0");
}
