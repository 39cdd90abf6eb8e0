use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        NavFxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        NavFxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_screen_names_the_id() {
    let err = NavFxError::unknown_screen("settings");
    assert_eq!(err.to_string(), "unknown screen id 'settings'");
    assert!(matches!(err, NavFxError::UnknownScreenId(ref id) if id == "settings"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = NavFxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
