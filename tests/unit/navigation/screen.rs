use super::*;
use crate::effects::config::EffectVariant;

#[test]
fn new_screen_starts_with_identity_effect() {
    let screen = Screen::with_default_config("home");
    assert_eq!(screen.id(), "home");
    assert!(screen.effect().is_identity());
    assert_eq!(*screen.config(), EffectConfig::default());
}

#[test]
fn screens_parse_from_json_with_default_config() {
    let screens = screens_from_json(
        r#"[
            { "id": "list" },
            { "id": "detail", "config": { "enter": { "push": { "kind": "SlideHorizontal" } } } }
        ]"#,
    )
    .unwrap();
    assert_eq!(screens.len(), 2);
    assert_eq!(*screens[0].config(), EffectConfig::default());
    assert_eq!(
        screens[1].config().enter.push,
        EffectVariant::slide_horizontal()
    );
    assert!(screens[1].effect().is_identity());
}

#[test]
fn blank_id_is_rejected() {
    let err = screens_from_json(r#"[{ "id": "  " }]"#).unwrap_err();
    assert!(matches!(err, NavFxError::Validation(_)));
}

#[test]
fn invalid_config_names_the_screen() {
    let err = screens_from_json(
        r#"[{ "id": "sheet", "config": { "enter": { "pop": { "kind": "SlideVertical", "out_dark_alpha_factor": 2.0 } } } }]"#,
    )
    .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("screen 'sheet': enter.pop:"), "{msg}");
}
