use std::{fs, path::PathBuf};

use matfield::domain::{Color, LineType, Platform};
use matfield::io::{DocumentFormat, field_config_from_str, load_field_document};
use matfield::{FieldController, FieldType, HeadlessInput, AnimationEngine};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matfield-{}-{name}", std::process::id()))
}

#[test]
fn loads_json_document_from_disk() {
    let path = temp_path("field.json");
    fs::write(
        &path,
        r##"{
            "type": "password",
            "label": "Password",
            "helper": "At least 8 characters",
            "min": 8,
            "errorColor": "#ff0000",
            "disabledLineType": "dashed",
            "animationDuration": 0,
            "quirks": { "platform": "android", "multilineAutogrowGap": true }
        }"##,
    )
    .expect("write fixture");

    let document = load_field_document(&path).expect("document");
    fs::remove_file(&path).ok();

    assert_eq!(document.field.field_type, FieldType::Password);
    assert_eq!(document.field.min, Some(8));
    assert_eq!(document.field.palette.error_color, Color::rgb(255, 0, 0));
    assert_eq!(document.field.disabled_line_type, LineType::Dashed);
    assert_eq!(document.quirks.platform, Platform::Android);
    assert!(document.quirks.multiline_autogrow_gap);
}

#[test]
fn missing_file_names_the_path() {
    let path = temp_path("missing.json");
    let err = load_field_document(&path).expect_err("missing file");
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn bad_color_is_reported() {
    let err = field_config_from_str(r#"{"tintColor":"not-a-color"}"#, DocumentFormat::Json)
        .expect_err("bad color");
    assert!(format!("{err:#}").contains("not-a-color"), "{err:#}");
}

#[test]
fn zero_duration_settles_on_next_tick() {
    let config = field_config_from_str(
        r#"{"label":"Name","animationDuration":0}"#,
        DocumentFormat::Json,
    )
    .expect("config");
    let mut field = FieldController::new(config, HeadlessInput::new(), AnimationEngine::new());
    field.mount();
    field.focus();
    field.tick(std::time::Duration::ZERO);
    assert_eq!(field.state().animation_position(), 1.0);
}
