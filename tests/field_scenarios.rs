use std::{cell::RefCell, rc::Rc, time::Duration};

use matfield::domain::{Color, Palette, Platform};
use matfield::field::{
    ACTIVE_POSITION, ERRORED_POSITION, REST_POSITION, counter_display, focus_target,
};
use matfield::prelude::*;

const SETTLE: Duration = Duration::from_millis(250);

fn mounted(config: FieldConfig) -> FieldController {
    let mut field = FieldController::new(config, HeadlessInput::new(), AnimationEngine::new());
    field.mount();
    field
}

fn record<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Rc<RefCell<Vec<T>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    (Rc::clone(&log), log)
}

#[test]
fn animation_targets_follow_focus_and_error() {
    for (has_error, focused, expected) in [
        (false, false, REST_POSITION),
        (false, true, ACTIVE_POSITION),
        (true, false, ERRORED_POSITION),
        (true, true, ERRORED_POSITION),
    ] {
        assert_eq!(focus_target(has_error, focused), expected);

        let config = if has_error {
            FieldConfig::new("Name").with_error("Bad")
        } else {
            FieldConfig::new("Name")
        };
        let mut field = mounted(config);
        if focused {
            field.focus();
        }
        assert_eq!(
            field.state().animation_target(),
            expected,
            "focused={focused} error={has_error}"
        );
    }
}

#[test]
fn refocusing_does_not_restart_transition() {
    let mut field = mounted(FieldConfig::new("Name"));
    field.focus();
    field.tick(Duration::from_millis(120));
    let position = field.state().animation_position();

    field.focus();
    assert_eq!(field.state().animation_position(), position);
    assert_eq!(field.engine().running(), 1);
}

#[test]
fn clear_fires_a_single_empty_change() {
    let (sink, log) = record::<String>();
    let mut field = mounted(FieldConfig::new("Name"))
        .with_callbacks(FieldCallbacks::new().on_change_text(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));
    field.focus();
    field.input_mut().type_str("Grace");
    field.pump();
    log.borrow_mut().clear();

    field.clear();
    assert_eq!(field.value(), "");
    assert_eq!(*log.borrow(), vec![String::new()]);
}

#[test]
fn default_never_returns_after_first_focus() {
    let mut field = mounted(
        FieldConfig::new("City")
            .with_default_value("Berlin")
            .with_value("Paris"),
    );
    // Controlled value wins before focus.
    assert_eq!(field.value(), "Paris");

    let mut field_uncontrolled = mounted(FieldConfig::new("City").with_default_value("Berlin"));
    assert_eq!(field_uncontrolled.value(), "Berlin");
    assert!(field_uncontrolled.view().default_visible);

    field_uncontrolled.focus();
    assert_eq!(field_uncontrolled.value(), "");
    field_uncontrolled.blur();
    field_uncontrolled.clear();
    field_uncontrolled.set_config(FieldConfig::new("City").with_default_value("Berlin"));
    assert_eq!(field_uncontrolled.value(), "");
    assert!(!field_uncontrolled.view().default_visible);

    field.focus();
    field.set_config(
        FieldConfig::new("City")
            .with_default_value("Berlin")
            .with_value(""),
    );
    assert_eq!(field.value(), "");
}

#[test]
fn restriction_flag_and_grace_margin() {
    let mut field = mounted(FieldConfig::new("Handle").with_character_restriction(4));
    field.focus();

    field.input_mut().type_str("abcd");
    field.pump();
    assert!(!field.is_restricted());

    field.input_mut().type_str("e");
    field.pump();
    assert!(field.is_restricted());
    assert!(!field.view().restricted, "inside the grace margin");

    field.input_mut().type_str("fghi");
    field.pump();
    assert!(!field.view().restricted, "still at the margin");

    field.input_mut().type_str("j");
    field.pump();
    assert_eq!(field.value().chars().count(), 10);
    assert!(field.view().restricted);
    assert_eq!(field.view().underline.color, Palette::default().error_color);
}

#[test]
fn counter_colors() {
    let base = Color::rgb(1, 1, 1);
    let error = Color::rgb(2, 2, 2);
    let color = |count, errored| {
        counter_display(count, Some(0), Some(10), errored, base, error)
            .map(|display| display.color)
    };
    assert_eq!(color(5, true), Some(base));
    assert_eq!(color(12, true), Some(error));
    assert_eq!(color(12, false), Some(base));
    assert_eq!(counter_display(3, None, None, true, base, error), None);
}

#[test]
fn password_toggles_once_on_mount() {
    let mut field = FieldController::new(
        FieldConfig::new("Password").with_type(FieldType::Password),
        HeadlessInput::new(),
        AnimationEngine::new(),
    );
    assert!(!field.state().secure_text_entry());
    field.mount();
    assert!(field.state().secure_text_entry());
    field.toggle_password_visibility();
    assert!(!field.state().secure_text_entry());
    field.toggle_password_visibility();
    assert!(field.state().secure_text_entry());

    let mut plain = mounted(FieldConfig::new("Name"));
    plain.mount();
    assert!(!plain.state().secure_text_entry());
}

#[test]
fn email_focus_blur_scenario() {
    let (sink, targets) = record::<f32>();
    let mut field = mounted(
        FieldConfig::new("Email")
            .with_type(FieldType::Email)
            .with_value("a@b.com"),
    );
    sink.borrow_mut().push(field.state().animation_target());

    field.focus();
    sink.borrow_mut().push(field.state().animation_target());
    assert!(!field.state().errored());
    field.tick(SETTLE);

    field.blur();
    sink.borrow_mut().push(field.state().animation_target());
    field.tick(SETTLE);

    assert_eq!(*targets.borrow(), vec![0.0, 1.0, 0.0]);
    assert!(!field.state().errored());
    assert_eq!(field.value(), "a@b.com");
}

#[test]
fn error_at_mount_is_immediate() {
    let field = mounted(FieldConfig::new("Name").with_error("Required"));
    assert_eq!(field.state().animation_target(), ERRORED_POSITION);
    assert_eq!(field.state().animation_position(), ERRORED_POSITION);
    assert!(field.state().errored());
    assert!(field.engine().is_idle());
    assert_eq!(field.view().error.text.as_deref(), Some("Required"));
}

#[test]
fn rapid_error_changes_settle_on_latest() {
    let mut field = mounted(FieldConfig::new("Name"));
    field.focus();
    field.set_config(FieldConfig::new("Name").with_error("First"));
    field.tick(Duration::from_millis(40));
    field.set_config(FieldConfig::new("Name").with_error("Second"));
    field.tick(Duration::from_millis(40));
    field.set_config(FieldConfig::new("Name"));
    field.tick(Duration::from_millis(40));
    field.set_config(FieldConfig::new("Name").with_error("Third"));
    field.tick(SETTLE);

    assert!(field.state().errored());
    assert_eq!(field.state().error().as_deref(), Some("Third"));
    assert_eq!(field.state().animation_position(), ERRORED_POSITION);
}

#[test]
fn callbacks_observe_post_state() {
    let (sink, seen) = record::<&'static str>();
    let focus_sink = Rc::clone(&sink);
    let config = FieldConfig::new("Name")
        .with_clear_text_on_focus(true)
        .with_value("x");
    let mut field = mounted(config).with_callbacks(
        FieldCallbacks::new()
            .on_focus(move || focus_sink.borrow_mut().push("focus"))
            .on_blur(move || sink.borrow_mut().push("blur")),
    );
    field.focus();
    assert_eq!(field.value(), "");
    assert!(field.state().focused());
    field.blur();
    assert_eq!(*seen.borrow(), vec!["focus", "blur"]);
}

#[test]
fn autogrow_edit_reports_change_and_size_once() {
    let (sink, seen) = record::<String>();
    let size_sink = Rc::clone(&sink);
    let quirks = PlatformQuirks::new(Platform::Ios).with_multiline_autogrow_gap(true);
    let mut field = mounted(FieldConfig::new("Notes").with_multiline(true))
        .with_quirks(quirks)
        .with_callbacks(
            FieldCallbacks::new()
                .on_change(move |event| {
                    sink.borrow_mut().push(format!("change {:?}", event.text));
                })
                .on_content_size_change(move |size| {
                    size_sink.borrow_mut().push(format!("size {}", size.height));
                }),
        );
    field.focus();
    assert!(field.input_mut().type_str("a\nb"));
    field.pump();

    assert_eq!(
        *seen.borrow(),
        vec!["change \"a\\nb\"".to_string(), "size 48".to_string()]
    );
    assert_eq!(field.state().content_height(), 53.0);
    assert_eq!(field.value(), "a\nb");
}

#[test]
fn blur_inside_focus_cycle_last_write_wins() {
    let mut field = mounted(FieldConfig::new("Name"));
    field.focus();
    field.blur();
    field.focus();
    assert!(field.state().focused());
    assert_eq!(field.state().animation_target(), ACTIVE_POSITION);
    field.tick(SETTLE);
    assert_eq!(field.state().animation_position(), ACTIVE_POSITION);
}
