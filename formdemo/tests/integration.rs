//! Integration tests for formdemo

use formdemo::{
    ColorChoice, DisplayString, FieldName, FormEvent, FormState, FormValues, ScriptedBackend,
    serialize_values,
};

#[test]
fn test_submits_correct_values() {
    let mut form = FormState::new();
    form.run(
        &ScriptedBackend::new()
            .type_into("name", "mockname")
            .type_into("email", "mock@email.com")
            .select("color", "green")
            .submit(),
    )
    .unwrap();

    assert_eq!(
        form.display().as_str(),
        r#"{"email":"mock@email.com","name":"mockname","color":"green"}"#
    );
}

#[test]
fn test_submit_with_initial_values() {
    let mut form = FormState::new();
    form.run(&ScriptedBackend::new().submit()).unwrap();

    assert_eq!(
        form.display().as_str(),
        r#"{"email":"","name":"","color":"red"}"#
    );
}

#[test]
fn test_display_is_empty_until_submitted() {
    let mut form = FormState::new();
    form.run(&ScriptedBackend::new().type_into("name", "typed but not sent"))
        .unwrap();

    assert!(form.display().is_empty());
    assert_eq!(form.values().name(), "typed but not sent");
}

#[test]
fn test_submit_observes_values_at_dispatch_time() {
    let mut form = FormState::new();
    form.dispatch(FormEvent::change(FieldName::Name, "before"))
        .unwrap();
    form.dispatch(FormEvent::Submit).unwrap();
    form.dispatch(FormEvent::change(FieldName::Name, "after"))
        .unwrap();

    let shown: FormValues = serde_json::from_str(form.display().as_str()).unwrap();
    assert_eq!(shown.name(), "before");
    assert_eq!(form.values().name(), "after");
}

#[test]
fn test_display_round_trips_to_values() {
    let values = FormValues::new()
        .with_name("Quote \" and \\ slash")
        .with_email("ö@ä.example")
        .with_color(ColorChoice::None);

    let display = serialize_values(&values);
    let parsed: FormValues = serde_json::from_str(display.as_str()).unwrap();
    assert_eq!(parsed, values);
}

#[test]
fn test_prefilled_values() {
    let mut form = FormState::builder()
        .values(
            FormValues::new()
                .with_name("Grace")
                .with_email("grace@example.com")
                .with_color(ColorChoice::Blue),
        )
        .build();

    assert_eq!(
        form.submit().as_str(),
        r#"{"email":"grace@example.com","name":"Grace","color":"blue"}"#
    );
}

#[test]
fn test_custom_handler_through_backend() {
    let mut form = FormState::builder()
        .on_submit(|values| DisplayString::from(values.email().to_uppercase()))
        .build();
    form.run(
        &ScriptedBackend::new()
            .type_into("email", "loud@example.com")
            .submit(),
    )
    .unwrap();

    assert_eq!(form.display().as_str(), "LOUD@EXAMPLE.COM");
}

#[test]
fn test_rejected_script_surfaces_as_anyhow() {
    let mut form = FormState::new();
    let err = form
        .run(&ScriptedBackend::new().type_into("output", "nope"))
        .unwrap_err();

    assert_eq!(err.to_string(), "Step 0 was rejected: Unknown field: output");
}
