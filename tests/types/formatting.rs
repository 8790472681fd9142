use crate::{with_app_stack, without_stack};
use error_strata::{CompositeError, ErrorCollector, ErrorConstant, Field, Render, Style};
use std::io;

const APP_STACK_VERBOSE: &str = " --- /srv/app/src/handler.rs:42 (handler::load_user)
 --- /srv/app/src/router.rs:17 (router::Router::dispatch)
 --- /srv/app/src/main.rs:3 (main)";

fn failed_with_cause() -> CompositeError {
    with_app_stack(|| CompositeError::new("failed").with_code(404).with_error(io::Error::other("oh no")))
}

#[test]
fn compact_form_lists_present_fields() {
    let err = failed_with_cause();

    assert_eq!(format!("{}", err), "code: 404 message: failed cause: oh no");
    assert_eq!(err.render(Style::Compact), "code: 404 message: failed cause: oh no");
}

#[test]
fn compact_form_includes_details_before_cause() {
    let err = failed_with_cause().with_details(["a", "b"]);
    assert_eq!(err.to_string(), "code: 404 message: failed details: [a, b] cause: oh no");
}

#[test]
fn compact_form_omits_unset_fields() {
    assert_eq!(CompositeError::new("failed").to_string(), "message: failed");
    assert_eq!(CompositeError::new("").to_string(), "");
    assert_eq!(CompositeError::wrap(io::Error::other("oh no")).to_string(), "cause: oh no");
}

#[test]
fn verbose_form_aligns_labels_and_appends_stack() {
    let err = failed_with_cause();

    let expected = format!("    code: 404\n message: failed\n   cause: oh no\n   stack: \n{}", APP_STACK_VERBOSE);
    assert_eq!(format!("{:#}", err), expected);
    assert_eq!(err.render(Style::Verbose), expected);
}

#[test]
fn verbose_form_bullets_details_and_starts_new_block() {
    let err = without_stack(|| {
        CompositeError::new("failed")
            .with_code(404)
            .with_details(["a", "b"])
            .with_error(io::Error::other("oh no"))
    });

    assert_eq!(
        format!("{:#}", err),
        "    code: 404\n message: failed\n details: \n --- a\n --- b\n cause: oh no"
    );
}

#[test]
fn verbose_form_bullets_collector_causes_on_following_lines() {
    let mut errors = ErrorCollector::new();
    errors.wrap(ErrorConstant::new("a"));
    errors.wrap(ErrorConstant::new("b"));

    let err = without_stack(|| CompositeError::new("failed").with_error(errors));

    assert_eq!(format!("{:#}", err), " message: failed\n   cause: \n --- a\n --- b");
    assert_eq!(err.to_string(), "message: failed cause: [a, b]");
}

#[test]
fn raw_form_is_debug() {
    let err = without_stack(|| CompositeError::new("failed").with_code(1));
    let raw = err.render(Style::Raw);

    assert_eq!(raw, format!("{:?}", err));
    assert!(raw.starts_with("CompositeError { code: 1, status: 500, message: \"failed\""));
}

#[test]
fn single_fields_render_in_every_style() {
    let err = failed_with_cause().with_detail("x");

    assert_eq!(err.field(Field::Code, Style::Compact), "404");
    assert_eq!(err.field(Field::Message, Style::Verbose), "failed");
    assert_eq!(err.field(Field::Message, Style::Raw), "\"failed\"");
    assert_eq!(err.field(Field::Cause, Style::Compact), "oh no");
    assert_eq!(err.field(Field::Details, Style::Compact), "[x]");
    assert_eq!(err.field(Field::Details, Style::Verbose), " --- x");
    assert_eq!(err.field(Field::Stack, Style::Compact), "[handler.rs:42, router.rs:17, main.rs:3]");
    assert_eq!(err.field(Field::Stack, Style::Verbose), APP_STACK_VERBOSE);
}

#[test]
fn unset_fields_render_empty() {
    let err = without_stack(|| CompositeError::new(""));

    for field in [Field::Code, Field::Message, Field::Cause] {
        for style in [Style::Compact, Style::Verbose] {
            assert_eq!(err.field(field, style), "");
        }
    }
    assert_eq!(err.field(Field::Details, Style::Compact), "[]");
    assert_eq!(err.field(Field::Stack, Style::Verbose), "");
}
