use crate::{app_frames, with_app_stack};
use error_strata::{CompositeError, ErrorCollector, ErrorConstant, ErrorData};
use serde_json::json;
use std::io;

#[test]
fn encodes_plain_cause_as_string() {
    let mut err = CompositeError::new("oh no").with_code(200);
    err.set_cause(io::Error::other("failed"));

    assert_eq!(err.to_json().unwrap(), r#"{"error_cause":"failed","error_code":200,"error_message":"oh no"}"#);
}

#[test]
fn encodes_composite_cause_as_object() {
    let mut err = CompositeError::new("oh no").with_code(200);
    err.set_cause(CompositeError::new("failed"));

    assert_eq!(
        err.to_json().unwrap(),
        r#"{"error_cause":{"error_message":"failed"},"error_code":200,"error_message":"oh no"}"#
    );
}

#[test]
fn empty_error_encodes_to_empty_object() {
    assert_eq!(CompositeError::new("").to_json().unwrap(), "{}");
}

#[test]
fn context_merges_with_sorted_keys() {
    let err = CompositeError::new("m")
        .with_details(["a"])
        .with_context_value("zeta", 1)
        .with_context_value("alpha", true);

    assert_eq!(
        err.to_json().unwrap(),
        r#"{"alpha":true,"error_details":["a"],"error_message":"m","zeta":1}"#
    );
}

#[test]
fn stack_is_only_encoded_on_request() {
    let err = with_app_stack(|| CompositeError::new("failed"));

    assert!(err.to_value().unwrap().get("error_stack").is_none());

    let with_stack = serde_json::to_value(err.encode_with_stack()).unwrap();
    assert_eq!(
        with_stack,
        json!({
            "error_message": "failed",
            "error_stack": [
                "/srv/app/src/handler.rs:42 (handler::load_user)",
                "/srv/app/src/router.rs:17 (router::Router::dispatch)",
                "/srv/app/src/main.rs:3 (main)"
            ]
        })
    );
}

#[test]
fn pretty_json_spans_lines() {
    let pretty = CompositeError::new("failed").with_code(1).to_json_pretty().unwrap();
    assert_eq!(pretty, "{\n  \"error_code\": 1,\n  \"error_message\": \"failed\"\n}");
}

#[test]
fn collector_encodes_children() {
    let mut plain = ErrorCollector::new();
    plain.wrap(io::Error::other("oh no"));
    assert_eq!(plain.to_json().unwrap(), r#"["oh no"]"#);

    let mut structured = ErrorCollector::new();
    structured.wrap(CompositeError::new("oh no"));
    assert_eq!(structured.to_json().unwrap(), r#"[{"error_message":"oh no"}]"#);
}

#[test]
fn collector_cause_nests_as_array() {
    let mut errors = ErrorCollector::new();
    errors.wrap(ErrorConstant::new("a"));
    errors.wrap(CompositeError::new("b").with_code(2));

    let err = CompositeError::new("many").with_error(errors);
    assert_eq!(
        err.to_value().unwrap(),
        json!({"error_cause": ["a", {"error_code": 2, "error_message": "b"}], "error_message": "many"})
    );
}

#[test]
fn decodes_code_and_message() {
    let encoded = CompositeError::new("oh no").with_code(200).with_detail("x").to_json().unwrap();
    let data: ErrorData = serde_json::from_str(&encoded).unwrap();

    assert_eq!(data.code, 200);
    assert_eq!(data.message, "oh no");
    assert_eq!(data.details, ["x"]);
    assert!(data.cause.is_none());
    assert!(data.context.is_empty());
}

#[test]
fn decoded_data_rebuilds_error() {
    let data: ErrorData = serde_json::from_value(json!({
        "error_code": 7,
        "error_message": "outer",
        "error_details": ["d"],
        "error_cause": {"error_message": "inner", "error_cause": "root"},
        "request_id": "r-1"
    }))
    .unwrap();

    let err = CompositeError::from(data);

    assert_eq!(err.code(), 7);
    assert_eq!(err.message(), "outer");
    assert_eq!(err.details().as_slice(), ["d"]);
    assert_eq!(err.context().get("request_id"), Some(&json!("r-1")));

    let inner = err.cause().and_then(|cause| cause.downcast_ref::<CompositeError>()).unwrap();
    assert_eq!(inner.message(), "inner");
    assert_eq!(
        inner.cause().and_then(|cause| cause.downcast_ref::<ErrorConstant>()),
        Some(&ErrorConstant::new("root"))
    );
}

#[test]
fn decoded_array_cause_becomes_collector() {
    let data: ErrorData = serde_json::from_value(json!({"error_cause": ["a", "b"]})).unwrap();
    let err = CompositeError::from(data);

    let errors = err.cause().and_then(|cause| cause.downcast_ref::<ErrorCollector>()).unwrap();
    assert_eq!(errors.to_string(), "[a, b]");
}

#[test]
fn decoded_stack_is_restored() {
    let stack: Vec<String> = app_frames().iter().map(|frame| format!("{:#}", frame)).collect();
    let err = CompositeError::from(ErrorData { message: "failed".into(), stack, ..ErrorData::default() });

    let frames = err.stack_trace().frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].file(), "/srv/app/src/handler.rs");
    assert_eq!(frames[0].line(), 42);
    assert_eq!(frames[0].function(), "handler::load_user");
}

#[test]
fn decoding_without_stack_captures_one() {
    let err = with_app_stack(|| CompositeError::from(ErrorData::default()));
    assert_eq!(err.stack_trace().frames(), app_frames().as_slice());
}

#[test]
fn error_data_round_trips_through_json() {
    let data = ErrorData { code: 3, message: "m".into(), ..ErrorData::default() };
    let encoded = serde_json::to_string(&data).unwrap();

    assert_eq!(encoded, r#"{"error_code":3,"error_message":"m"}"#);
    assert_eq!(serde_json::from_str::<ErrorData>(&encoded).unwrap(), data);
}

#[cfg(feature = "xml")]
#[test]
fn encodes_xml_with_pascal_case_elements() {
    let err = CompositeError::new("oh no").with_code(200).with_details(["a"]);

    assert_eq!(
        err.to_xml().unwrap(),
        "<Error><ErrorCode>200</ErrorCode><ErrorDetails><Item>a</Item></ErrorDetails><ErrorMessage>oh no</ErrorMessage></Error>"
    );
}

#[cfg(feature = "xml")]
#[test]
fn encodes_collector_xml() {
    let mut errors = ErrorCollector::new();
    errors.wrap(io::Error::other("oh no"));
    errors.wrap(CompositeError::new("x"));

    assert_eq!(
        errors.to_xml().unwrap(),
        "<Errors><Error>oh no</Error><Error><ErrorMessage>x</ErrorMessage></Error></Errors>"
    );
}
