use crate::{app_frames, with_app_stack};
use error_strata::traits::ResultExt;
use error_strata::CompositeError;
use std::io;

#[test]
fn wrap_err_on_err() {
    let result: Result<(), io::Error> = Err(io::Error::other("original"));
    let err = result.wrap_err().unwrap_err();

    assert_eq!(err.to_string(), "cause: original");
    assert_eq!(err.status(), 500);
}

#[test]
fn wrap_err_on_ok() {
    let result: Result<i32, io::Error> = Ok(42);
    assert_eq!(result.wrap_err().unwrap(), 42);
}

#[test]
fn wrap_err_msg_sets_message() {
    let result: Result<(), io::Error> = Err(io::Error::other("original"));
    let err = result.wrap_err_msg("loading config").unwrap_err();

    assert_eq!(err.to_string(), "message: loading config cause: original");
}

#[test]
fn wrap_err_with_is_lazy() {
    let mut called = false;
    let ok: Result<(), io::Error> = Ok(());
    let _ = ok.wrap_err_with(|| {
        called = true;
        "should not be called".to_string()
    });
    assert!(!called, "closure must not run for Ok results");

    let err: Result<(), io::Error> = Err(io::Error::other("original"));
    let wrapped = err.wrap_err_with(|| format!("user {}", 7)).unwrap_err();
    assert_eq!(wrapped.message(), "user 7");
}

#[test]
fn wrap_err_code_sets_code() {
    let result: Result<(), io::Error> = Err(io::Error::other("original"));
    assert_eq!(result.wrap_err_code(404).unwrap_err().code(), 404);
}

#[test]
fn wrapping_a_composite_error_keeps_it() {
    let original = CompositeError::new("inner").with_code(3);
    let stack = original.stack_trace().clone();

    let result: Result<(), CompositeError> = Err(original);
    let err = result.wrap_err().unwrap_err();

    assert_eq!(err.code(), 3);
    assert_eq!(err.stack_trace(), &stack);
}

#[test]
fn stack_starts_at_the_caller() {
    let result: Result<(), io::Error> = Err(io::Error::other("original"));
    let err = with_app_stack(|| result.wrap_err()).unwrap_err();

    assert_eq!(err.stack_trace().frames(), app_frames().as_slice());
}
