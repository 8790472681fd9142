use error_strata::{chain, find, is, CompositeError, ErrorCollector, ErrorConstant, SharedError};
use std::io;
use std::sync::Arc;

static NOT_FOUND: ErrorConstant = ErrorConstant::from_static("not found");

#[test]
fn chain_walks_every_source() {
    let inner = CompositeError::new("inner").with_error(NOT_FOUND.clone());
    let err = CompositeError::new("outer").with_error(inner);

    let messages: Vec<String> = chain(&err).map(|node| node.to_string()).collect();
    assert_eq!(
        messages,
        [
            "message: outer cause: message: inner cause: not found",
            "message: inner cause: not found",
            "not found",
        ]
    );
}

#[test]
fn is_matches_equal_constants_anywhere_in_chain() {
    let inner = CompositeError::new("inner").with_error(NOT_FOUND.clone());
    let err = CompositeError::new("outer").with_error(inner);

    assert!(is(&err, &NOT_FOUND));
    assert!(!is(&err, &ErrorConstant::new("gone")));
}

#[test]
fn is_matches_the_same_instance() {
    let shared: SharedError = Arc::new(io::Error::other("disk full"));
    let err = CompositeError::new("write failed").with_shared_error(Arc::clone(&shared));

    assert!(is(&err, &*shared));
    assert!(!is(&err, &io::Error::other("disk full")));
}

#[test]
fn is_reaches_into_collectors() {
    let mut errors = ErrorCollector::new();
    errors.wrap(NOT_FOUND.clone());
    let err = CompositeError::new("batch failed").with_error(errors);

    assert!(is(&err, &NOT_FOUND));
}

#[test]
fn find_returns_first_error_of_type() {
    let err = CompositeError::wrap(io::Error::other("oh no")).with_code(5);

    assert_eq!(find::<CompositeError>(&err).map(CompositeError::code), Some(5));
    assert_eq!(find::<io::Error>(&err).map(ToString::to_string).as_deref(), Some("oh no"));
    assert!(find::<ErrorConstant>(&err).is_none());
}

#[test]
fn find_searches_collected_errors() {
    let mut errors = ErrorCollector::new();
    errors.wrap(NOT_FOUND.clone());
    errors.wrap(CompositeError::new("typed").with_code(3));
    let err = CompositeError::new("batch failed").with_error(errors);

    let typed = find::<CompositeError>(&*err.cause().unwrap()).map(CompositeError::code);
    assert_eq!(typed, Some(3));
    assert_eq!(find::<ErrorConstant>(&err), Some(&NOT_FOUND));
}
