use error_strata::{DetailList, Render, Style};

fn sample() -> DetailList {
    ["host=db-1", "port=5432", "host=db-1"].into_iter().collect()
}

#[test]
fn keeps_insertion_order_and_duplicates() {
    let details = sample();

    assert_eq!(details.len(), 3);
    assert_eq!(details.as_slice(), ["host=db-1", "port=5432", "host=db-1"]);
}

#[test]
fn renders_in_every_style() {
    let details = sample();

    assert_eq!(details.to_string(), "[host=db-1, port=5432, host=db-1]");
    assert_eq!(format!("{:#}", details), " --- host=db-1\n --- port=5432\n --- host=db-1");
    assert_eq!(details.render(Style::Raw), r#"["host=db-1", "port=5432", "host=db-1"]"#);
}

#[test]
fn empty_list_renders_empty() {
    let details = DetailList::new();

    assert!(details.is_empty());
    assert_eq!(details.to_string(), "[]");
    assert_eq!(format!("{:#}", details), "");
}

#[test]
fn push_and_extend_append() {
    let mut details = DetailList::new();
    details.push("a");
    details.extend(vec![String::from("b"), String::from("c")]);

    assert_eq!(details.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn serializes_as_array() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value, serde_json::json!(["host=db-1", "port=5432", "host=db-1"]));
}
