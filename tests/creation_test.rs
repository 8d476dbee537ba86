use dataframe::{DataFrame, FrameError, NameCol, Value};
use std::collections::BTreeMap;

fn ints(vals: &[i64]) -> Vec<Value> {
    vals.iter().map(|&v| Value::Int(v)).collect()
}

fn record(pairs: &[(&str, i64)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), Value::Int(v)))
        .collect()
}

fn animals() -> DataFrame {
    DataFrame::from_nested(
        [
            ("snake".to_string(), record(&[("length", 10), ("height", 1)])),
            (
                "giraffe".to_string(),
                record(&[("length", 3), ("height", 10)]),
            ),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap()
}

#[test]
fn test_nested_map_creation() {
    let d = animals();
    assert_eq!(d.col_names(), ["height", "length"]);
    assert_eq!(d.row_names(), ["giraffe", "snake"]);
    assert_eq!(d.get("snake", "length").unwrap(), Value::Int(10));
    assert_eq!(d.get("giraffe", "height").unwrap(), Value::Int(10));
    assert!(d.get("monkey", "height").unwrap().is_null());
}

#[test]
fn test_matrix_creation() {
    let d = DataFrame::new(
        vec![ints(&[10, 1]), ints(&[3, 10])],
        vec!["giraffe".into(), "snake".into()],
        vec!["height".into(), "length".into()],
    )
    .unwrap();
    assert_eq!(d.col_names(), ["height", "length"]);
    assert_eq!(d.row_names(), ["giraffe", "snake"]);
    assert_eq!(d.get("snake", "length").unwrap(), Value::Int(10));
    assert!(d.get("monkey", "height").unwrap().is_null());
}

#[test]
fn test_record_creation() {
    let d = DataFrame::from_records(
        vec![
            record(&[("length", 3), ("height", 10)]),
            record(&[("length", 10), ("height", 1)]),
        ],
        Some(vec!["giraffe".into(), "snake".into()]),
    )
    .unwrap();
    assert_eq!(d.col_names(), ["height", "length"]);
    assert_eq!(d.row_names(), ["giraffe", "snake"]);
    assert_eq!(d.get("snake", "length").unwrap(), Value::Int(10));
    assert_eq!(d.get("giraffe", "height").unwrap(), Value::Int(10));
}

#[test]
fn test_anonymous_names_fill_in() {
    let d = DataFrame::new(vec![ints(&[4, 3]), ints(&[2, 1])], vec![], vec![]).unwrap();
    assert_eq!(d.row_names(), ["_0", "_1"]);
    assert_eq!(d.col_names(), ["_0", "_1"]);

    let d = DataFrame::from_records(vec![record(&[("length", 3), ("height", 4)])], None).unwrap();
    assert_eq!(d.row_names(), ["_0"]);
    assert_eq!(d, DataFrame::new(vec![ints(&[4, 3])], vec![], vec![]).unwrap());
}

#[test]
fn test_ragged_matrix_rejected() {
    let result = DataFrame::new(vec![ints(&[1, 2]), ints(&[3])], vec![], vec![]);
    assert!(matches!(
        result,
        Err(FrameError::IncompatibleDimension(_))
    ));
}

#[test]
fn test_too_many_names_rejected() {
    let result = DataFrame::new(
        vec![ints(&[1, 2])],
        vec!["a".into(), "b".into()],
        vec![],
    );
    assert!(matches!(
        result,
        Err(FrameError::IncompatibleDimension(_))
    ));
}

#[test]
fn test_empty_frame() {
    let d = DataFrame::default();
    assert_eq!(d.size(), (0, 0));
    assert!(d.is_empty());

    let d = DataFrame::new(vec![], vec![], vec!["a".into(), "b".into()]).unwrap();
    assert_eq!(d.size(), (0, 2));
}

#[test]
fn test_from_matrix_with_headers_and_name_col() {
    let matrix = vec![
        vec![Value::from("snake"), Value::Int(1), Value::Int(10)],
        vec![Value::from("giraffe"), Value::Int(10), Value::Int(3)],
    ];
    let headers = vec!["animal".to_string(), "height".to_string(), "length".to_string()];

    let d = DataFrame::from_matrix(matrix.clone(), Some(headers.clone()), Some(NameCol::Pos(0)))
        .unwrap();
    assert_eq!(d.row_names(), ["snake", "giraffe"]);
    assert_eq!(d.col_names(), ["height", "length"]);
    assert_eq!(d.get("snake", "height").unwrap(), Value::Int(1));

    let d =
        DataFrame::from_matrix(matrix.clone(), Some(headers.clone()), Some(NameCol::Name("length".into())))
            .unwrap();
    assert_eq!(d.col_names(), ["animal", "height"]);
    assert_eq!(d.row_names(), ["10", "3"]);
    assert_eq!(d.get(0, "height").unwrap(), Value::Int(1));

    let d = DataFrame::from_matrix(matrix.clone(), Some(headers), None).unwrap();
    assert_eq!(d.col_names(), ["animal", "height", "length"]);
    assert_eq!(d.row_names(), ["_0", "_1"]);
}

#[test]
fn test_from_matrix_without_headers() {
    let matrix = vec![
        vec![Value::from("snake"), Value::Int(1), Value::Int(10)],
        vec![Value::from("giraffe"), Value::Int(10), Value::Int(3)],
    ];

    let d = DataFrame::from_matrix(matrix.clone(), None, Some(NameCol::Pos(0))).unwrap();
    assert_eq!(d.row_names(), ["snake", "giraffe"]);
    assert_eq!(d.col_names(), ["_0", "_1"]);
    assert_eq!(d.get("giraffe", 0).unwrap(), Value::Int(10));

    let result = DataFrame::from_matrix(matrix, None, Some(NameCol::Name("length".into())));
    assert!(matches!(result, Err(FrameError::InvalidArgument(_))));
}

#[test]
fn test_value_serde_round_trip() {
    let json = serde_json::to_value(Value::Int(5)).unwrap();
    assert_eq!(json, serde_json::json!(5));
    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, Value::Int(5));

    let back: Value = serde_json::from_value(serde_json::json!(null)).unwrap();
    assert!(back.is_null());
    let back: Value = serde_json::from_value(serde_json::json!(1.5)).unwrap();
    assert_eq!(back, Value::Float(1.5));
}

#[test]
fn test_plain_projection_serializes_flat() {
    let d = animals();
    let json = serde_json::to_value(d.to_plain()).unwrap();
    assert_eq!(json, serde_json::json!([[10, 3], [1, 10]]));

    let row = d.get(vec!["snake"], true).unwrap().into_frame().unwrap();
    let json = serde_json::to_value(row.to_plain()).unwrap();
    assert_eq!(json, serde_json::json!([1, 10]));
}
