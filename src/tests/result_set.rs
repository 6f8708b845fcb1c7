use crate::{ast::ParameterizedValue, connector::ResultSet};

fn result_set() -> ResultSet {
    ResultSet::new(
        vec!["id".to_string(), "name".to_string()],
        vec![vec![
            ParameterizedValue::Integer(1),
            ParameterizedValue::Text("Musti".into()),
        ]],
    )
}

#[test]
fn test_rows_index_by_position_and_name() {
    let rows = result_set();
    let row = rows.first().unwrap();

    assert_eq!(Some(1), row[0].as_i64());
    assert_eq!(Some("Musti"), row["name"].as_str());
}

#[test]
fn test_owned_rows_index_by_name() {
    let row = result_set().into_iter().next().unwrap();

    assert_eq!(Some("Musti"), row["name"].as_str());
    assert_eq!(Some(1), row.get("id").and_then(|id| id.as_i64()));
}

#[test]
#[should_panic(expected = "No column found")]
fn test_indexing_with_an_unknown_name_panics() {
    let rows = result_set();
    let row = rows.first().unwrap();

    let _ = row["paws"].as_i64();
}

#[test]
fn test_column_names_and_counts() {
    let rows = result_set();

    assert_eq!(&vec!["id".to_string(), "name".to_string()], rows.columns());
    assert_eq!(1, rows.len());
    assert!(!rows.is_empty());
    assert!(rows.last_insert_id().is_none());
}
