use crate::{ast::ParameterizedValue, connector::ResultSet, serde_support};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: i64,
    name: String,
    age: Option<i64>,
}

fn result_set() -> ResultSet {
    ResultSet::new(
        vec!["id".to_string(), "name".to_string(), "age".to_string()],
        vec![
            vec![
                ParameterizedValue::Integer(1),
                ParameterizedValue::Text("Musti".into()),
                ParameterizedValue::Integer(9),
            ],
            vec![
                ParameterizedValue::Integer(2),
                ParameterizedValue::Text("Naukio".into()),
                ParameterizedValue::Null,
            ],
        ],
    )
}

#[test]
fn test_from_rows() {
    let users: Vec<User> = serde_support::from_rows(result_set()).unwrap();

    assert_eq!(
        vec![
            User {
                id: 1,
                name: "Musti".to_string(),
                age: Some(9),
            },
            User {
                id: 2,
                name: "Naukio".to_string(),
                age: None,
            },
        ],
        users
    );
}

#[test]
fn test_from_rows_missing_column_fails() {
    #[derive(Debug, Deserialize)]
    struct Cat {
        #[allow(dead_code)]
        paws: i64,
    }

    let result: crate::Result<Vec<Cat>> = serde_support::from_rows(result_set());
    assert!(result.is_err());
}

#[test]
fn test_result_set_into_json() {
    let json = serde_json::Value::from(result_set());

    assert_eq!(
        serde_json::json!([
            { "id": 1, "name": "Musti", "age": 9 },
            { "id": 2, "name": "Naukio", "age": null },
        ]),
        json
    );
}
