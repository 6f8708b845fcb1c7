use crate::{
    ast::*,
    visitor::{Sqlite, Visitor},
};

#[test]
fn test_insert_single_value() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!("INSERT INTO `users` (`foo`) VALUES (?)", sql);
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_insert_multiple_columns() {
    let insert: Insert = Insert::single_into("users")
        .value("foo", 10)
        .value("bar", "lol")
        .into();

    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!("INSERT INTO `users` (`foo`,`bar`) VALUES (?,?)", sql);
    assert_eq!(
        vec![ParameterizedValue::from(10), ParameterizedValue::from("lol")],
        params
    );
}

#[test]
fn test_insert_empty_row_uses_default_values() {
    let insert: Insert = Insert::single_into("users").into();
    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!("INSERT INTO `users` DEFAULT VALUES", sql);
    assert!(params.is_empty());
}

#[test]
fn test_insert_multiple_rows() {
    let insert: Insert = Insert::multi_into("users", vec!["foo", "bar"])
        .values((1, 2))
        .values((3, 4))
        .into();

    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!(
        "INSERT INTO `users` (`foo`,`bar`) VALUES (?,?), (?,?)",
        sql
    );
    assert_eq!(
        vec![
            ParameterizedValue::from(1),
            ParameterizedValue::from(2),
            ParameterizedValue::from(3),
            ParameterizedValue::from(4),
        ],
        params
    );
}

#[test]
fn test_insert_or_ignore_on_conflict() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.on_conflict(OnConflict::DoNothing);

    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!("INSERT OR IGNORE INTO `users` (`foo`) VALUES (?)", sql);
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_insert_returning_columns() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.returning(vec!["id", "foo"]);

    let (sql, params) = Sqlite::build(insert).unwrap();

    assert_eq!(
        "INSERT INTO `users` (`foo`) VALUES (?) RETURNING `id`, `foo`",
        sql
    );
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}
