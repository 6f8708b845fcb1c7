use crate::{
    ast::*,
    visitor::{Mysql, Visitor},
};

#[test]
fn test_insert_ignore_on_conflict() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.on_conflict(OnConflict::DoNothing);

    let (sql, params) = Mysql::build(insert).unwrap();

    assert_eq!("INSERT IGNORE INTO `users` (`foo`) VALUES (?)", sql);
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_insert_empty_row() {
    let insert: Insert = Insert::single_into("users").into();
    let (sql, params) = Mysql::build(insert).unwrap();

    assert_eq!("INSERT INTO `users` () VALUES ()", sql);
    assert!(params.is_empty());
}

#[test]
fn test_returning_is_not_rendered() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.returning(vec!["id"]);

    let (sql, _) = Mysql::build(insert).unwrap();

    assert_eq!("INSERT INTO `users` (`foo`) VALUES (?)", sql);
}

#[test]
fn test_offset_without_limit_substitutes_max_limit() {
    let query = Select::from_table("users").offset(2);
    let (sql, params) = Mysql::build(query).unwrap();

    assert_eq!("SELECT `users`.* FROM `users` LIMIT ? OFFSET ?", sql);
    assert_eq!(
        vec![
            ParameterizedValue::from(i64::MAX),
            ParameterizedValue::from(2),
        ],
        params
    );
}
