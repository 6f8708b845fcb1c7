use crate::{
    ast::*,
    visitor::{Sqlite, Visitor},
};

#[test]
fn test_delete_all() {
    let query = Delete::from_table("users");
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("DELETE FROM `users`", sql);
    assert!(params.is_empty());
}

#[test]
fn test_delete_with_conditions() {
    let query = Delete::from_table("users").so_that("id".equals(1).and("age".less_than(18)));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("DELETE FROM `users` WHERE (`id` = ? AND `age` < ?)", sql);
    assert_eq!(
        vec![ParameterizedValue::from(1), ParameterizedValue::from(18)],
        params
    );
}
