use crate::{
    ast::*,
    visitor::{Sqlite, Visitor},
};

#[test]
fn test_update_single_value() {
    let query = Update::table("users").set("foo", 10);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("UPDATE `users` SET `foo` = ?", sql);
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_update_multiple_values_with_conditions() {
    let query = Update::table("users")
        .set("foo", 10)
        .set("bar", false)
        .so_that("id".equals(1));

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("UPDATE `users` SET `foo` = ?, `bar` = ? WHERE `id` = ?", sql);
    assert_eq!(
        vec![
            ParameterizedValue::from(10),
            ParameterizedValue::from(false),
            ParameterizedValue::from(1),
        ],
        params
    );
}

#[test]
fn test_update_with_sub_select() {
    let sub_select = Select::from_table("archive")
        .column("foo")
        .so_that("user_id".equals(1));

    let query = Update::table("users")
        .set("foo", sub_select)
        .so_that("id".equals(2));

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "UPDATE `users` SET `foo` = (SELECT `foo` FROM `archive` WHERE `user_id` = ?) WHERE `id` = ?",
        sql
    );
    assert_eq!(
        vec![ParameterizedValue::from(1), ParameterizedValue::from(2)],
        params
    );
}
