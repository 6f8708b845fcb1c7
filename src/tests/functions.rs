use crate::{
    ast::*,
    visitor::{Sqlite, Visitor},
};

#[test]
fn test_count_asterisk() {
    let query = Select::from_table("users").value(count(asterisk()));
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT COUNT(*) FROM `users`", sql);
}

#[test]
fn test_count_with_alias() {
    let query = Select::from_table("users").value(Function::from(count(asterisk())).alias("n"));
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT COUNT(*) AS `n` FROM `users`", sql);
}

#[test]
fn test_aggregates_over_columns() {
    let query = Select::from_table("users")
        .value(avg("age"))
        .value(min("age"))
        .value(max("age"))
        .value(sum(Column::from("age")));

    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT AVG(`age`), MIN(`age`), MAX(`age`), SUM(`age`) FROM `users`",
        sql
    );
}

#[test]
fn test_lower_and_upper() {
    let query = Select::from_table("users")
        .value(lower(Column::from("name")))
        .value(upper(Column::from("name")));

    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT LOWER(`name`), UPPER(`name`) FROM `users`", sql);
}

#[test]
fn test_coalesce() {
    let query = Select::from_table("users").value(coalesce(vec![
        DatabaseValue::from(Column::from("nickname")),
        DatabaseValue::from(Column::from("name")),
    ]));

    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT COALESCE(`nickname`,`name`) FROM `users`", sql);
}

#[test]
fn test_row_number_over_partition() {
    let query = Select::from_table("users").column("id").value(
        row_number()
            .order_by("created_at".descend())
            .partition_by("group_id"),
    );

    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `id`, ROW_NUMBER() OVER(PARTITION BY `group_id` ORDER BY `created_at` DESC) FROM `users`",
        sql
    );
}

#[test]
fn test_aggregate_to_string() {
    let query = Select::from_table("users")
        .value(aggregate_to_string(Column::from("firstname")))
        .group_by("lastname");

    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT GROUP_CONCAT(`firstname`) FROM `users` GROUP BY `lastname`",
        sql
    );
}
