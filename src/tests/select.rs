use crate::{
    ast::*,
    visitor::{Sqlite, Visitor},
};

#[test]
fn test_single_value_without_a_table() {
    let query = Select::default().value(1);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT ?", sql);
    assert_eq!(vec![ParameterizedValue::from(1)], params);
}

#[test]
fn test_select_star_from() {
    let query = Select::from_table("musti");
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `musti`.* FROM `musti`", sql);
    assert!(params.is_empty());
}

#[test]
fn test_select_star_from_aliased_table() {
    let table = Table::from("musti").alias("m");
    let query = Select::from_table(table);
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `m`.* FROM `musti` AS `m`", sql);
}

#[test]
fn test_select_star_from_database_prefixed_table() {
    let query = Select::from_table(("cats", "musti"));
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `cats`.`musti`.* FROM `cats`.`musti`", sql);
}

#[test]
fn test_select_columns() {
    let query = Select::from_table("cat").columns(vec!["paw", "nose"]);
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `paw`, `nose` FROM `cat`", sql);
}

#[test]
fn test_select_column_with_alias() {
    let column = Column::from("paw").alias("pawpaw");
    let query = Select::from_table("cat").column(column);
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `paw` AS `pawpaw` FROM `cat`", sql);
}

#[test]
fn test_select_where_equals() {
    let query = Select::from_table("naukio").so_that("word".equals("meow"));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `word` = ?", sql);
    assert_eq!(vec![ParameterizedValue::from("meow")], params);
}

#[test]
fn test_select_where_like() {
    let query = Select::from_table("naukio").so_that("word".like("meow"));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `word` LIKE ?", sql);
    assert_eq!(vec![ParameterizedValue::from("%meow%")], params);
}

#[test]
fn test_select_where_begins_with() {
    let query = Select::from_table("naukio").so_that("word".begins_with("meow"));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `word` LIKE ?", sql);
    assert_eq!(vec![ParameterizedValue::from("meow%")], params);
}

#[test]
fn test_select_where_ends_into() {
    let query = Select::from_table("naukio").so_that("word".ends_into("meow"));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `word` LIKE ?", sql);
    assert_eq!(vec![ParameterizedValue::from("%meow")], params);
}

#[test]
fn test_select_and_chained() {
    let conditions = "word"
        .equals("meow")
        .and("age".less_than(10))
        .and("paw".equals("warm"));

    let query = Select::from_table("naukio").so_that(conditions);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE ((`word` = ? AND `age` < ?) AND `paw` = ?)",
        sql
    );

    assert_eq!(
        vec![
            ParameterizedValue::from("meow"),
            ParameterizedValue::from(10),
            ParameterizedValue::from("warm"),
        ],
        params
    );
}

#[test]
fn test_select_and_different_execution_order() {
    let conditions = "word"
        .equals("meow")
        .and("age".less_than(10).and("paw".equals("warm")));

    let query = Select::from_table("naukio").so_that(conditions);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE (`word` = ? AND (`age` < ? AND `paw` = ?))",
        sql
    );

    assert_eq!(
        vec![
            ParameterizedValue::from("meow"),
            ParameterizedValue::from(10),
            ParameterizedValue::from("warm"),
        ],
        params
    );
}

#[test]
fn test_select_or() {
    let conditions = "word".equals("meow").or("age".less_than(10));

    let query = Select::from_table("naukio").so_that(conditions);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE (`word` = ? OR `age` < ?)",
        sql
    );

    assert_eq!(
        vec![
            ParameterizedValue::from("meow"),
            ParameterizedValue::from(10),
        ],
        params
    );
}

#[test]
fn test_select_negation() {
    let conditions = "word".equals("meow").not();

    let query = Select::from_table("naukio").so_that(conditions);
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE (NOT `word` = ?)",
        sql
    );

    assert_eq!(vec![ParameterizedValue::from("meow")], params);
}

#[test]
fn test_select_and_where_combines_previous_conditions() {
    let query = Select::from_table("naukio")
        .so_that("word".equals("meow"))
        .and_where("age".less_than(10));

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE (`word` = ? AND `age` < ?)",
        sql
    );

    assert_eq!(
        vec![
            ParameterizedValue::from("meow"),
            ParameterizedValue::from(10),
        ],
        params
    );
}

#[test]
fn test_select_in_values() {
    let query = Select::from_table("naukio").so_that("id".in_selection(vec![1, 2, 3]));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `id` IN (?,?,?)", sql);

    assert_eq!(
        vec![
            ParameterizedValue::from(1),
            ParameterizedValue::from(2),
            ParameterizedValue::from(3),
        ],
        params
    );
}

#[test]
fn test_select_in_empty_values_can_never_match() {
    let query = Select::from_table("naukio").so_that("id".in_selection(Vec::<i64>::new()));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE 1=0", sql);
    assert!(params.is_empty());
}

#[test]
fn test_select_not_in_empty_values_always_matches() {
    let query = Select::from_table("naukio").so_that("id".not_in_selection(Vec::<i64>::new()));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE 1=1", sql);
    assert!(params.is_empty());
}

#[test]
fn test_select_in_sub_select() {
    let sub_select = Select::from_table("cats")
        .column("id")
        .so_that("age".greater_than(18));

    let query = Select::from_table("naukio").so_that("id".in_selection(sub_select));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE `id` IN (SELECT `id` FROM `cats` WHERE `age` > ?)",
        sql
    );

    assert_eq!(vec![ParameterizedValue::from(18)], params);
}

#[test]
fn test_select_is_null() {
    let query = Select::from_table("naukio").so_that("word".is_null());
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `naukio`.* FROM `naukio` WHERE `word` IS NULL", sql);
    assert!(params.is_empty());
}

#[test]
fn test_select_between() {
    let query = Select::from_table("naukio").so_that("age".between(4, 18));
    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `naukio`.* FROM `naukio` WHERE `age` BETWEEN ? AND ?",
        sql
    );

    assert_eq!(
        vec![ParameterizedValue::from(4), ParameterizedValue::from(18)],
        params
    );
}

#[test]
fn test_select_order_by() {
    let query = Select::from_table("musti")
        .order_by("paw")
        .order_by("nose".descend());

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `musti`.* FROM `musti` ORDER BY `paw`, `nose` DESC",
        sql
    );
    assert!(params.is_empty());
}

#[test]
fn test_select_group_by_and_having() {
    let query = Select::from_table("users")
        .column("country")
        .group_by("country")
        .having(DatabaseValue::from(count(asterisk())).greater_than(100));

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `country` FROM `users` GROUP BY `country` HAVING COUNT(*) > ?",
        sql
    );
    assert_eq!(vec![ParameterizedValue::from(100)], params);
}

#[test]
fn test_select_limit() {
    let query = Select::from_table("musti").limit(10);

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `musti`.* FROM `musti` LIMIT ?", sql);
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_select_offset_without_limit() {
    let query = Select::from_table("musti").offset(2);

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `musti`.* FROM `musti` LIMIT ? OFFSET ?", sql);
    assert_eq!(
        vec![ParameterizedValue::from(-1), ParameterizedValue::from(2)],
        params
    );
}

#[test]
fn test_select_limit_and_offset() {
    let query = Select::from_table("musti").limit(10).offset(2);

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `musti`.* FROM `musti` LIMIT ? OFFSET ?", sql);
    assert_eq!(
        vec![ParameterizedValue::from(10), ParameterizedValue::from(2)],
        params
    );
}

#[test]
fn test_select_distinct() {
    let query = Select::from_table("test").column("bar").distinct();
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT DISTINCT `bar` FROM `test`", sql);
}

#[test]
fn test_select_inner_join() {
    let query = Select::from_table("users").inner_join(
        "posts".on(("users", "id").equals(Column::from(("posts", "user_id")))),
    );

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `users`.* FROM `users` INNER JOIN `posts` ON `users`.`id` = `posts`.`user_id`",
        sql
    );
    assert!(params.is_empty());
}

#[test]
fn test_select_left_outer_join_with_conditions() {
    let query = Select::from_table("users").left_outer_join(
        "posts".on(("users", "id")
            .equals(Column::from(("posts", "user_id")))
            .and(("posts", "visible").equals(true))),
    );

    let (sql, params) = Sqlite::build(query).unwrap();

    assert_eq!(
        "SELECT `users`.* FROM `users` LEFT OUTER JOIN `posts` ON (`users`.`id` = `posts`.`user_id` AND `posts`.`visible` = ?)",
        sql
    );
    assert_eq!(vec![ParameterizedValue::from(true)], params);
}

#[test]
fn test_backticks_in_identifiers_are_doubled() {
    let query = Select::from_table("test").column("weird`name");
    let (sql, _) = Sqlite::build(query).unwrap();

    assert_eq!("SELECT `weird``name` FROM `test`", sql);
}

#[test]
fn test_select_raw_query() {
    let (sql, params) = Sqlite::build("SELECT * FROM cats").unwrap();

    assert_eq!("SELECT * FROM cats", sql);
    assert!(params.is_empty());
}
