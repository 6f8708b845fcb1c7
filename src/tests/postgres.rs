use crate::{
    ast::*,
    visitor::{Postgres, Visitor},
};

#[test]
fn test_parameters_are_numbered() {
    let conditions = "id".equals(1).and("name".equals("Musti"));
    let query = Select::from_table("users").so_that(conditions);

    let (sql, params) = Postgres::build(query).unwrap();

    assert_eq!(
        "SELECT \"users\".* FROM \"users\" WHERE (\"id\" = $1 AND \"name\" = $2)",
        sql
    );
    assert_eq!(
        vec![
            ParameterizedValue::from(1),
            ParameterizedValue::from("Musti"),
        ],
        params
    );
}

#[test]
fn test_limit_and_offset_are_numbered() {
    let query = Select::from_table("users").limit(10).offset(2);
    let (sql, params) = Postgres::build(query).unwrap();

    assert_eq!("SELECT \"users\".* FROM \"users\" LIMIT $1 OFFSET $2", sql);
    assert_eq!(
        vec![ParameterizedValue::from(10), ParameterizedValue::from(2)],
        params
    );
}

#[test]
fn test_offset_without_limit() {
    let query = Select::from_table("users").offset(2);
    let (sql, params) = Postgres::build(query).unwrap();

    assert_eq!("SELECT \"users\".* FROM \"users\" OFFSET $1", sql);
    assert_eq!(vec![ParameterizedValue::from(2)], params);
}

#[test]
fn test_insert_on_conflict_do_nothing() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.on_conflict(OnConflict::DoNothing);

    let (sql, params) = Postgres::build(insert).unwrap();

    assert_eq!(
        "INSERT INTO \"users\" (\"foo\") VALUES ($1) ON CONFLICT DO NOTHING",
        sql
    );
    assert_eq!(vec![ParameterizedValue::from(10)], params);
}

#[test]
fn test_insert_returning() {
    let insert: Insert = Insert::single_into("users").value("foo", 10).into();
    let insert = insert.returning(vec!["id"]);

    let (sql, _) = Postgres::build(insert).unwrap();

    assert_eq!(
        "INSERT INTO \"users\" (\"foo\") VALUES ($1) RETURNING \"id\"",
        sql
    );
}

#[test]
fn test_quotes_in_identifiers_are_doubled() {
    let query = Select::from_table("test").column("weird\"name");
    let (sql, _) = Postgres::build(query).unwrap();

    assert_eq!("SELECT \"weird\"\"name\" FROM \"test\"", sql);
}

#[test]
fn test_aggregate_to_string() {
    let query = Select::from_table("users")
        .value(aggregate_to_string(Column::from("firstname")))
        .group_by("lastname");

    let (sql, _) = Postgres::build(query).unwrap();

    assert_eq!(
        "SELECT ARRAY_TO_STRING(ARRAY_AGG(\"firstname\"),',') FROM \"users\" GROUP BY \"lastname\"",
        sql
    );
}
