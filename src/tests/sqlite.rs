use super::_logger::init_test_logger;
use crate::{ast::*, connector::Queryable, error::ErrorKind, serde_support, Database};
use serde::Deserialize;

async fn test_database() -> crate::Result<Database> {
    init_test_logger();

    // An in-memory database exists per connection, so the pool has to stay
    // at one connection to keep seeing the same data.
    Database::new("sqlite::memory:?connection_limit=1").await
}

#[tokio::test]
async fn test_select_a_value_without_tables() -> crate::Result<()> {
    let db = test_database().await?;
    let result = db.select(Select::default().value(1)).await?;

    assert_eq!(
        Some(1),
        result.into_iter().next().and_then(|row| row[0].as_i64()),
    );

    Ok(())
}

#[tokio::test]
async fn test_insert_and_select_roundtrip() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER)")
        .await?;

    let insert = Insert::single_into("users").value("name", "Musti").value("age", 9);
    let result = db.insert(insert.into()).await?;

    assert_eq!(Some(1), result.last_insert_id());

    let select = Select::from_table("users").so_that("name".equals("Musti"));
    let rows = db.select(select).await?;

    assert_eq!(1, rows.len());

    let row = rows.first().unwrap();
    assert_eq!(Some(1), row.get("id").and_then(|id| id.as_i64()));
    assert_eq!(Some("Musti"), row.get("name").and_then(|name| name.as_str()));
    assert_eq!(Some(9), row.get("age").and_then(|age| age.as_i64()));

    Ok(())
}

#[tokio::test]
async fn test_insert_returning_columns() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    let insert: Insert = Insert::single_into("users").value("name", "Naukio").into();
    let result = db.insert(insert.returning(vec!["id", "name"])).await?;

    assert_eq!(1, result.len());

    let row = result.first().unwrap();
    assert_eq!(Some(1), row.get("id").and_then(|id| id.as_i64()));
    assert_eq!(
        Some("Naukio"),
        row.get("name").and_then(|name| name.as_str())
    );

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_affected_rows() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    for name in ["Musti", "Naukio", "Belka"] {
        db.insert(Insert::single_into("users").value("name", name).into())
            .await?;
    }

    let update = Update::table("users")
        .set("name", "Strelka")
        .so_that("name".equals("Belka"));

    assert_eq!(1, db.update(update).await?);

    let delete = Delete::from_table("users").so_that("id".less_than(3));
    assert_eq!(2, db.delete(delete).await?);

    let rows = db.select(Select::from_table("users")).await?;
    assert_eq!(1, rows.len());

    let row = rows.first().unwrap();
    assert_eq!(
        Some("Strelka"),
        row.get("name").and_then(|name| name.as_str())
    );

    Ok(())
}

#[tokio::test]
async fn test_select_with_boolean_and_null_values() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE flags (id INTEGER PRIMARY KEY, active BOOLEAN NOT NULL, note TEXT)")
        .await?;

    db.insert(
        Insert::single_into("flags")
            .value("active", true)
            .value("note", ParameterizedValue::Null)
            .into(),
    )
    .await?;

    let rows = db.select(Select::from_table("flags")).await?;
    let row = rows.first().unwrap();

    assert_eq!(Some(true), row.get("active").and_then(|v| v.as_bool()));
    assert!(row.get("note").map(|v| v.is_null()).unwrap_or(false));

    Ok(())
}

#[tokio::test]
async fn test_query_raw_with_parameters() -> crate::Result<()> {
    let db = test_database().await?;

    let rows = db
        .query_raw(
            "SELECT ? + ? AS summed",
            vec![ParameterizedValue::from(1), ParameterizedValue::from(2)],
        )
        .await?;

    let row = rows.first().unwrap();
    assert_eq!(Some(3), row.get("summed").and_then(|v| v.as_i64()));

    Ok(())
}

#[tokio::test]
async fn test_transaction_rollback_and_commit() -> crate::Result<()> {
    use crate::connector::TransactionCapable;

    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    let tx = db.start_transaction().await?;
    tx.insert(Insert::single_into("users").value("name", "Musti").into())
        .await?;
    tx.rollback().await?;

    let rows = db.select(Select::from_table("users")).await?;
    assert!(rows.is_empty());

    let tx = db.start_transaction().await?;
    tx.insert(Insert::single_into("users").value("name", "Musti").into())
        .await?;
    tx.commit().await?;

    let rows = db.select(Select::from_table("users")).await?;
    assert_eq!(1, rows.len());

    Ok(())
}

#[tokio::test]
async fn test_unique_constraint_violation_is_mapped() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT NOT NULL UNIQUE)")
        .await?;

    db.insert(
        Insert::single_into("users")
            .value("email", "musti@example.com")
            .into(),
    )
    .await?;

    let err = db
        .insert(
            Insert::single_into("users")
                .value("email", "musti@example.com")
                .into(),
        )
        .await
        .unwrap_err();

    match err.kind() {
        ErrorKind::UniqueConstraintViolation { constraint } => {
            assert_eq!(
                &crate::error::DatabaseConstraint::Fields(vec!["email".to_string()]),
                constraint
            );
        }
        kind => panic!("Expected `UniqueConstraintViolation`, got {kind:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_insert_or_ignore_skips_the_conflict() -> crate::Result<()> {
    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT NOT NULL UNIQUE)")
        .await?;

    let insert: Insert = Insert::single_into("users")
        .value("email", "musti@example.com")
        .into();

    db.insert(insert.clone().on_conflict(OnConflict::DoNothing))
        .await?;
    db.insert(insert.on_conflict(OnConflict::DoNothing)).await?;

    let rows = db.select(Select::from_table("users")).await?;
    assert_eq!(1, rows.len());

    Ok(())
}

#[tokio::test]
async fn test_unknown_table_error_is_mapped() -> crate::Result<()> {
    let db = test_database().await?;

    let err = db
        .select(Select::from_table("not_there"))
        .await
        .unwrap_err();

    match err.kind() {
        ErrorKind::TableDoesNotExist { table } => {
            assert_eq!("not_there", table.as_str());
        }
        kind => panic!("Expected `TableDoesNotExist`, got {kind:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_version_returns_a_string() -> crate::Result<()> {
    let db = test_database().await?;
    let version = db.version().await?;

    assert!(version.map(|v| !v.is_empty()).unwrap_or(false));

    Ok(())
}

#[tokio::test]
async fn test_deserialize_rows_into_a_struct() -> crate::Result<()> {
    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: i64,
        name: String,
    }

    let db = test_database().await?;

    db.raw_cmd("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .await?;

    db.insert(Insert::single_into("users").value("name", "Musti").into())
        .await?;

    let rows = db.select(Select::from_table("users")).await?;
    let users: Vec<User> = serde_support::from_rows(rows)?;

    assert_eq!(
        vec![User {
            id: 1,
            name: "Musti".to_string(),
        }],
        users
    );

    Ok(())
}
