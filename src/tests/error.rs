use crate::error::{DatabaseConstraint, Error, ErrorKind};

#[test]
fn test_database_constraint_display() {
    let fields = DatabaseConstraint::Fields(vec!["name".to_string(), "email".to_string()]);
    assert_eq!("(name,email)", format!("{fields}"));

    let index = DatabaseConstraint::Index("users_name_idx".to_string());
    assert_eq!("users_name_idx", format!("{index}"));

    assert_eq!("FOREIGN KEY", format!("{}", DatabaseConstraint::ForeignKey));
}

#[test]
fn test_invalid_url_parse_error() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let error = Error::from(parse_error);

    assert!(matches!(error.kind(), ErrorKind::DatabaseUrlIsInvalid(_)));
}

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
#[test]
fn test_unsupported_scheme_is_invalid() {
    let error = crate::ConnectionInfo::from_url("mongodb://localhost/test").unwrap_err();

    match error.kind() {
        ErrorKind::DatabaseUrlIsInvalid(message) => {
            assert!(message.contains("mongodb"));
        }
        kind => panic!("Expected `DatabaseUrlIsInvalid`, got {kind:?}"),
    }
}

#[test]
fn test_conversion_error_keeps_the_message() {
    let error = Error::builder(ErrorKind::ConversionError("oh no".into())).build();
    assert_eq!("Conversion failed: oh no", format!("{error}"));
}
