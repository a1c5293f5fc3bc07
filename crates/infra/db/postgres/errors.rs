use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::value_objects::store_errors::{
    ForeignKeyViolation, UniqueViolation, field_from_constraint, field_from_detail,
};

/// Lifts constraint violations out of a failed write into the typed store
/// errors the use cases inspect. Everything else passes through untouched.
pub fn translate_write_error(err: DieselError, table: &str) -> anyhow::Error {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let constraint = info.constraint_name().map(str::to_string);
            let field = info
                .column_name()
                .map(str::to_string)
                .or_else(|| info.details().and_then(field_from_detail))
                .or_else(|| {
                    constraint
                        .as_deref()
                        .and_then(|name| field_from_constraint(name, table))
                });

            UniqueViolation { constraint, field }.into()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            ForeignKeyViolation {
                constraint: info.constraint_name().map(str::to_string),
            }
            .into()
        }
        other => anyhow::Error::new(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;

    struct FakeInfo {
        details: Option<&'static str>,
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for FakeInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            self.details
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, info: FakeInfo) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(info))
    }

    #[test]
    fn unique_violation_names_the_field_from_details() {
        let err = translate_write_error(
            database_error(
                DatabaseErrorKind::UniqueViolation,
                FakeInfo {
                    details: Some("Key (name)=(Adventure) already exists."),
                    constraint: Some("categories_name_key"),
                },
            ),
            "categories",
        );

        let violation = err.downcast_ref::<UniqueViolation>().unwrap();
        assert_eq!(violation.field.as_deref(), Some("name"));
        assert_eq!(violation.constraint.as_deref(), Some("categories_name_key"));
    }

    #[test]
    fn unique_violation_falls_back_to_constraint_name() {
        let err = translate_write_error(
            database_error(
                DatabaseErrorKind::UniqueViolation,
                FakeInfo {
                    details: None,
                    constraint: Some("users_email_key"),
                },
            ),
            "users",
        );

        let violation = err.downcast_ref::<UniqueViolation>().unwrap();
        assert_eq!(violation.field.as_deref(), Some("email"));
    }

    #[test]
    fn foreign_key_violation_is_typed() {
        let err = translate_write_error(
            database_error(
                DatabaseErrorKind::ForeignKeyViolation,
                FakeInfo {
                    details: None,
                    constraint: Some("tourist_plans_city_id_fkey"),
                },
            ),
            "tourist_plans",
        );

        assert!(err.downcast_ref::<ForeignKeyViolation>().is_some());
    }

    #[test]
    fn other_failures_are_passed_through() {
        let err = translate_write_error(DieselError::NotFound, "cities");

        assert!(err.downcast_ref::<UniqueViolation>().is_none());
        assert!(err.downcast_ref::<DieselError>().is_some());
    }
}
