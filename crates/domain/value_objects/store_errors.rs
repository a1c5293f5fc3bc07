use thiserror::Error;

/// A write was rejected because it would duplicate a unique column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unique constraint violated: {}", constraint.as_deref().unwrap_or("unknown"))]
pub struct UniqueViolation {
    pub constraint: Option<String>,
    pub field: Option<String>,
}

/// A write referenced a row that does not exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("foreign key constraint violated: {}", constraint.as_deref().unwrap_or("unknown"))]
pub struct ForeignKeyViolation {
    pub constraint: Option<String>,
}

/// Extracts the column name from a PostgreSQL detail line such as
/// `Key (name)=(Adventure) already exists.`
pub fn field_from_detail(detail: &str) -> Option<String> {
    let start = detail.find("Key (")? + "Key (".len();
    let end = start + detail[start..].find(")=")?;
    let field = detail[start..end].trim();

    if field.is_empty() {
        return None;
    }

    Some(field.to_string())
}

/// Falls back to the `<table>_<column>_key` naming convention PostgreSQL uses
/// for inline UNIQUE constraints.
pub fn field_from_constraint(constraint: &str, table: &str) -> Option<String> {
    let field = constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_key")?;

    if field.is_empty() {
        return None;
    }

    Some(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_read_from_postgres_detail() {
        assert_eq!(
            field_from_detail("Key (name)=(Adventure) already exists."),
            Some("name".to_string())
        );
        assert_eq!(
            field_from_detail("Key (email)=(a@b.co) already exists."),
            Some("email".to_string())
        );
    }

    #[test]
    fn unparsable_detail_yields_none() {
        assert_eq!(field_from_detail("duplicate key value"), None);
        assert_eq!(field_from_detail("Key ()=(x) already exists."), None);
    }

    #[test]
    fn field_is_read_from_constraint_name() {
        assert_eq!(
            field_from_constraint("tourist_plans_title_key", "tourist_plans"),
            Some("title".to_string())
        );
        assert_eq!(field_from_constraint("categories_pkey", "categories"), None);
        assert_eq!(field_from_constraint("users_email_key", "cities"), None);
    }
}
