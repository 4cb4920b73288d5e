use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;
use std::collections::HashMap;

use crate::error::ApiError;

/// Owned scalar parameter for dynamically built statements.
///
/// Values are never interpolated into SQL text; they are carried here until
/// the repository binds them positionally.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Numeric(Decimal),
    Bool(bool),
    Null,
}

impl SqlValue {
    /// Bind this value as the next positional parameter of a query
    pub fn bind_query_as<'q, T>(
        self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> QueryAs<'q, Postgres, T, PgArguments> {
        match self {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Numeric(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Null => query.bind(Option::<String>::None),
        }
    }
}

/// Compiled SET fragment for a partial UPDATE
#[derive(Debug, PartialEq)]
pub struct CompiledUpdate {
    /// `"col_a"=$1, "col_b"=$2, ...`
    pub set_cols: String,
    /// Parameters in clause order; `values[i]` binds to `$i+1`
    pub values: Vec<SqlValue>,
}

/// Compile a sparse update payload into a parameterized SET fragment.
///
/// `data` is an ordered list of (logical field, new value) pairs. Each field
/// is resolved to its column name through `field_to_column`, falling back to
/// the field name itself when unmapped. Clause positions are 1-based and
/// contiguous. An empty payload is a contract violation, not a no-op.
///
/// Only column names (a closed, caller-controlled set) reach the SQL text;
/// values stay behind for positional binding.
pub fn sql_for_partial_update(
    data: Vec<(&str, SqlValue)>,
    field_to_column: &HashMap<&str, &str>,
) -> Result<CompiledUpdate, ApiError> {
    if data.is_empty() {
        return Err(ApiError::InvalidInput("No data to update".to_string()));
    }

    let mut clauses = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.into_iter().enumerate() {
        let column = field_to_column.get(field).copied().unwrap_or(field);
        clauses.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }

    Ok(CompiledUpdate {
        set_cols: clauses.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_mapped_fields_in_order() {
        let data = vec![
            ("firstName", SqlValue::Text("Billy".to_string())),
            ("lastName", SqlValue::Text("Bob".to_string())),
        ];
        let map = HashMap::from([
            ("firstName", "first_name"),
            ("lastName", "last_name"),
            ("isAdmin", "is_admin"),
        ]);

        let compiled = sql_for_partial_update(data, &map).unwrap();

        assert_eq!(compiled.set_cols, r#""first_name"=$1, "last_name"=$2"#);
        assert_eq!(
            compiled.values,
            vec![
                SqlValue::Text("Billy".to_string()),
                SqlValue::Text("Bob".to_string()),
            ]
        );
    }

    #[test]
    fn unmapped_fields_fall_back_to_their_own_name() {
        let data = vec![
            ("name", SqlValue::Text("updated-company-name".to_string())),
            (
                "description",
                SqlValue::Text("updating this company".to_string()),
            ),
        ];
        let map = HashMap::from([("numEmployees", "num_employees"), ("logoUrl", "logo_url")]);

        let compiled = sql_for_partial_update(data, &map).unwrap();

        assert_eq!(compiled.set_cols, r#""name"=$1, "description"=$2"#);
        assert_eq!(compiled.values.len(), 2);
    }

    #[test]
    fn clause_count_matches_payload_and_positions_are_contiguous() {
        let data = vec![
            ("title", SqlValue::Text("new".to_string())),
            ("salary", SqlValue::Int(1000)),
            ("equity", SqlValue::Numeric(Decimal::new(456, 3))),
        ];

        let compiled = sql_for_partial_update(data, &HashMap::new()).unwrap();

        assert_eq!(
            compiled.set_cols,
            r#""title"=$1, "salary"=$2, "equity"=$3"#
        );
        assert_eq!(compiled.values.len(), 3);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = sql_for_partial_update(Vec::new(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
