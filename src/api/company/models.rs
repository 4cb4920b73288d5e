use serde::Deserialize;
use validator::Validate;

use crate::db::sql::SqlValue;

/// Payload for creating a company
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyNew {
    #[validate(length(min = 1, max = 25, message = "Handle must be 1 to 25 characters"))]
    pub handle: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0, message = "numEmployees must be non-negative"))]
    pub num_employees: Option<i32>,

    pub logo_url: Option<String>,
}

/// Payload for a partial company update.
///
/// The handle is not representable here; unknown fields fail deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "numEmployees must be non-negative"))]
    pub num_employees: Option<i32>,

    pub logo_url: Option<String>,
}

impl CompanyUpdate {
    /// Mutable fields present in the payload, in declaration order.
    ///
    /// Logical names are the API's camelCase field names; the repository maps
    /// them to column names when compiling the update.
    pub fn set_pairs(&self) -> Vec<(&'static str, SqlValue)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", SqlValue::Text(name.clone())));
        }
        if let Some(description) = &self.description {
            pairs.push(("description", SqlValue::Text(description.clone())));
        }
        if let Some(num_employees) = self.num_employees {
            pairs.push(("numEmployees", SqlValue::Int(num_employees)));
        }
        if let Some(logo_url) = &self.logo_url {
            pairs.push(("logoUrl", SqlValue::Text(logo_url.clone())));
        }
        pairs
    }
}

/// Listing filters; unknown filter names fail query-string deserialization
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilters {
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_payload_rejects_handle() {
        let result = serde_json::from_value::<CompanyUpdate>(json!({ "handle": "new-handle" }));
        assert!(result.is_err());
    }

    #[test]
    fn set_pairs_use_camel_case_logical_names() {
        let update: CompanyUpdate = serde_json::from_value(json!({
            "numEmployees": 42,
            "logoUrl": "https://example.com/logo.png"
        }))
        .unwrap();

        let fields: Vec<&str> = update.set_pairs().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["numEmployees", "logoUrl"]);
    }
}
