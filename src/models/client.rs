//! Client model and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

static PESEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

const MISSING_FIELDS: &str = "All fields are required";
const WRONG_PESEL: &str = "Wrong pesel";

/// Create client request
///
/// Missing and `null` fields deserialize as empty strings so they are reported
/// by validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClient {
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub telephone: String,
    /// 11-digit national identification number
    #[validate(custom(function = "valid_pesel"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub pesel: String,
}

impl CreateClient {
    /// Validate the request, reporting missing fields before a malformed pesel
    pub fn check(&self) -> AppResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let blank = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .any(|e| e.code == "blank");

        let message = if blank { MISSING_FIELDS } else { WRONG_PESEL };
        Err(AppError::Validation(message.to_string()))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(MISSING_FIELDS.into());
        return Err(err);
    }
    Ok(())
}

fn valid_pesel(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if PESEL_RE.is_match(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("pesel");
    err.message = Some(WRONG_PESEL.into());
    Err(err)
}

/// Response for a newly created client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedClient {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pesel: &str) -> CreateClient {
        CreateClient {
            first_name: "Jan".into(),
            last_name: "Kowalski".into(),
            email: "jan@kowalski.pl".into(),
            telephone: "+48 600 100 200".into(),
            pesel: pesel.into(),
        }
    }

    fn message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_client() {
        assert!(request("12345678901").check().is_ok());
    }

    #[test]
    fn test_rejects_malformed_pesel() {
        for pesel in ["123", "12345678901a", "123456789012", "1234567890 ", "１２３４５６７８９０１"] {
            assert_eq!(message(request(pesel).check()), WRONG_PESEL, "pesel {:?}", pesel);
        }
    }

    #[test]
    fn test_empty_pesel_is_a_missing_field() {
        assert_eq!(message(request("").check()), MISSING_FIELDS);
    }

    #[test]
    fn test_whitespace_only_field() {
        let mut client = request("12345678901");
        client.last_name = "   ".into();
        assert_eq!(message(client.check()), MISSING_FIELDS);
    }

    #[test]
    fn test_missing_fields_win_over_pesel() {
        let mut client = request("abc");
        client.email = String::new();
        assert_eq!(message(client.check()), MISSING_FIELDS);
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_field() {
        let client: CreateClient = serde_json::from_str(
            r#"{"firstName":"Anna","lastName":"Nowak","email":"anna@nowak.pl","pesel":"90010112345"}"#,
        )
        .unwrap();
        assert_eq!(client.first_name, "Anna");
        assert_eq!(client.telephone, "");
        assert_eq!(message(client.check()), MISSING_FIELDS);
    }

    #[test]
    fn test_null_field_is_a_missing_field() {
        let client: CreateClient = serde_json::from_str(
            r#"{"firstName":"Jan","lastName":"K","email":"a@b","telephone":null,"pesel":"12345678901"}"#,
        )
        .unwrap();
        assert_eq!(client.telephone, "");
        assert_eq!(message(client.check()), MISSING_FIELDS);
    }
}
