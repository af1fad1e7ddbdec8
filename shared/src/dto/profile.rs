use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;
use crate::birth_date::{from_epoch_millis, to_display_date, to_timestamp};
use crate::error::{Result, SharedError};
use crate::models::profile::ProfileRecord;

/// Profile as returned by `GET /api/users?wallet=...`.
///
/// Any field may be missing or null; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileDto {
    #[serde(rename = "nombre", default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(rename = "telefono", default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(rename = "lugarResidencia", default, deserialize_with = "lenient_string")]
    pub residence: Option<String>,
    /// Stored birth date: an ISO-8601 string or epoch milliseconds
    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<Value>,
}

/// Accepts strings, numbers and booleans as text; null becomes `None`
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

impl ProfileDto {
    /// Parses a read response body. An empty body or JSON `null` means the
    /// wallet has no profile yet.
    pub fn parse_body(body: &str) -> Result<Option<ProfileRecord>> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Option<ProfileDto>>(body)? {
            Some(dto) => dto.into_record().map(Some),
            None => Ok(None),
        }
    }

    /// Converts to form state, falling back to empty strings field by field
    pub fn into_record(self) -> Result<ProfileRecord> {
        let birth_date = match self.birth_date {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(raw)) => to_display_date(&raw)?,
            Some(Value::Number(millis)) => match millis.as_i64() {
                Some(millis) => from_epoch_millis(millis)?,
                None => return Err(SharedError::InvalidDate(millis.to_string())),
            },
            Some(other) => return Err(SharedError::InvalidDate(other.to_string())),
        };

        Ok(ProfileRecord {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            residence: self.residence.unwrap_or_default(),
            birth_date,
        })
    }
}

/// Body of the create-or-update `POST /api/users` request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SaveProfileRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(rename = "apellido")]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "lugarResidencia")]
    pub residence: String,

    /// Birth date as a UTC ISO-8601 timestamp
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: String,

    /// Wallet the profile belongs to
    pub wallet: String,

    /// Same address as `wallet`; the service records it as the owner
    pub owner: String,
}

impl SaveProfileRequest {
    /// Builds and validates the request for `wallet` from the form state
    pub fn from_form(record: &ProfileRecord, wallet: &str) -> Result<Self> {
        let request = Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            residence: record.residence.clone(),
            birth_date: to_timestamp(&record.birth_date)?,
            wallet: wallet.to_string(),
            owner: wallet.to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}
