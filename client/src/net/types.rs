//! Wire DTOs for the remote inventory API.
//!
//! DESIGN
//! ======
//! Field names follow the remote JSON schema (`createdAt`, `telefonoId`,
//! `internos.create`). Integer fields are decoded leniently because the API
//! has been observed to send integral floats and numeric strings; unset text
//! columns may come back as `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Line status as stored by the remote system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Estado {
    #[serde(rename = "ACTIVO")]
    Activo,
    #[serde(rename = "INACTIVO")]
    Inactivo,
}

impl Estado {
    pub const ALL: [Estado; 2] = [Estado::Activo, Estado::Inactivo];

    /// Wire value, also used for search and filter comparisons.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activo => "ACTIVO",
            Self::Inactivo => "INACTIVO",
        }
    }

    /// Human label for select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Activo => "Activo",
            Self::Inactivo => "Inactivo",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == raw)
    }
}

/// One phone/line inventory record as returned by `GET /telefonos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Telefono {
    /// Remote-assigned unique identifier.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub unidad: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub ip: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub rack: String,
    /// Switch port.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub boca: String,
    /// Label of the previous assignment.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub anterior: String,
    pub estado: Estado,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub piso: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub area: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub usuario: String,
    /// ISO-8601 creation timestamp, kept verbatim.
    #[serde(rename = "createdAt", default, deserialize_with = "deserialize_string_or_null")]
    pub created_at: String,
    #[serde(default)]
    pub internos: Option<Interno>,
}

/// Internal extension fields attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interno {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub lugar: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub ter: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub ue: Option<i64>,
    #[serde(rename = "telefonoId", default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub telefono_id: Option<i64>,
}

/// Extension fields of a creation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternoInput {
    pub lugar: Option<i64>,
    pub ter: Option<i64>,
    pub ue: Option<i64>,
}

/// Nested-write wrapper expected by the API: `{ "create": { ... } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedCreate<T> {
    pub create: T,
}

/// Body of `POST /create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTelefono {
    pub ip: String,
    pub unidad: String,
    pub usuario: String,
    pub rack: String,
    pub boca: String,
    pub anterior: String,
    pub estado: Estado,
    pub piso: i64,
    pub area: String,
    pub internos: NestedCreate<InternoInput>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /auth/login`. A missing token means rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// The signed-in user as returned by `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Success body of `POST /create`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub success: Option<String>,
}

/// Error body shape shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn int_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<Option<i64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(E::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(None),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected integer, got {text:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    int_from_value::<D::Error>(&value)?.ok_or_else(|| D::Error::custom("expected integer, got null"))
}

/// Text column that may arrive as `null`; read as empty.
fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    int_from_value::<D::Error>(&value)
}
