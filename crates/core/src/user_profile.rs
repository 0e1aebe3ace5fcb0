//! User profile fields and their validation rules.
//!
//! The wizard fills a profile one field at a time, so every rule here
//! looks at a single field value in isolation. A profile is valid in any
//! partially-filled state: an empty string or JSON `null` is always
//! accepted and means "not provided yet".
//!
//! [`UserField::ALL`] is the single declaration of the mutable fields. The
//! partial update planner, the row decoder in the `db` crate, and the SQL
//! column lists are all derived from it.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::us_states;

// ---------------------------------------------------------------------------
// Field declaration
// ---------------------------------------------------------------------------

/// A mutable column of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    EmailAddress,
    Password,
    Birthdate,
    Address,
    AboutMe,
}

impl UserField {
    /// Every mutable field, in column order. `id` is not included.
    pub const ALL: [UserField; 5] = [
        Self::EmailAddress,
        Self::Password,
        Self::Birthdate,
        Self::Address,
        Self::AboutMe,
    ];

    /// Column name, which is also the JSON key used by clients.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailAddress => "email_address",
            Self::Password => "password",
            Self::Birthdate => "birthdate",
            Self::Address => "address",
            Self::AboutMe => "about_me",
        }
    }

    /// Look up a field by its column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the mutable fields, in column order.
pub fn fields() -> Vec<&'static str> {
    UserField::ALL.iter().map(|f| f.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// JSON keys of a structured address.
pub const ADDRESS_KEYS: [&str; 4] = ["street", "city", "state", "zip"];

/// A US postal address.
///
/// An address whose four parts are all empty means "no address".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn is_cleared(&self) -> bool {
        self.street.is_empty() && self.city.is_empty() && self.state.is_empty() && self.zip.is_empty()
    }
}

/// A validated, normalized field value ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Clears the column.
    Null,
    Text(String),
    Address(Address),
}

impl FieldValue {
    /// The value as stored in its TEXT column. Addresses are serialized to JSON.
    pub fn to_column(&self) -> Result<Option<String>, CoreError> {
        match self {
            Self::Null => Ok(None),
            Self::Text(s) => Ok(Some(s.clone())),
            Self::Address(a) => serde_json::to_string(a)
                .map(Some)
                .map_err(|e| CoreError::Internal(format!("Failed to serialize address: {e}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Ages must be strictly greater than this many years.
pub const MIN_AGE_YEARS: f64 = 0.0;

/// Ages must be strictly less than this many years (oldest verified human).
pub const MAX_AGE_YEARS: f64 = 122.0;

/// Expected birthdate format.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 86_400;

/// Validate a candidate value for one field against the current UTC time.
pub fn validate(field: UserField, value: &Value) -> Result<FieldValue, CoreError> {
    validate_at(field, value, Utc::now().naive_utc())
}

/// Validate a candidate value for a field given by name.
///
/// Unknown names are rejected.
pub fn validate_named(name: &str, value: &Value) -> Result<FieldValue, CoreError> {
    let field = UserField::from_name(name)
        .ok_or_else(|| CoreError::Validation(format!("Unknown field '{name}'")))?;
    validate(field, value)
}

/// Validate a candidate value for one field, computing ages relative to `now`.
pub fn validate_at(
    field: UserField,
    value: &Value,
    now: NaiveDateTime,
) -> Result<FieldValue, CoreError> {
    if value.is_null() {
        return Ok(FieldValue::Null);
    }

    match field {
        UserField::EmailAddress => {
            let text = expect_text(field, value)?;
            validate_email(text)?;
            Ok(FieldValue::Text(text.to_string()))
        }
        UserField::Password => {
            let text = expect_text(field, value)?;
            validate_password(text)?;
            Ok(FieldValue::Text(text.to_string()))
        }
        UserField::Birthdate => {
            let text = expect_text(field, value)?;
            validate_birthdate(text, now)?;
            Ok(FieldValue::Text(text.to_string()))
        }
        UserField::Address => validate_address(value).map(FieldValue::Address),
        UserField::AboutMe => Ok(FieldValue::Text(expect_text(field, value)?.to_string())),
    }
}

fn expect_text(field: UserField, value: &Value) -> Result<&str, CoreError> {
    value
        .as_str()
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a string")))
}

fn has_surrounding_whitespace(s: &str) -> bool {
    s.trim() != s
}

/// Non-empty values must be a syntactically valid email address.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Ok(());
    }
    if !value.validate_email() {
        return Err(CoreError::Validation(format!(
            "invalid email address: {value:?}"
        )));
    }
    Ok(())
}

/// Non-empty passwords may not start or end with whitespace.
pub fn validate_password(value: &str) -> Result<(), CoreError> {
    if !value.is_empty() && has_surrounding_whitespace(value) {
        return Err(CoreError::Validation(format!(
            "invalid leading/trailing spaces in password: {value:?}"
        )));
    }
    Ok(())
}

/// Age in years at `now` of someone born at midnight on `birthdate`.
///
/// Whole elapsed days (rounded down) divided by 365.
pub fn age_in_years(birthdate: NaiveDate, now: NaiveDateTime) -> f64 {
    let elapsed = now - birthdate.and_time(NaiveTime::MIN);
    let days = elapsed.num_seconds().div_euclid(SECONDS_PER_DAY);
    days as f64 / 365.0
}

/// Non-empty birthdates must be `YYYY-MM-DD` and give an age in
/// `(MIN_AGE_YEARS, MAX_AGE_YEARS)`.
pub fn validate_birthdate(value: &str, now: NaiveDateTime) -> Result<(), CoreError> {
    if value.is_empty() {
        return Ok(());
    }
    let birthdate = NaiveDate::parse_from_str(value, BIRTHDATE_FORMAT).map_err(|e| {
        CoreError::Validation(format!("invalid birthdate {value:?}: {e}"))
    })?;

    let age = age_in_years(birthdate, now);
    if !(MIN_AGE_YEARS < age && age < MAX_AGE_YEARS) {
        return Err(CoreError::Validation(format!(
            "invalid age of {age:.2} years, should be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS}"
        )));
    }
    Ok(())
}

/// Validate a structured address.
///
/// All-empty parts clear the address. Otherwise the keys must be exactly
/// [`ADDRESS_KEYS`], no part may carry surrounding whitespace, and a
/// non-empty `state` must be a known US state or territory.
pub fn validate_address(value: &Value) -> Result<Address, CoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::Validation("address must be an object".to_string()))?;

    if obj.values().all(|v| v.as_str() == Some("")) {
        return Ok(Address::default());
    }

    let expected: BTreeSet<&str> = ADDRESS_KEYS.into_iter().collect();
    let actual: BTreeSet<&str> = obj.keys().map(String::as_str).collect();
    if actual != expected {
        return Err(CoreError::Validation(format!(
            "Expected address fields {}, got {}",
            ADDRESS_KEYS.join(", "),
            actual.into_iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let address = Address {
        street: address_part(obj, "street")?,
        city: address_part(obj, "city")?,
        state: address_part(obj, "state")?,
        zip: address_part(obj, "zip")?,
    };

    if !address.state.is_empty() && !us_states::is_valid_state(&address.state) {
        return Err(CoreError::Validation(format!(
            "invalid state name/abbr: {:?}",
            address.state
        )));
    }

    Ok(address)
}

fn address_part(obj: &Map<String, Value>, key: &str) -> Result<String, CoreError> {
    let part = obj
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::Validation(format!("address {key:?} must be a string")))?;
    if has_surrounding_whitespace(part) {
        return Err(CoreError::Validation(format!(
            "invalid leading/trailing spaces in {key:?} field of address: {part:?}"
        )));
    }
    Ok(part.to_string())
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

/// Validated field changes, in column order.
pub type UpdatePlan = Vec<(UserField, FieldValue)>;

/// Turn a client-supplied `{field: value}` map into a list of validated
/// changes.
///
/// Keys that are not mutable fields are ignored. Every retained field is
/// validated before anything is returned, so a single bad value rejects the
/// whole update.
pub fn plan_partial_update(proposed: &Map<String, Value>) -> Result<UpdatePlan, CoreError> {
    plan_partial_update_at(proposed, Utc::now().naive_utc())
}

/// [`plan_partial_update`] with an explicit clock.
pub fn plan_partial_update_at(
    proposed: &Map<String, Value>,
    now: NaiveDateTime,
) -> Result<UpdatePlan, CoreError> {
    let retained: Vec<(UserField, &Value)> = UserField::ALL
        .into_iter()
        .filter_map(|f| proposed.get(f.as_str()).map(|v| (f, v)))
        .collect();

    if retained.is_empty() {
        return Err(CoreError::NoUpdatableFields);
    }

    retained
        .into_iter()
        .map(|(field, value)| validate_at(field, value, now).map(|v| (field, v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

/// Decode and re-validate a stored column value.
///
/// Any failure means the row was not written by this system and is reported
/// as [`CoreError::Deserialization`].
pub fn decode_column(
    field: UserField,
    stored: Option<&str>,
    now: NaiveDateTime,
) -> Result<FieldValue, CoreError> {
    let Some(stored) = stored else {
        return Ok(FieldValue::Null);
    };

    let value = match field {
        UserField::Address => serde_json::from_str(stored).map_err(|e| {
            CoreError::Deserialization(format!("address column is not valid JSON: {e}"))
        })?,
        _ => Value::String(stored.to_string()),
    };

    validate_at(field, &value, now).map_err(|e| match e {
        CoreError::Validation(msg) => CoreError::Deserialization(format!("{field}: {msg}")),
        other => other,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
