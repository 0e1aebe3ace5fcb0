//! User profile model.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use onboard_core::error::CoreError;
use onboard_core::types::DbId;
use onboard_core::user_profile::{decode_column, Address, FieldValue, UserField};

/// A raw row from the `users` table, exactly as stored.
#[derive(Debug, Clone, Default, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub email_address: Option<String>,
    pub password: Option<String>,
    pub birthdate: Option<String>,
    /// Serialized JSON object.
    pub address: Option<String>,
    pub about_me: Option<String>,
}

impl UserRow {
    /// Stored text of one mutable column.
    pub fn column(&self, field: UserField) -> Option<&str> {
        match field {
            UserField::EmailAddress => self.email_address.as_deref(),
            UserField::Password => self.password.as_deref(),
            UserField::Birthdate => self.birthdate.as_deref(),
            UserField::Address => self.address.as_deref(),
            UserField::AboutMe => self.about_me.as_deref(),
        }
    }
}

/// A validated user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: DbId,
    pub email_address: Option<String>,
    pub password: Option<String>,
    pub birthdate: Option<String>,
    pub address: Option<Address>,
    pub about_me: Option<String>,
}

impl User {
    /// Rebuild a profile from a stored row, re-checking every field.
    pub fn reconstruct(row: &UserRow, now: NaiveDateTime) -> Result<Self, CoreError> {
        let address = match decode_column(UserField::Address, row.column(UserField::Address), now)?
        {
            FieldValue::Null => None,
            FieldValue::Address(address) => Some(address),
            FieldValue::Text(_) => {
                return Err(CoreError::Deserialization(
                    "address column did not decode to an address".to_string(),
                ))
            }
        };

        Ok(Self {
            id: row.id,
            email_address: decode_text(row, UserField::EmailAddress, now)?,
            password: decode_text(row, UserField::Password, now)?,
            birthdate: decode_text(row, UserField::Birthdate, now)?,
            address,
            about_me: decode_text(row, UserField::AboutMe, now)?,
        })
    }

    /// Whether no profile field has been filled in yet.
    pub fn is_blank(&self) -> bool {
        let empty = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
        empty(&self.email_address)
            && empty(&self.password)
            && empty(&self.birthdate)
            && self.address.as_ref().map_or(true, Address::is_cleared)
            && empty(&self.about_me)
    }
}

impl TryFrom<UserRow> for User {
    type Error = CoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Self::reconstruct(&row, Utc::now().naive_utc())
    }
}

fn decode_text(
    row: &UserRow,
    field: UserField,
    now: NaiveDateTime,
) -> Result<Option<String>, CoreError> {
    match decode_column(field, row.column(field), now)? {
        FieldValue::Null => Ok(None),
        FieldValue::Text(text) => Ok(Some(text)),
        FieldValue::Address(_) => Err(CoreError::Deserialization(format!(
            "{field} column decoded to an address"
        ))),
    }
}
