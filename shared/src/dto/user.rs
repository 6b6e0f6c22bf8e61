use crate::dto::common::null_as_default;
use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for a portal user, as served by `/api/user/info/{id}`
/// and accepted back by the update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Default)]
pub struct UserDto {
    pub id: i64,
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub major: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

/// Profile fields the edit form is allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Grade,
    Major,
    AvatarUrl,
}

impl UserField {
    /// Maps an input's `name` attribute to the field it edits.
    pub fn from_input_name(name: &str) -> Result<Self> {
        match name {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "grade" => Ok(Self::Grade),
            "major" => Ok(Self::Major),
            "avatar_url" => Ok(Self::AvatarUrl),
            other => Err(SharedError::Validation(format!(
                "Field '{}' cannot be edited",
                other
            ))),
        }
    }

    pub fn input_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Grade => "grade",
            Self::Major => "major",
            Self::AvatarUrl => "avatar_url",
        }
    }
}

impl UserDto {
    /// Returns a copy with one field replaced, leaving the rest untouched.
    pub fn with_field(&self, field: UserField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        let value = value.into();
        match field {
            UserField::Name => updated.name = value,
            UserField::Email => updated.email = value,
            UserField::Grade => updated.grade = value,
            UserField::Major => updated.major = value,
            UserField::AvatarUrl => updated.avatar_url = value,
        }
        updated
    }

    /// Validates the DTO before it is sent to the update endpoint.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
