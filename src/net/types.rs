//! Shared wire DTOs for the client/REST API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON (`_id`, camelCase) through serde
//! attributes so the Rust side can keep snake_case names. Numeric fields are
//! decoded leniently because the API serializes whole numbers as floats in
//! some responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role; decides which routes and actions are available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Librarian,
}

impl Role {
    /// Wire value, also used for `<select>` option values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Librarian => "librarian",
        }
    }

    /// Parse a wire value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(Self::Student),
            "librarian" => Some(Self::Librarian),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Librarian => "Librarian",
        }
    }
}

/// A library account as returned by `/auth/*` and `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog title with its available stock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub published_year: i32,
    pub genre: String,
    /// Copies currently on the shelf. Decremented server-side on checkout.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub stock: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Book {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A reference that the API may send either as a bare id or populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Full(T),
}

impl<T> Ref<T> {
    pub fn full(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Full(value) => Some(value),
        }
    }
}

impl Ref<User> {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Full(user) => &user.id,
        }
    }
}

impl Ref<Book> {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Full(book) => &book.id,
        }
    }
}

/// A lending record linking a user to a book.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Ref<User>,
    pub book: Ref<Book>,
    pub checkout_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    pub returned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `/auth/login`, `/auth/register`, and `/auth/me` responses.
///
/// `/auth/me` may omit `token`; when present it replaces the stored credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

/// Error payload returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Full book payload for `POST /books` and `PUT /books/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: String,
    pub stock: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub book: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub checkout_id: String,
}

/// Payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Partial payload for `PUT /users/{id}`. `password` is sent only when changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom(format!("expected number, got {value}")));
    };
    let wide = if let Some(int) = number.as_i64() {
        int
    } else {
        #[allow(clippy::cast_possible_truncation)]
        match number.as_f64() {
            Some(float) if float.is_finite() && float.fract() == 0.0 => float as i64,
            _ => return Err(D::Error::custom(format!("expected whole number, got {number}"))),
        }
    };
    i32::try_from(wide).map_err(|_| D::Error::custom(format!("value {wide} out of range for i32")))
}
