use crate::entities::users::User as UserEntity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(rename = "id")]
    pub user_id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            login: value.login,
            name: value.name,
            birthday: value.birthday,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserArgs {
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserArgs {
    #[serde(rename = "id")]
    pub user_id: i64,
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// The name shown for a user: `name` unless it is missing or blank, else `login`.
pub fn display_name(name: Option<&str>, login: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_owned(),
        _ => login.to_owned(),
    }
}
