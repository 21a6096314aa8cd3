use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::str::FromStr;

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for UserRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl TryFrom<&UserRow> for User {
    type Error = AppError;

    fn try_from(value: &UserRow) -> AppResult<Self> {
        let role = Role::from_str(&value.role).map_err(|e| {
            AppError::ConversionEntityError(format!("user {} has role {}: {e}", value.id, value.role))
        })?;
        Ok(User {
            user_id: value.id,
            name: value.name.clone(),
            email: value.email.clone(),
            role,
        })
    }
}
