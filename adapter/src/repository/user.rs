use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserRole},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::{
        model::{next_id, user::UserRow},
        JsonStore,
    },
    password::hash_password,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: JsonStore,
    hash_cost: u32,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let document = self.db.read().await?;
        document
            .users
            .iter()
            .find(|u| u.id == current_user_id)
            .map(User::try_from)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let document = self.db.read().await?;
        document.users.iter().map(User::try_from).collect()
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        // ハッシュ計算は重いのでロックを取る前に済ませておく
        let password_hash = hash_password(&event.password, self.hash_cost).await?;

        let row = self
            .db
            .transaction(move |doc| {
                if doc.users.iter().any(|u| u.email == event.email) {
                    return Err(AppError::BadRequest("Email already registered".into()));
                }
                let row = UserRow {
                    id: UserId::new(next_id(&doc.users)),
                    name: event.name,
                    email: event.email,
                    password_hash,
                    role: event.role.as_ref().to_string(),
                    created_at: Some(Utc::now()),
                };
                doc.users.push(row.clone());
                Ok(row)
            })
            .await?;

        tracing::info!(user_id = %row.id, "registered a new user");
        User::try_from(&row)
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<User> {
        let row = self
            .db
            .transaction(move |doc| {
                let user = doc
                    .users
                    .iter_mut()
                    .find(|u| u.id == event.user_id)
                    .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;
                user.role = event.role.as_ref().to_string();
                Ok(user.clone())
            })
            .await?;
        User::try_from(&row)
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        self.db
            .transaction(move |doc| {
                let before = doc.users.len();
                doc.users.retain(|u| u.id != event.user_id);
                if doc.users.len() == before {
                    return Err(AppError::EntityNotFound("User not found".into()));
                }
                Ok(())
            })
            .await
    }
}
