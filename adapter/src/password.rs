//! bcrypt hashing on the blocking thread pool.
//!
//! A single hash at the default cost takes hundreds of milliseconds, so it
//! never runs on an async worker.

use shared::error::{AppError, AppResult};

pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::BlockingTaskError(format!("password hashing task failed: {e}")))?
        .map_err(AppError::from)
}

pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::BlockingTaskError(format!("password verification task failed: {e}")))?
        .map_err(AppError::from)
}
