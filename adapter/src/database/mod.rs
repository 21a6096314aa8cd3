use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Utc;
use kernel::model::{id::UserId, role::Role};
use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use tokio::sync::Mutex;

use crate::password::hash_password;

pub mod model;

use model::{user::UserRow, Document};

// ファイル全体を一つの JSON ドキュメントとして読み書きする保存先。
// 書き込みはプロセス内で直列化される
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Opens the store at `cfg.path`, writing an initial document with one
    /// admin user when the file does not exist yet.
    pub async fn open(cfg: &DatabaseConfig, hash_cost: u32) -> AppResult<Self> {
        let store = Self {
            inner: Arc::new(StoreInner {
                path: cfg.path.clone(),
                lock: Mutex::new(()),
            }),
        };

        if let Some(parent) = cfg.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::StoreIoError)?;
        }

        match tokio::fs::metadata(&cfg.path).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let document = initial_document(cfg, hash_cost).await?;
                store.persist(&document).await?;
                tracing::info!(path = %cfg.path.display(), "created a new data store");
            }
            Err(e) => return Err(AppError::StoreIoError(e)),
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub async fn read(&self) -> AppResult<Document> {
        let _guard = self.inner.lock.lock().await;
        self.load().await
    }

    /// Loads the document, applies `f` and rewrites the whole file. Nothing
    /// is written when `f` fails.
    pub async fn transaction<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Document) -> AppResult<T> + Send,
        T: Send,
    {
        let _guard = self.inner.lock.lock().await;
        let mut document = self.load().await?;
        let value = f(&mut document)?;
        self.persist(&document).await?;
        Ok(value)
    }

    pub async fn ping(&self) -> bool {
        self.read().await.is_ok()
    }

    async fn load(&self) -> AppResult<Document> {
        let bytes = tokio::fs::read(&self.inner.path)
            .await
            .map_err(AppError::StoreIoError)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // 一時ファイルに書いてから置き換える
    async fn persist(&self, document: &Document) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.inner.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(AppError::StoreIoError)?;
        tokio::fs::rename(&tmp, &self.inner.path)
            .await
            .map_err(AppError::StoreIoError)
    }
}

async fn initial_document(cfg: &DatabaseConfig, hash_cost: u32) -> AppResult<Document> {
    let admin = UserRow {
        id: UserId::new(1),
        name: "Administrator".into(),
        email: cfg.initial_admin_email.clone(),
        password_hash: hash_password(&cfg.initial_admin_password, hash_cost).await?,
        role: Role::Admin.as_ref().to_string(),
        created_at: Some(Utc::now()),
    };
    Ok(Document {
        users: vec![admin],
        ..Default::default()
    })
}

pub async fn connect_database_with(cfg: &DatabaseConfig, hash_cost: u32) -> AppResult<JsonStore> {
    JsonStore::open(cfg, hash_cost).await
}


#[cfg(test)]
mod tests {
    use super::test_support::open_temp_store;
    use super::*;

    #[tokio::test]
    async fn open_seeds_an_admin_user() {
        let (_dir, store) = open_temp_store().await;
        let document = store.read().await.unwrap();

        assert_eq!(document.users.len(), 1);
        let admin = &document.users[0];
        assert_eq!(admin.id, UserId::new(1));
        assert_eq!(admin.role, "admin");
        assert!(bcrypt::verify("admin123", &admin.password_hash).unwrap());
        assert!(document.rooms.is_empty());
        assert!(document.reservations.is_empty());
    }

    #[tokio::test]
    async fn open_keeps_an_existing_document() {
        let (dir, store) = open_temp_store().await;
        store
            .transaction(|doc| {
                doc.users[0].name = "Renamed".into();
                Ok(())
            })
            .await
            .unwrap();

        let cfg = DatabaseConfig {
            path: store.path().to_path_buf(),
            initial_admin_email: "other@example.com".into(),
            initial_admin_password: "x".into(),
        };
        let reopened = JsonStore::open(&cfg, 4).await.unwrap();
        let document = reopened.read().await.unwrap();
        assert_eq!(document.users[0].name, "Renamed");
        drop(dir);
    }

    #[tokio::test]
    async fn failed_transaction_writes_nothing() {
        let (_dir, store) = open_temp_store().await;
        let res: AppResult<()> = store
            .transaction(|doc| {
                doc.users.clear();
                Err(AppError::BadRequest("abort".into()))
            })
            .await;
        assert!(res.is_err());
        assert_eq!(store.read().await.unwrap().users.len(), 1);
    }

    #[tokio::test]
    async fn missing_collections_read_as_empty() {
        let (_dir, store) = open_temp_store().await;
        tokio::fs::write(store.path(), br#"{"users": []}"#)
            .await
            .unwrap();
        let document = store.read().await.unwrap();
        assert!(document.sites.is_empty());
        assert!(document.room_resources.is_empty());
    }

    #[tokio::test]
    async fn ping_fails_on_corrupted_file() {
        let (_dir, store) = open_temp_store().await;
        assert!(store.ping().await);
        tokio::fs::write(store.path(), b"not json").await.unwrap();
        assert!(!store.ping().await);
    }
}
