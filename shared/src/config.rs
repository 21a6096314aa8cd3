use std::{env, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            path: PathBuf::from(var_or("DATABASE_PATH", "data/database.json")),
            initial_admin_email: var_or("INITIAL_ADMIN_EMAIL", "admin@example.com"),
            initial_admin_password: var_or("INITIAL_ADMIN_PASSWORD", "admin123"),
        };
        let redis = RedisConfig {
            host: var_or("REDIS_HOST", "localhost"),
            port: parse_var("REDIS_PORT", 6379)?,
        };
        let auth = AuthConfig {
            ttl: parse_var("AUTH_TOKEN_TTL", 1800)?,
            hash_cost: parse_var("BCRYPT_COST", 12)?,
        };
        let server = ServerConfig {
            host: var_or("SERVER_HOST", "0.0.0.0"),
            port: parse_var("SERVER_PORT", 8080)?,
        };
        Ok(Self {
            database,
            redis,
            auth,
            server,
        })
    }
}

pub struct DatabaseConfig {
    pub path: PathBuf,
    pub initial_admin_email: String,
    pub initial_admin_password: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Access token lifetime in seconds.
    pub ttl: u64,
    pub hash_cost: u32,
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
    }
}
