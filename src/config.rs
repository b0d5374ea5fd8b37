use std::str::FromStr;
use thiserror::Error;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DB_NAME: &str = "library";
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/library";
const DEFAULT_PORT: &str = "3000";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend: {0} (expected mongodb, postgres or memory)")]
    UnknownBackend(String),
}

/// 書籍の保存先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Postgres,
    InMemory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in_memory" => Ok(StorageBackend::InMemory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

/// アプリケーション設定
///
/// 環境変数から読み込む。未設定の項目はローカル開発向けの既定値になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    /// MongoDBの接続URI（DB_URI）
    pub mongodb_uri: String,
    /// MongoDBのデータベース名（DB_NAME）
    pub db_name: String,
    /// PostgreSQLの接続URL（DATABASE_URL）
    pub database_url: String,
    pub port: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を組み立てる
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::MongoDb,
        };

        Ok(Self {
            storage_backend,
            mongodb_uri: lookup("DB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.into()),
            db_name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            port: lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.into()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
