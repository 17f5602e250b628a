use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config store read failed: {location}: {detail}")]
    StoreRead { location: String, detail: String },

    #[error("config store write failed: {location}: {detail}")]
    StoreWrite { location: String, detail: String },

    #[error("config store delete failed: {location}: {detail}")]
    StoreDelete { location: String, detail: String },

    #[error("power scheme operation failed: {0}")]
    Power(String),

    #[error("backup store error: {0}")]
    Backup(String),

    #[error("profile error: {0}")]
    Profile(String),

    #[error("system read failed: {path}: {source}")]
    SysRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error for {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    #[error("unknown tweak id: {0}")]
    UnknownTweak(String),
}

pub type Result<T> = std::result::Result<T, Error>;
