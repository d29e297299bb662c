use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unknown upload bucket '{0}'")]
    UnknownBucket(String),

    #[error("Unsupported file name '{0}'")]
    BadFileName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
