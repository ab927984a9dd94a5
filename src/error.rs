use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no image given\nUsage: anifetch <image>\nOr set 'image_path' in ~/.config/anime/config.conf")]
    MissingImage,

    #[error("Image file '{}' not found", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
