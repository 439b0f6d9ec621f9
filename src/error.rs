//! Error handling module for the tagbump manifest editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BumpError {
    #[error("manifest is not loaded - call load before reading or modifying it")]
    NotLoaded,
    #[error("'{0}' is not a supported manifest type")]
    UnknownDialect(String),
    #[error("{0} manifests are not yet implemented")]
    NotImplemented(String),
    #[error("manifest structure error: {0}")]
    Structure(String),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BumpError>;
