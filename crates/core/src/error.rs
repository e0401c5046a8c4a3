use crate::scope::ScopeShapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Classfile error: {0}")]
    Classfile(#[from] ristretto_classfile::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Invalid scope shape: {0}")]
    Scope(#[from] ScopeShapeError),
    #[error("Handle error: {0}")]
    Handle(#[from] corvel_jvm_api::ApiError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
