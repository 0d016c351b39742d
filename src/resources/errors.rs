use thiserror::Error;

use crate::components::WingKind;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template source object not found: {kind:?}/{name}")]
    MissingSource { kind: WingKind, name: String },
    #[error("Template {name} has mismatched attribute lengths (positions {positions}, normals {normals}, uvs {uvs})")]
    AttributeMismatch {
        name: String,
        positions: usize,
        normals: usize,
        uvs: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
