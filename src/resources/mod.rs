pub mod config;
mod defaults;
mod errors;
mod template_cache;

pub use config::{
    AeroBackend, AeroConstants, CommitConfig, DebugLogConfig, DeflectionConfig, Limit,
    ParameterLimits, ProcWingConfig, WingLimits,
};
pub use defaults::WingDefaults;
pub use errors::{ConfigError, Result, TemplateError};
pub use template_cache::TemplateMeshCache;
