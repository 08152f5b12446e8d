use guide_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid {catalog} catalog: {message}")]
    Catalog { catalog: &'static str, message: String },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
