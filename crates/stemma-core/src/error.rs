pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid genealogy shape: {message}")]
    InvalidShape { message: String },

    #[error("invalid genealogy JSON: {message}")]
    InvalidJson { message: String },

    #[error("invalid genealogy YAML: {message}")]
    InvalidYaml { message: String },
}
