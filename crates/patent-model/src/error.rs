use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid year range '{0}': expected YEAR or MIN-MAX")]
    InvalidYearRange(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
