use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Options size must be 2 <= size <= 20, got {0}")]
    OptionCount(usize),
}
