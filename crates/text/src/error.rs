use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("HTML input is {len} bytes, above the {limit} byte extraction limit")]
    InputTooLarge { len: usize, limit: usize },
}
