use thiserror::Error;

/// Failure modes of the calculation engine.
///
/// `Validation` rejects malformed input before any arithmetic runs.
/// `Infeasible` marks well-formed input with no finite answer, such as a
/// debt payment that never covers accruing interest. The engine returns
/// this variant instead of infinities, NaN, or sentinel values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("no finite answer: {0}")]
    Infeasible(String),
}

pub type Result<T> = std::result::Result<T, Error>;
