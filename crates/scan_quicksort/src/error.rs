use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid partition range: low {low} is greater than high {high}")]
    InvalidRange { low: usize, high: usize },

    /// The next recursive call would see the same range and the same contents.
    #[error("sort stalled on range [{low}, {high}]: recursion would repeat the same state")]
    Stalled { low: usize, high: usize },

    #[error("recursion depth {depth} exceeded the budget while sorting [{low}, {high}]")]
    DepthExceeded {
        depth: usize,
        low: usize,
        high: usize,
    },
}
