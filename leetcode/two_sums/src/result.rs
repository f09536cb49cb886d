#[derive(Debug, thiserror::Error)]
pub enum TwoSumError {
    #[error("invalid case `{0}`, expected NUMS:TARGET=i,j or NUMS:TARGET=none")]
    InvalidCase(String),

    #[error("scenario {index} failed: expected {expected:?}, got {actual:?}")]
    CheckFailed {
        index: usize,
        expected: Option<(usize, usize)>,
        actual: Option<(usize, usize)>,
    },
}
