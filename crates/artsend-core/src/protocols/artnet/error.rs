use thiserror::Error;

use super::layout;

#[derive(Debug, Error)]
pub enum ArtNetError {
    #[error("invalid DMX frame length {length}: at most {} slots", layout::DMX_MAX_SLOTS)]
    InvalidLength { length: usize },
    #[error("packet buffer too small: need {needed} bytes, have {capacity}")]
    OutOfBounds { needed: usize, capacity: usize },
    #[error("field is {range_len} bytes but got a {slice_len}-byte value")]
    LengthMismatch { range_len: usize, slice_len: usize },
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
