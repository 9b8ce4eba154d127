//! Error type for segmentation runs.

use thiserror::Error;

/// Error type for segmentation over a pixel buffer.
///
/// Input validation happens before any per-pixel work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Pixel buffer length does not match the stated dimensions.
    #[error("pixel buffer has {actual} pixels, expected {width}x{height} = {expected}")]
    BufferSizeMismatch {
        /// Stated image width
        width: usize,
        /// Stated image height
        height: usize,
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}

impl SegmentError {
    /// Validate a buffer against its stated dimensions.
    pub(crate) fn check_buffer(
        len: usize,
        width: usize,
        height: usize,
    ) -> Result<(), SegmentError> {
        let expected = width * height;
        if len != expected {
            return Err(SegmentError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}
