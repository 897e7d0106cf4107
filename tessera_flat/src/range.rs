// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated index ranges over flat coordinate buffers.

use core::fmt;
use core::iter::StepBy;
use core::ops::Range;

/// Error returned when a range does not describe whole coordinate tuples.
///
/// All transforms in this crate validate their range before writing anything,
/// so receiving this error means no buffer was modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlatRangeError {
    /// The stride is too small to hold an X and a Y component.
    StrideTooSmall {
        /// The rejected stride.
        stride: usize,
    },
    /// The range starts after it ends.
    Reversed {
        /// Start index of the range.
        offset: usize,
        /// End index of the range.
        end: usize,
    },
    /// The range length is not a multiple of the stride.
    Misaligned {
        /// Number of values covered by the range.
        len: usize,
        /// Tuple width.
        stride: usize,
    },
    /// The range ends past the end of the buffer.
    OutOfBounds {
        /// End index of the range.
        end: usize,
        /// Length of the buffer the range was applied to.
        len: usize,
    },
}

impl fmt::Display for FlatRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::StrideTooSmall { stride } => {
                write!(f, "stride {stride} cannot hold an X and a Y component")
            }
            Self::Reversed { offset, end } => {
                write!(f, "range start {offset} is past its end {end}")
            }
            Self::Misaligned { len, stride } => {
                write!(f, "range of {len} values is not a multiple of stride {stride}")
            }
            Self::OutOfBounds { end, len } => {
                write!(f, "range end {end} is past the buffer length {len}")
            }
        }
    }
}

impl core::error::Error for FlatRangeError {}

/// A half-open range `[offset, end)` of buffer indices plus the tuple stride.
///
/// Offsets are buffer indices, not tuple indices. A `FlatRange` always covers
/// a whole number of tuples and its stride is at least 2; whether it fits a
/// particular buffer is checked when it is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlatRange {
    offset: usize,
    end: usize,
    stride: usize,
}

impl FlatRange {
    /// Creates a range over `[offset, end)` with tuples of `stride` values.
    pub const fn new(offset: usize, end: usize, stride: usize) -> Result<Self, FlatRangeError> {
        if stride < 2 {
            return Err(FlatRangeError::StrideTooSmall { stride });
        }
        if offset > end {
            return Err(FlatRangeError::Reversed { offset, end });
        }
        if (end - offset) % stride != 0 {
            return Err(FlatRangeError::Misaligned {
                len: end - offset,
                stride,
            });
        }
        Ok(Self {
            offset,
            end,
            stride,
        })
    }

    /// Creates a range covering an entire buffer of `len` values.
    pub const fn full(len: usize, stride: usize) -> Result<Self, FlatRangeError> {
        Self::new(0, len, stride)
    }

    /// Index of the first value in the range.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Index one past the last value in the range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of values per tuple.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of values covered, `end - offset`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.offset
    }

    /// Returns `true` if the range covers no tuples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset == self.end
    }

    /// Number of tuples covered.
    #[must_use]
    pub const fn tuple_count(&self) -> usize {
        self.len() / self.stride
    }

    /// Buffer index of the first value of each tuple, in order.
    pub fn tuple_starts(&self) -> StepBy<Range<usize>> {
        (self.offset..self.end).step_by(self.stride)
    }

    /// Checks that the range fits in a buffer of `len` values.
    pub const fn check(&self, len: usize) -> Result<(), FlatRangeError> {
        if self.end > len {
            return Err(FlatRangeError::OutOfBounds { end: self.end, len });
        }
        Ok(())
    }
}
