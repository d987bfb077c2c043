// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Fatal reconstruction errors.
//!
//! Geometry that simply does not merge is not an error; it is reported as
//! [`MergeResult::Missed`](crate::reconstruct::MergeResult::Missed). The
//! variants here mean an input or internal invariant was broken and the
//! current operation must stop.

use thiserror::Error;

use crate::{geometry::Axis, reconstruct::classify::Interval};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// A line was requested through two identical points.
    #[error("cannot build a line through coincident endpoints")]
    CoincidentEndpoints,

    /// Side endpoints were not ordered before branching.
    #[error("unordered classification pair ({low:?}, {high:?})")]
    InvariantViolation { low: Interval, high: Interval },

    /// A plane layout must use three distinct axes.
    #[error("plane layout reuses an axis: shared={shared}, front={front}, side={side}")]
    InvalidLayout { shared: Axis, front: Axis, side: Axis },
}

pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReconstructError::CoincidentEndpoints;
        assert_eq!(format!("{err}"), "cannot build a line through coincident endpoints");

        let err = ReconstructError::InvariantViolation {
            low: Interval::After,
            high: Interval::Before,
        };
        assert!(format!("{err}").contains("After"));

        let err = ReconstructError::InvalidLayout {
            shared: Axis::Y,
            front: Axis::Y,
            side: Axis::Z,
        };
        assert!(format!("{err}").contains("front=y"));
    }
}
