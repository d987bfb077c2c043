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

//! Merge parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::reconstruct::layout::PlaneLayout;

/// Parameters shared by every merge of a sketch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeParams {
    /// Which axis is shared and which axis each plane owns.
    pub layout: PlaneLayout,

    /// A line whose unit direction moves at most this much along the
    /// shared axis counts as perpendicular to it and never merges.
    /// Zero reproduces an exact `== 0` test.
    pub gradient_tolerance: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            layout: PlaneLayout::default(),
            gradient_tolerance: 0.0,
        }
    }
}

impl MergeParams {
    /// Set the plane layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: PlaneLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the gradient tolerance.
    #[must_use]
    pub const fn with_gradient_tolerance(mut self, tolerance: f64) -> Self {
        self.gradient_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;

    #[test]
    fn test_default_params() {
        let params = MergeParams::default();
        assert_eq!(params.layout, PlaneLayout::XY_ZY);
        assert_eq!(params.gradient_tolerance, 0.0);
    }

    #[test]
    fn test_builder() {
        let layout = PlaneLayout::new(Axis::Z, Axis::X, Axis::Y).unwrap();
        let params = MergeParams::default()
            .with_layout(layout)
            .with_gradient_tolerance(1e-6);
        assert_eq!(params.layout.shared(), Axis::Z);
        assert!((params.gradient_tolerance - 1e-6).abs() < 1e-12);
    }
}
