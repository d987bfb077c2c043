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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{geometry::Point3, numeric::Scalar};

/// Ordered pair of points. `a` is where the stroke started, `b` where it ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment3<T: Scalar = f64> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Scalar> Segment3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Endpoint-wise comparison that ignores traversal direction.
    pub fn approx_eq_unordered(&self, other: &Self) -> bool {
        (self.a.approx_eq(&other.a) && self.b.approx_eq(&other.b))
            || (self.a.approx_eq(&other.b) && self.b.approx_eq(&other.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_comparison() {
        let s = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(s.approx_eq_unordered(&Segment3::new(s.b, s.a)));
        assert!(!s.approx_eq_unordered(&Segment3::new(s.a, s.a)));
    }
}
