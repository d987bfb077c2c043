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

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Axis, ParametrizedLine, Point3},
    numeric::Scalar,
};

/// Where a coordinate falls relative to a line's span along one axis,
/// measured in the line's own parameter. Ordered `Before < Inside < After`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interval {
    /// The line reaches the coordinate at a negative parameter.
    Before,
    /// The coordinate is reached within `[0, length]`.
    Inside,
    /// The line reaches the coordinate past its far endpoint.
    After,
}

/// An [`Interval`] together with the parameter that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<T: Scalar = f64> {
    pub interval: Interval,
    pub parameter: T,
}

impl<T: Scalar> Placement<T> {
    /// Total order used to canonicalize endpoint pairs: interval first,
    /// then parameter.
    pub fn order(&self, other: &Self) -> Ordering {
        self.interval.cmp(&other.interval).then_with(|| {
            self.parameter
                .partial_cmp(&other.parameter)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Locates `point`'s `axis` coordinate on `line`.
///
/// `line.gradient(axis)` must be non-zero.
pub fn place<T: Scalar>(line: &ParametrizedLine<T>, point: &Point3<T>, axis: Axis) -> Placement<T> {
    let s = line.parameter_at(axis, point.coord(axis));
    let interval = if s < T::zero() {
        Interval::Before
    } else if s > line.length {
        Interval::After
    } else {
        Interval::Inside
    };
    Placement {
        interval,
        parameter: s,
    }
}

#[inline(always)]
pub fn classify<T: Scalar>(line: &ParametrizedLine<T>, point: &Point3<T>, axis: Axis) -> Interval {
    place(line, point, axis).interval
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(from: f64, to: f64) -> ParametrizedLine {
        ParametrizedLine::new(&Point3::new(0.0, from, 0.0), &Point3::new(0.0, to, 0.0)).unwrap()
    }

    #[test]
    fn test_classify_ascending() {
        let line = vertical(0.0, 1.0);
        assert_eq!(classify(&line, &Point3::new(5.0, -0.5, 5.0), Axis::Y), Interval::Before);
        assert_eq!(classify(&line, &Point3::new(5.0, 0.5, 5.0), Axis::Y), Interval::Inside);
        assert_eq!(classify(&line, &Point3::new(5.0, 1.5, 5.0), Axis::Y), Interval::After);
    }

    #[test]
    fn test_classify_descending() {
        // Parameter runs against the axis, so "before" lies above.
        let line = vertical(1.0, 0.0);
        assert_eq!(classify(&line, &Point3::new(0.0, 1.5, 0.0), Axis::Y), Interval::Before);
        assert_eq!(classify(&line, &Point3::new(0.0, -0.5, 0.0), Axis::Y), Interval::After);
    }

    #[test]
    fn test_endpoints_are_inside() {
        let line = vertical(0.0, 2.0);
        assert_eq!(classify(&line, &Point3::new(0.0, 0.0, 0.0), Axis::Y), Interval::Inside);
        assert_eq!(classify(&line, &Point3::new(0.0, 2.0, 0.0), Axis::Y), Interval::Inside);
    }

    #[test]
    fn test_slanted_line_uses_arc_length() {
        let line =
            ParametrizedLine::new(&Point3::new(0.0_f64, 0.0, 0.0), &Point3::new(3.0, 4.0, 0.0))
                .unwrap();
        let p = place(&line, &Point3::new(0.0, 2.0, 0.0), Axis::Y);
        assert_eq!(p.interval, Interval::Inside);
        assert!((p.parameter - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_placement_order() {
        let a = Placement {
            interval: Interval::Inside,
            parameter: 0.2,
        };
        let b = Placement {
            interval: Interval::Inside,
            parameter: 0.7,
        };
        let c = Placement {
            interval: Interval::Before,
            parameter: 3.0,
        };
        assert_eq!(a.order(&b), Ordering::Less);
        assert_eq!(c.order(&a), Ordering::Less);
        assert_eq!(b.order(&b), Ordering::Equal);
    }
}
