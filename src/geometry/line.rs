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

use crate::{
    geometry::{Axis, Point3, Vector3},
    numeric::Scalar,
};

/// A segment rewritten as `origin + direction * s` for `s` in `[0, length]`.
///
/// `direction` has unit norm, so `s` is an arc length measured from
/// `origin`. Lines are cheap to derive and are never stored: callers build
/// them from two endpoints whenever they need one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametrizedLine<T: Scalar = f64> {
    pub origin: Point3<T>,
    pub direction: Vector3<T>,
    pub length: T,
}

impl<T: Scalar> ParametrizedLine<T> {
    /// Line running from `p` to `t`.
    ///
    /// Returns `None` when the points coincide (or are too far apart to be
    /// represented), since the direction is then undefined.
    pub fn new(p: &Point3<T>, t: &Point3<T>) -> Option<Self> {
        let span = p.vector_to(t);
        let length = span.norm();
        if length.is_zero() || !length.is_finite() {
            return None;
        }
        Some(Self {
            origin: *p,
            direction: span.scale(T::one() / length),
            length,
        })
    }

    pub fn end(&self) -> Point3<T> {
        self.point_at(self.length)
    }

    #[inline(always)]
    pub fn point_at(&self, s: T) -> Point3<T> {
        self.origin + self.direction * s
    }

    /// Direction component along `axis`; zero means the line never moves
    /// along that axis.
    #[inline(always)]
    pub fn gradient(&self, axis: Axis) -> T {
        self.direction.component(axis)
    }

    /// Parameter at which the line reaches `value` along `axis`.
    ///
    /// Only meaningful when `gradient(axis)` is non-zero.
    #[inline(always)]
    pub fn parameter_at(&self, axis: Axis, value: T) -> T {
        (value - self.origin.coord(axis)) / self.gradient(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_direction_and_length() {
        let p = Point3::new(1.0_f64, 1.0, 1.0);
        let t = Point3::new(1.0, 4.0, 5.0);
        let line = ParametrizedLine::new(&p, &t).unwrap();
        assert!((line.direction.norm() - 1.0).abs() < 1e-12);
        assert!((line.length - 5.0).abs() < 1e-12);
        assert!(line.end().approx_eq(&t));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let p = Point3::new(0.5, 0.5, 0.5);
        assert!(ParametrizedLine::new(&p, &p).is_none());
    }

    #[test]
    fn test_parameter_at() {
        let line =
            ParametrizedLine::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(0.0, 2.0, 0.0))
                .unwrap();
        assert_eq!(line.parameter_at(Axis::Y, 1.5), 1.5);
        assert_eq!(line.parameter_at(Axis::Y, -1.0), -1.0);
        assert_eq!(line.gradient(Axis::X), 0.0);
    }
}
