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

//! Cut functions: evaluate a line at another point's shared coordinate and
//! fill in the coordinate the line's plane cannot see.

use crate::{
    geometry::{Axis, ParametrizedLine, Point3},
    numeric::Scalar,
    reconstruct::layout::PlaneLayout,
};

/// Point on the front line at `other`'s shared coordinate, with the side
/// coordinate taken from `other`.
pub fn project_onto_front_plane<T: Scalar>(
    front: &ParametrizedLine<T>,
    other: &Point3<T>,
    layout: &PlaneLayout,
) -> Point3<T> {
    cut(front, other, layout, layout.side())
}

/// Point on the side line at `other`'s shared coordinate, with the front
/// coordinate taken from `other`.
pub fn project_onto_side_plane<T: Scalar>(
    side: &ParametrizedLine<T>,
    other: &Point3<T>,
    layout: &PlaneLayout,
) -> Point3<T> {
    cut(side, other, layout, layout.front())
}

#[inline(always)]
fn cut<T: Scalar>(
    line: &ParametrizedLine<T>,
    other: &Point3<T>,
    layout: &PlaneLayout,
    copied: Axis,
) -> Point3<T> {
    let shared = layout.shared();
    let s = line.parameter_at(shared, other.coord(shared));
    line.point_at(s).with_coord(copied, other.coord(copied))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_projection_takes_side_depth() {
        let layout = PlaneLayout::default();
        let front =
            ParametrizedLine::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 2.0, 0.0))
                .unwrap();
        let q = project_onto_front_plane(&front, &Point3::new(9.0, 1.0, 7.0), &layout);
        assert!(q.approx_eq(&Point3::new(1.0, 1.0, 7.0)));
    }

    #[test]
    fn test_side_projection_takes_front_width() {
        let layout = PlaneLayout::default();
        let side =
            ParametrizedLine::new(&Point3::new(0.0, 0.0, 4.0), &Point3::new(0.0, 4.0, 0.0))
                .unwrap();
        let q = project_onto_side_plane(&side, &Point3::new(3.0, 1.0, -8.0), &layout);
        assert!(q.approx_eq(&Point3::new(3.0, 1.0, 3.0)));
    }

    #[test]
    fn test_projection_extrapolates() {
        // Callers pick branches so this stays in range; the math itself does not clamp.
        let layout = PlaneLayout::default();
        let front =
            ParametrizedLine::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 0.0))
                .unwrap();
        let q = project_onto_front_plane(&front, &Point3::new(0.0, 3.0, 2.0), &layout);
        assert!(q.approx_eq(&Point3::new(3.0, 3.0, 2.0)));
    }
}
