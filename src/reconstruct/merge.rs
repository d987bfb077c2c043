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

//! Merging one front-plane segment with one side-plane segment.
//!
//! Along the shared axis this is a 1D interval intersection. Wherever the two
//! spans overlap, each plane supplies the coordinate the other one is
//! missing, which pins down a single 3D segment.

use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{ParametrizedLine, Point3, Segment3},
    numeric::Scalar,
    reconstruct::{
        classify::{Interval, place},
        error::{ReconstructError, ReconstructResult},
        params::MergeParams,
        project::{project_onto_front_plane, project_onto_side_plane},
    },
};

/// Why a pair of segments produced no 3D segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Miss {
    /// One of the segments does not move along the shared axis.
    Degenerate,
    /// The shared-axis spans do not intersect.
    NoOverlap,
}

/// Outcome of a merge. A miss is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeResult<T: Scalar = f64> {
    Missed(Miss),
    Merged(Segment3<T>),
}

impl<T: Scalar> MergeResult<T> {
    pub fn segment(&self) -> Option<&Segment3<T>> {
        match self {
            MergeResult::Merged(segment) => Some(segment),
            MergeResult::Missed(_) => None,
        }
    }

    pub fn into_segment(self) -> Option<Segment3<T>> {
        match self {
            MergeResult::Merged(segment) => Some(segment),
            MergeResult::Missed(_) => None,
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, MergeResult::Merged(_))
    }

    pub fn miss(&self) -> Option<Miss> {
        match self {
            MergeResult::Missed(miss) => Some(*miss),
            MergeResult::Merged(_) => None,
        }
    }
}

/// Ordered pair of side-endpoint intervals. Only the six combinations with
/// `low <= high` exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
    /// Side span lies entirely before the front span.
    BeforeBefore,
    /// Side enters the front span from before and ends inside it.
    BeforeInside,
    /// Side span contains the front span.
    BeforeAfter,
    /// Front span contains the side span.
    InsideInside,
    /// Side starts inside the front span and leaves past its end.
    InsideAfter,
    /// Side span lies entirely after the front span.
    AfterAfter,
}

impl Overlap {
    fn from_ordered(low: Interval, high: Interval) -> ReconstructResult<Self> {
        use Interval::*;
        match (low, high) {
            (Before, Before) => Ok(Overlap::BeforeBefore),
            (Before, Inside) => Ok(Overlap::BeforeInside),
            (Before, After) => Ok(Overlap::BeforeAfter),
            (Inside, Inside) => Ok(Overlap::InsideInside),
            (Inside, After) => Ok(Overlap::InsideAfter),
            (After, After) => Ok(Overlap::AfterAfter),
            (Inside, Before) | (After, Before) | (After, Inside) => {
                Err(ReconstructError::InvariantViolation { low, high })
            }
        }
    }
}

/// Merges with the default parameters (front XY, side ZY, exact degeneracy test).
pub fn merge<T: Scalar>(
    front_a: &Point3<T>,
    front_b: &Point3<T>,
    side_a: &Point3<T>,
    side_b: &Point3<T>,
) -> ReconstructResult<MergeResult<T>> {
    merge_with(&MergeParams::default(), front_a, front_b, side_a, side_b)
}

/// Reconstructs the 3D segment seen as `front_a..front_b` on the front plane
/// and as `side_a..side_b` on the side plane.
///
/// The result does not depend on the order of `side_a` and `side_b`.
///
/// # Errors
///
/// [`ReconstructError::CoincidentEndpoints`] if either segment has zero
/// length, [`ReconstructError::InvariantViolation`] if canonicalization
/// failed to order the side endpoints.
pub fn merge_with<T: Scalar>(
    params: &MergeParams,
    front_a: &Point3<T>,
    front_b: &Point3<T>,
    side_a: &Point3<T>,
    side_b: &Point3<T>,
) -> ReconstructResult<MergeResult<T>> {
    let layout = &params.layout;
    let shared = layout.shared();

    let front = line(front_a, front_b)?;
    let side = line(side_a, side_b)?;

    // Horizontal bars cannot be matched against anything.
    let tolerance = T::from_f64(params.gradient_tolerance);
    if front.gradient(shared).abs() <= tolerance || side.gradient(shared).abs() <= tolerance {
        return Ok(MergeResult::Missed(Miss::Degenerate));
    }

    let (mut s0, mut s1) = (side_a, side_b);
    let (mut c0, mut c1) = (place(&front, s0, shared), place(&front, s1, shared));
    let swapped = c0.order(&c1).is_gt();
    if swapped {
        mem::swap(&mut s0, &mut s1);
        mem::swap(&mut c0, &mut c1);
    }
    let side = if swapped { line(s0, s1)? } else { side };

    let (p0, p1) = match Overlap::from_ordered(c0.interval, c1.interval)? {
        Overlap::BeforeBefore | Overlap::AfterAfter => {
            return Ok(MergeResult::Missed(Miss::NoOverlap));
        }
        Overlap::BeforeAfter => (
            project_onto_side_plane(&side, front_a, layout),
            project_onto_side_plane(&side, front_b, layout),
        ),
        Overlap::InsideInside => (
            project_onto_front_plane(&front, s0, layout),
            project_onto_front_plane(&front, s1, layout),
        ),
        Overlap::BeforeInside => (
            project_onto_front_plane(&front, s1, layout),
            project_onto_side_plane(&side, front_a, layout),
        ),
        Overlap::InsideAfter => (
            project_onto_side_plane(&side, front_b, layout),
            project_onto_front_plane(&front, s0, layout),
        ),
    };

    Ok(MergeResult::Merged(Segment3::new(p0, p1)))
}

#[inline(always)]
fn line<T: Scalar>(p: &Point3<T>, t: &Point3<T>) -> ReconstructResult<ParametrizedLine<T>> {
    ParametrizedLine::new(p, t).ok_or(ReconstructError::CoincidentEndpoints)
}
