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

//! Reconstruction of 3D line segments from two orthogonal sketch planes.
//!
//! Segments are drawn on a front plane and a side plane that share one
//! axis. Whenever a front segment and a side segment overlap along the
//! shared axis, the front segment fixes one of the remaining coordinates
//! and the side segment fixes the other, which yields a unique 3D segment.
//!
//! - [`reconstruct`] holds the pure geometry: line parametrization,
//!   interval classification, the cut functions and the merge itself.
//! - [`sketch`] holds the editing model: the per-plane segment store, the
//!   incremental merge cache, the gesture state machine and the
//!   [`Session`] tying them together.
//!
//! ```
//! use orthosketch::{Plane, Point3, Session};
//!
//! let mut session = Session::<f64>::default();
//! session.add_segment(Plane::Front, Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0))?;
//! session.add_segment(Plane::Side, Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 1.0, 0.0))?;
//!
//! let merged = session.merged_segments();
//! assert_eq!(merged.len(), 1);
//! # Ok::<(), orthosketch::SketchError>(())
//! ```

pub mod geometry;
pub mod numeric;
pub mod reconstruct;
pub mod sketch;

pub use geometry::{Axis, ParametrizedLine, Point3, Segment3, Vector3};
pub use numeric::Scalar;
pub use reconstruct::{
    MergeParams, MergeResult, Miss, PlaneLayout, ReconstructError, merge, merge_with,
};
pub use sketch::{
    CachePolicy, MergeCache, MergeKey, PassReport, Plane, SegmentId, SegmentStore, Session,
    SessionUpdate, SketchConfig, SketchError,
};
