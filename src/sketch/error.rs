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

//! Error types for sketch editing.

use thiserror::Error;

use crate::{
    reconstruct::ReconstructError,
    sketch::plane::{Plane, SegmentId},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Segment endpoints coincide, so it has no direction.
    #[error("segment {0} has coincident endpoints")]
    CoincidentEndpoints(SegmentId),

    /// The endpoints are distinct but their distance underflows to zero or
    /// overflows, so no direction can be derived.
    #[error("segment {0} has a length that cannot be represented")]
    UnrepresentableLength(SegmentId),

    /// An endpoint has a NaN or infinite coordinate.
    #[error("segment {0} has a non-finite coordinate")]
    NonFinite(SegmentId),

    /// The id is already used on either plane.
    #[error("segment {0} already exists")]
    DuplicateId(SegmentId),

    /// No segment with this id on the given plane.
    #[error("no segment {id} on the {plane} plane")]
    UnknownSegment { plane: Plane, id: SegmentId },

    /// Invalid gradient tolerance.
    #[error("invalid gradient tolerance: {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),

    /// Invalid minimum drag length.
    #[error("invalid minimum drag length: {0} (must be finite and >= 0)")]
    InvalidDragLength(f64),

    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),
}

pub type SketchResult<T> = std::result::Result<T, SketchError>;
