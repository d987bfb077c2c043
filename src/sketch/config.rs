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

//! Sketch configuration and presets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    reconstruct::{MergeParams, PlaneLayout},
    sketch::error::{SketchError, SketchResult},
};

/// How the merge cache treats a pair it has already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CachePolicy {
    /// Compute a pair once and keep the result until one of its segments
    /// is removed. Correct as long as segments are never edited in place.
    #[default]
    Sticky,
    /// Recompute every pair on every pass.
    Recompute,
}

/// Configuration for a [`Session`](crate::sketch::Session).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SketchConfig {
    /// Plane layout and degeneracy tolerance.
    pub merge: MergeParams,

    /// Cache refresh behavior.
    pub cache_policy: CachePolicy,

    /// Drags no longer than this are dropped by the gesture tracker.
    /// Zero only drops clicks that did not move.
    pub min_drag_length: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            merge: MergeParams::default(),
            cache_policy: CachePolicy::Sticky,
            min_drag_length: 0.0,
        }
    }
}

impl SketchConfig {
    /// Configuration for shells that edit segment endpoints in place.
    #[must_use]
    pub fn live_edit() -> Self {
        Self {
            cache_policy: CachePolicy::Recompute,
            ..Default::default()
        }
    }

    /// Set the plane layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: PlaneLayout) -> Self {
        self.merge.layout = layout;
        self
    }

    /// Set the gradient tolerance below which a segment counts as horizontal.
    #[must_use]
    pub const fn with_gradient_tolerance(mut self, tolerance: f64) -> Self {
        self.merge.gradient_tolerance = tolerance;
        self
    }

    /// Set the cache policy.
    #[must_use]
    pub const fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// Set the minimum drag length.
    #[must_use]
    pub const fn with_min_drag_length(mut self, length: f64) -> Self {
        self.min_drag_length = length;
        self
    }

    /// Checks the numeric parameters.
    ///
    /// # Errors
    ///
    /// [`SketchError::InvalidTolerance`] or [`SketchError::InvalidDragLength`]
    /// for negative or non-finite values.
    pub fn validate(&self) -> SketchResult<()> {
        let tolerance = self.merge.gradient_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(SketchError::InvalidTolerance(tolerance));
        }
        if !self.min_drag_length.is_finite() || self.min_drag_length < 0.0 {
            return Err(SketchError::InvalidDragLength(self.min_drag_length));
        }
        Ok(())
    }
}
