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

use crate::{
    geometry::Axis,
    reconstruct::error::{ReconstructError, ReconstructResult},
};

/// Assignment of world axes to the two sketch planes.
///
/// Both planes contain the `shared` axis. The front plane additionally
/// spans `front`, the side plane spans `side`. A point drawn on the front
/// plane therefore fixes `shared` and `front` but says nothing about
/// `side`, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Axis; 3]", into = "[Axis; 3]"))]
pub struct PlaneLayout {
    shared: Axis,
    front: Axis,
    side: Axis,
}

impl PlaneLayout {
    /// Front plane XY, side plane ZY, vertical shared axis.
    pub const XY_ZY: PlaneLayout = PlaneLayout {
        shared: Axis::Y,
        front: Axis::X,
        side: Axis::Z,
    };

    pub fn new(shared: Axis, front: Axis, side: Axis) -> ReconstructResult<Self> {
        if shared == front || shared == side || front == side {
            return Err(ReconstructError::InvalidLayout {
                shared,
                front,
                side,
            });
        }
        Ok(Self {
            shared,
            front,
            side,
        })
    }

    #[inline(always)]
    pub const fn shared(&self) -> Axis {
        self.shared
    }

    /// Axis spanned only by the front plane.
    #[inline(always)]
    pub const fn front(&self) -> Axis {
        self.front
    }

    /// Axis spanned only by the side plane.
    #[inline(always)]
    pub const fn side(&self) -> Axis {
        self.side
    }
}

/// `[shared, front, side]`, validated like [`PlaneLayout::new`].
impl TryFrom<[Axis; 3]> for PlaneLayout {
    type Error = ReconstructError;

    fn try_from([shared, front, side]: [Axis; 3]) -> ReconstructResult<Self> {
        Self::new(shared, front, side)
    }
}

impl From<PlaneLayout> for [Axis; 3] {
    fn from(layout: PlaneLayout) -> Self {
        [layout.shared, layout.front, layout.side]
    }
}

impl Default for PlaneLayout {
    fn default() -> Self {
        Self::XY_ZY
    }
}
