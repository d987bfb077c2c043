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

//! Pointer gesture state machine.
//!
//! The tracker never sees raw input. The shell picks whatever is under the
//! pointer and forwards the result as a [`PointerHit`]; the tracker decides
//! whether that starts, extends, or ends a stroke, and emits a
//! [`GestureEvent`] when the sketch has to change.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    geometry::Point3,
    numeric::Scalar,
    sketch::plane::{Plane, SegmentId},
};

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tool {
    /// Every stroke starts where the pointer is pressed.
    #[default]
    Draw,
    /// A stroke on the same plane as the previous one continues from its end.
    Sequence,
    /// Pressing on a segment deletes it.
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GestureState<T: Scalar = f64> {
    Idle,
    Active {
        plane: Plane,
        from: Point3<T>,
        to: Option<Point3<T>>,
    },
}

/// What the pointer landed on when pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointerHit<T: Scalar = f64> {
    Plane { plane: Plane, point: Point3<T> },
    Segment(SegmentId),
    Nothing,
}

/// A change the gesture asks the sketch to make.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GestureEvent<T: Scalar = f64> {
    Draw {
        plane: Plane,
        from: Point3<T>,
        to: Point3<T>,
    },
    Remove(SegmentId),
}

#[derive(Debug, Clone)]
pub struct GestureTracker<T: Scalar = f64> {
    state: GestureState<T>,
    tool: Tool,
    /// Plane and end point of the previous stroke, for `Tool::Sequence`.
    last_plane: Option<Plane>,
    last_to: Option<Point3<T>>,
    min_drag_length: T,
}

impl<T: Scalar> Default for GestureTracker<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Scalar> GestureTracker<T> {
    pub fn new(min_drag_length: T) -> Self {
        Self {
            state: GestureState::Idle,
            tool: Tool::Draw,
            last_plane: None,
            last_to: None,
            min_drag_length,
        }
    }

    pub fn state(&self) -> &GestureState<T> {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// True while a stroke is in progress; shells typically detach camera
    /// controls meanwhile.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    pub fn select_tool(&mut self, tool: Tool) {
        debug!(?tool, "tool selected");
        self.tool = tool;
    }

    /// Abandons any stroke, forgets the previous one and returns to `Draw`.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
        self.tool = Tool::Draw;
        self.last_plane = None;
        self.last_to = None;
    }

    pub fn pointer_down(&mut self, hit: PointerHit<T>) -> Option<GestureEvent<T>> {
        if self.is_active() {
            return None;
        }
        match (self.tool, hit) {
            (Tool::Remove, PointerHit::Segment(id)) => Some(GestureEvent::Remove(id)),
            // Plane presses never start a stroke while removing, unlike the
            // web sketcher, which drew with any tool selected.
            (Tool::Remove, _) => None,
            (_, PointerHit::Segment(_)) | (_, PointerHit::Nothing) => None,
            (tool, PointerHit::Plane { plane, point }) => {
                let chained = match (tool, self.last_plane, self.last_to) {
                    (Tool::Sequence, Some(last), Some(end)) if last == plane => Some(end),
                    _ => None,
                };
                self.state = match chained {
                    Some(end) => GestureState::Active {
                        plane,
                        from: end,
                        to: Some(point),
                    },
                    None => GestureState::Active {
                        plane,
                        from: point,
                        to: None,
                    },
                };
                self.last_plane = Some(plane);
                None
            }
        }
    }

    /// Updates the provisional end point. `plane` is where the shell found
    /// the pointer; moves over any other plane are ignored.
    pub fn pointer_move(&mut self, plane: Plane, point: Point3<T>) {
        if let GestureState::Active {
            plane: active, to, ..
        } = &mut self.state
        {
            if *active == plane {
                *to = Some(point);
            }
        }
    }

    /// Ends the stroke. Emits a draw event when it covered some distance.
    pub fn pointer_up(&mut self) -> Option<GestureEvent<T>> {
        let GestureState::Active { plane, from, to } = self.state else {
            return None;
        };
        self.state = GestureState::Idle;
        self.last_to = to;

        let to = to?;
        let length = from.distance_to(&to);
        if length <= self.min_drag_length {
            warn!(%plane, length = ?length, "stroke too short, dropped");
            return None;
        }
        Some(GestureEvent::Draw { plane, from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(plane: Plane, x: f64, y: f64, z: f64) -> PointerHit {
        PointerHit::Plane {
            plane,
            point: Point3::new(x, y, z),
        }
    }

    #[test]
    fn test_click_without_drag_emits_nothing() {
        let mut tracker = GestureTracker::default();
        assert!(tracker.pointer_down(hit(Plane::Front, 0.1, 0.1, 0.0)).is_none());
        assert!(tracker.is_active());
        assert!(tracker.pointer_up().is_none());
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_move_on_other_plane_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(hit(Plane::Front, 0.0, 0.0, 0.0));
        tracker.pointer_move(Plane::Side, Point3::new(0.0, 1.0, 1.0));
        assert_eq!(
            *tracker.state(),
            GestureState::Active {
                plane: Plane::Front,
                from: Point3::new(0.0, 0.0, 0.0),
                to: None
            }
        );
    }

    #[test]
    fn test_pointer_down_while_active_is_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(hit(Plane::Front, 0.0, 0.0, 0.0));
        tracker.pointer_down(hit(Plane::Side, 0.0, 0.5, 0.5));
        assert!(matches!(
            tracker.state(),
            GestureState::Active {
                plane: Plane::Front,
                ..
            }
        ));
    }

    #[test]
    fn test_cancel_resets_tool() {
        let mut tracker = GestureTracker::<f64>::default();
        tracker.select_tool(Tool::Remove);
        tracker.cancel();
        assert_eq!(tracker.tool(), Tool::Draw);
        assert_eq!(*tracker.state(), GestureState::Idle);
    }
}
