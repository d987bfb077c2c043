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

//! Per-plane segment storage.

use std::collections::BTreeMap;

use crate::{
    geometry::{ParametrizedLine, Point3, Segment3},
    numeric::Scalar,
    sketch::{
        error::{SketchError, SketchResult},
        plane::{Plane, SegmentId},
    },
};

/// Segments drawn on the front and side planes, keyed by id.
///
/// Iteration is in ascending id order, i.e. creation order when ids come
/// from a [`Session`](crate::sketch::Session).
#[derive(Debug, Clone)]
pub struct SegmentStore<T: Scalar = f64> {
    front: BTreeMap<SegmentId, Segment3<T>>,
    side: BTreeMap<SegmentId, Segment3<T>>,
}

impl<T: Scalar> Default for SegmentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SegmentStore<T> {
    pub fn new() -> Self {
        Self {
            front: BTreeMap::new(),
            side: BTreeMap::new(),
        }
    }

    fn plane(&self, plane: Plane) -> &BTreeMap<SegmentId, Segment3<T>> {
        match plane {
            Plane::Front => &self.front,
            Plane::Side => &self.side,
        }
    }

    fn plane_mut(&mut self, plane: Plane) -> &mut BTreeMap<SegmentId, Segment3<T>> {
        match plane {
            Plane::Front => &mut self.front,
            Plane::Side => &mut self.side,
        }
    }

    /// Adds a segment from `a` to `b` on `plane`.
    ///
    /// # Errors
    ///
    /// Fails if the id is taken on either plane, or if the endpoints cannot
    /// define a line: not finite, coincident, or too close or too far apart
    /// for their distance to be represented.
    pub fn insert(
        &mut self,
        plane: Plane,
        id: SegmentId,
        a: Point3<T>,
        b: Point3<T>,
    ) -> SketchResult<()> {
        if self.find(id).is_some() {
            return Err(SketchError::DuplicateId(id));
        }
        let segment = validated(id, a, b)?;
        self.plane_mut(plane).insert(id, segment);
        Ok(())
    }

    /// Replaces the endpoints of an existing segment, keeping its id.
    /// Returns the previous segment.
    pub fn replace(
        &mut self,
        plane: Plane,
        id: SegmentId,
        a: Point3<T>,
        b: Point3<T>,
    ) -> SketchResult<Segment3<T>> {
        let segment = validated(id, a, b)?;
        match self.plane_mut(plane).get_mut(&id) {
            Some(slot) => Ok(std::mem::replace(slot, segment)),
            None => Err(SketchError::UnknownSegment { plane, id }),
        }
    }

    pub fn remove(&mut self, plane: Plane, id: SegmentId) -> Option<Segment3<T>> {
        self.plane_mut(plane).remove(&id)
    }

    pub fn get(&self, plane: Plane, id: SegmentId) -> Option<&Segment3<T>> {
        self.plane(plane).get(&id)
    }

    /// Which plane holds `id`, if any.
    pub fn find(&self, id: SegmentId) -> Option<Plane> {
        Plane::BOTH
            .into_iter()
            .find(|&plane| self.plane(plane).contains_key(&id))
    }

    pub fn ids_for(&self, plane: Plane) -> impl Iterator<Item = SegmentId> + '_ {
        self.plane(plane).keys().copied()
    }

    pub fn segments(&self, plane: Plane) -> impl Iterator<Item = (SegmentId, &Segment3<T>)> + '_ {
        self.plane(plane).iter().map(|(id, segment)| (*id, segment))
    }

    pub fn count(&self, plane: Plane) -> usize {
        self.plane(plane).len()
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.side.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.side.is_empty()
    }

    pub fn clear(&mut self) {
        self.front.clear();
        self.side.clear();
    }

    /// Puts back a segment previously taken out by `remove` or `replace`.
    pub(crate) fn restore(&mut self, plane: Plane, id: SegmentId, segment: Segment3<T>) {
        self.plane_mut(plane).insert(id, segment);
    }

    /// Stores a segment without validation, so tests can reach states the
    /// public API refuses to build.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(
        &mut self,
        plane: Plane,
        id: SegmentId,
        a: Point3<T>,
        b: Point3<T>,
    ) {
        self.plane_mut(plane).insert(id, Segment3::new(a, b));
    }
}

fn validated<T: Scalar>(
    id: SegmentId,
    a: Point3<T>,
    b: Point3<T>,
) -> SketchResult<Segment3<T>> {
    if !a.is_finite() || !b.is_finite() {
        return Err(SketchError::NonFinite(id));
    }
    let segment = Segment3::new(a, b);
    if segment.is_degenerate() {
        return Err(SketchError::CoincidentEndpoints(id));
    }
    // Same rule the merge applies when it builds a line from the segment.
    if ParametrizedLine::new(&a, &b).is_none() {
        return Err(SketchError::UnrepresentableLength(id));
    }
    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = SegmentStore::new();
        store
            .insert(Plane::Front, SegmentId(1), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(store.find(SegmentId(1)), Some(Plane::Front));
        assert!(store.get(Plane::Side, SegmentId(1)).is_none());
        assert_eq!(store.get(Plane::Front, SegmentId(1)).unwrap().b, p(0.0, 1.0, 0.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique_across_planes() {
        let mut store = SegmentStore::new();
        store
            .insert(Plane::Front, SegmentId(1), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
            .unwrap();
        let err = store
            .insert(Plane::Side, SegmentId(1), p(0.0, 0.0, 0.0), p(0.0, 1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, SketchError::DuplicateId(SegmentId(1)));
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let mut store = SegmentStore::new();
        let a = p(0.2, 0.2, 0.0);
        assert_eq!(
            store.insert(Plane::Front, SegmentId(1), a, a),
            Err(SketchError::CoincidentEndpoints(SegmentId(1)))
        );
        assert_eq!(
            store.insert(Plane::Front, SegmentId(2), a, p(f64::NAN, 0.0, 0.0)),
            Err(SketchError::NonFinite(SegmentId(2)))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_iteration_order() {
        let mut store = SegmentStore::new();
        for i in [5, 2, 9] {
            store
                .insert(Plane::Side, SegmentId(i), p(0.0, 0.0, 0.0), p(0.0, 1.0, i as f64))
                .unwrap();
        }
        let ids: Vec<_> = store.ids_for(Plane::Side).collect();
        assert_eq!(ids, vec![SegmentId(2), SegmentId(5), SegmentId(9)]);

        assert!(store.remove(Plane::Side, SegmentId(5)).is_some());
        assert!(store.remove(Plane::Side, SegmentId(5)).is_none());
        assert!(store.remove(Plane::Front, SegmentId(2)).is_none());
        assert_eq!(store.count(Plane::Side), 2);
    }

    #[test]
    fn test_replace() {
        let mut store = SegmentStore::new();
        store
            .insert(Plane::Front, SegmentId(1), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
            .unwrap();
        let old = store
            .replace(Plane::Front, SegmentId(1), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(old.a, p(0.0, 0.0, 0.0));
        assert_eq!(store.get(Plane::Front, SegmentId(1)).unwrap().a, p(1.0, 0.0, 0.0));
        assert!(
            store
                .replace(Plane::Side, SegmentId(1), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
                .is_err()
        );
    }

    #[test]
    fn test_rejects_lengths_a_line_cannot_carry() {
        let mut store = SegmentStore::new();
        let origin = p(0.0, 0.0, 0.0);
        // Distinct and finite, but the distance underflows to zero.
        assert_eq!(
            store.insert(Plane::Front, SegmentId(1), origin, p(0.0, 1e-170, 0.0)),
            Err(SketchError::UnrepresentableLength(SegmentId(1)))
        );
        // Distinct and finite, but the distance overflows.
        assert_eq!(
            store.insert(Plane::Front, SegmentId(2), origin, p(1e300, 1e300, 0.0)),
            Err(SketchError::UnrepresentableLength(SegmentId(2)))
        );
        assert!(store.is_empty());

        store
            .insert(Plane::Front, SegmentId(3), origin, p(0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(
            store.replace(Plane::Front, SegmentId(3), origin, p(0.0, 1e-170, 0.0)),
            Err(SketchError::UnrepresentableLength(SegmentId(3)))
        );
        assert_eq!(store.get(Plane::Front, SegmentId(3)).unwrap().b, p(0.0, 1.0, 0.0));
    }
}
