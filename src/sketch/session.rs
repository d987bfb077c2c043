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

//! A sketch editing session.
//!
//! The session owns the segment store, the merge cache and the gesture
//! tracker. Every mutation runs a merge pass before returning, so the cache
//! always reflects the store between calls.

use tracing::{debug, info, warn};

use crate::{
    geometry::{Point3, Segment3},
    numeric::Scalar,
    sketch::{
        cache::{MergeCache, MergeCacheEntry, PassReport},
        config::SketchConfig,
        error::SketchResult,
        gesture::{GestureEvent, GestureTracker, PointerHit, Tool},
        plane::{MergeKey, Plane, SegmentId},
        store::SegmentStore,
    },
};

/// A committed change to the sketch and the merge pass it triggered.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate<T: Scalar = f64> {
    Added {
        plane: Plane,
        id: SegmentId,
        segment: Segment3<T>,
        report: PassReport<T>,
    },
    Removed {
        plane: Plane,
        id: SegmentId,
        segment: Segment3<T>,
        report: PassReport<T>,
    },
}

impl<T: Scalar> SessionUpdate<T> {
    pub fn report(&self) -> &PassReport<T> {
        match self {
            SessionUpdate::Added { report, .. } | SessionUpdate::Removed { report, .. } => report,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session<T: Scalar = f64> {
    config: SketchConfig,
    store: SegmentStore<T>,
    cache: MergeCache<T>,
    gestures: GestureTracker<T>,
    next_id: u64,
}

impl<T: Scalar> Session<T> {
    /// # Errors
    ///
    /// Returns the first problem reported by [`SketchConfig::validate`].
    pub fn new(config: SketchConfig) -> SketchResult<Self> {
        config.validate()?;
        info!(
            shared = %config.merge.layout.shared(),
            front = %config.merge.layout.front(),
            side = %config.merge.layout.side(),
            policy = ?config.cache_policy,
            "sketch session created"
        );
        Ok(Self {
            store: SegmentStore::new(),
            cache: MergeCache::new(config.merge, config.cache_policy),
            gestures: GestureTracker::new(T::from_f64(config.min_drag_length)),
            next_id: 1,
            config,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn store(&self) -> &SegmentStore<T> {
        &self.store
    }

    pub fn cache(&self) -> &MergeCache<T> {
        &self.cache
    }

    pub fn gestures(&self) -> &GestureTracker<T> {
        &self.gestures
    }

    /// Reconstructed segment for a pair, if it has one.
    pub fn merged(&self, front: SegmentId, side: SegmentId) -> Option<&Segment3<T>> {
        self.cache.segment(&MergeKey::new(front, side))
    }

    /// Every reconstructed 3D segment, ascending by key.
    pub fn merged_segments(&self) -> Vec<(MergeKey, Segment3<T>)> {
        let mut out: Vec<(MergeKey, Segment3<T>)> =
            self.cache.segments().map(|(key, segment)| (key, *segment)).collect();
        out.sort_by_key(|(key, _)| *key);
        out
    }

    /// Adds a segment from `a` to `b` on `plane` and runs a merge pass.
    ///
    /// # Errors
    ///
    /// On any error the session is left as it was: the segment is not kept
    /// and its id is not consumed.
    pub fn add_segment(
        &mut self,
        plane: Plane,
        a: Point3<T>,
        b: Point3<T>,
    ) -> SketchResult<SessionUpdate<T>> {
        let id = SegmentId(self.next_id);
        self.store.insert(plane, id, a, b)?;

        let report = match self.run_pass() {
            Ok(report) => report,
            Err(err) => {
                self.store.remove(plane, id);
                warn!(%plane, %id, error = %err, "merge pass failed, segment rolled back");
                return Err(err);
            }
        };
        self.next_id += 1;
        debug!(%plane, %id, "segment added");
        Ok(SessionUpdate::Added {
            plane,
            id,
            segment: Segment3::new(a, b),
            report,
        })
    }

    /// Removes a segment from `plane` and runs a merge pass. Returns `None`
    /// when there was no such segment. The segment is restored if the pass
    /// fails.
    pub fn remove_segment(
        &mut self,
        plane: Plane,
        id: SegmentId,
    ) -> SketchResult<Option<SessionUpdate<T>>> {
        let Some(segment) = self.store.remove(plane, id) else {
            return Ok(None);
        };

        let report = match self.run_pass() {
            Ok(report) => report,
            Err(err) => {
                self.store.restore(plane, id, segment);
                warn!(%plane, %id, error = %err, "merge pass failed, removal rolled back");
                return Err(err);
            }
        };
        debug!(%plane, %id, "segment removed");
        Ok(Some(SessionUpdate::Removed {
            plane,
            id,
            segment,
            report,
        }))
    }

    /// Removes `id` from whichever plane holds it.
    pub fn remove_any(&mut self, id: SegmentId) -> SketchResult<Option<SessionUpdate<T>>> {
        match self.store.find(id) {
            Some(plane) => self.remove_segment(plane, id),
            None => Ok(None),
        }
    }

    /// Moves the endpoints of an existing segment and runs a merge pass.
    ///
    /// Under [`CachePolicy::Sticky`](crate::sketch::CachePolicy::Sticky) the
    /// pairs involving `id` keep their old result; use
    /// [`SketchConfig::live_edit`] when segments are edited this way. The old
    /// endpoints are restored if the pass fails.
    pub fn replace_segment(
        &mut self,
        plane: Plane,
        id: SegmentId,
        a: Point3<T>,
        b: Point3<T>,
    ) -> SketchResult<PassReport<T>> {
        let previous = self.store.replace(plane, id, a, b)?;
        match self.run_pass() {
            Ok(report) => {
                debug!(%plane, %id, "segment replaced");
                Ok(report)
            }
            Err(err) => {
                self.store.restore(plane, id, previous);
                warn!(%plane, %id, error = %err, "merge pass failed, replacement rolled back");
                Err(err)
            }
        }
    }

    /// Runs a merge pass over the current store.
    pub fn run_pass(&mut self) -> SketchResult<PassReport<T>> {
        Ok(self.cache.run_pass(&self.store)?)
    }

    /// Drops every segment and cached merge. Returns the dropped cache
    /// entries so the shell can release their geometry.
    pub fn clear(&mut self) -> Vec<MergeCacheEntry<T>> {
        self.store.clear();
        self.gestures.cancel();
        self.cache.clear()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.gestures.select_tool(tool);
    }

    pub fn cancel(&mut self) {
        self.gestures.cancel();
    }

    pub fn pointer_down(&mut self, hit: PointerHit<T>) -> SketchResult<Option<SessionUpdate<T>>> {
        match self.gestures.pointer_down(hit) {
            Some(event) => self.apply(event),
            None => Ok(None),
        }
    }

    pub fn pointer_move(&mut self, plane: Plane, point: Point3<T>) {
        self.gestures.pointer_move(plane, point);
    }

    pub fn pointer_up(&mut self) -> SketchResult<Option<SessionUpdate<T>>> {
        match self.gestures.pointer_up() {
            Some(event) => self.apply(event),
            None => Ok(None),
        }
    }

    fn apply(&mut self, event: GestureEvent<T>) -> SketchResult<Option<SessionUpdate<T>>> {
        match event {
            GestureEvent::Draw { plane, from, to } => self.add_segment(plane, from, to).map(Some),
            GestureEvent::Remove(id) => self.remove_any(id),
        }
    }
}

impl<T: Scalar> Default for Session<T> {
    fn default() -> Self {
        Self {
            config: SketchConfig::default(),
            store: SegmentStore::new(),
            cache: MergeCache::default(),
            gestures: GestureTracker::default(),
            next_id: 1,
        }
    }
}
