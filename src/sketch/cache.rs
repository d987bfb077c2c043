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

//! Incremental merge cache.
//!
//! Every pass walks the full front × side cross product. Pairs already in
//! the cache are stamped with the pass generation, new pairs are merged and
//! inserted, and whatever was not stamped afterwards belongs to a removed
//! segment and is evicted.

use hashbrown::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    geometry::Segment3,
    numeric::Scalar,
    reconstruct::{MergeParams, MergeResult, ReconstructResult, merge_with},
    sketch::{
        config::CachePolicy,
        plane::{MergeKey, Plane},
        store::SegmentStore,
    },
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeCacheEntry<T: Scalar = f64> {
    pub key: MergeKey,
    pub result: MergeResult<T>,
    /// Pass that last visited this entry.
    pub generation: u64,
}

/// What a single pass changed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassReport<T: Scalar = f64> {
    pub generation: u64,
    /// Keys whose result was (re)computed during the pass, ascending.
    pub computed: Vec<MergeKey>,
    /// Entries dropped because a segment they reference is gone, ascending by key.
    pub evicted: Vec<MergeCacheEntry<T>>,
}

impl<T: Scalar> PassReport<T> {
    /// Evicted entries that carried geometry; the shell must release
    /// whatever it rendered for them.
    pub fn evicted_segments(&self) -> impl Iterator<Item = (MergeKey, &Segment3<T>)> + '_ {
        self.evicted
            .iter()
            .filter_map(|entry| entry.result.segment().map(|segment| (entry.key, segment)))
    }

    pub fn is_noop(&self) -> bool {
        self.computed.is_empty() && self.evicted.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MergeCache<T: Scalar = f64> {
    entries: HashMap<MergeKey, MergeCacheEntry<T>>,
    generation: u64,
    params: MergeParams,
    policy: CachePolicy,
}

impl<T: Scalar> Default for MergeCache<T> {
    fn default() -> Self {
        Self::new(MergeParams::default(), CachePolicy::default())
    }
}

impl<T: Scalar> MergeCache<T> {
    pub fn new(params: MergeParams, policy: CachePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
            params,
            policy,
        }
    }

    pub fn params(&self) -> &MergeParams {
        &self.params
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Generation of the most recent pass; zero before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Brings the cache in line with `store`.
    ///
    /// # Errors
    ///
    /// Propagates fatal merge errors. A failed pass commits nothing: entries,
    /// stamps and the generation counter stay as they were.
    pub fn run_pass(&mut self, store: &SegmentStore<T>) -> ReconstructResult<PassReport<T>> {
        let generation = self.generation + 1;
        let mut kept = Vec::new();
        let mut fresh = Vec::new();

        for (front_id, front) in store.segments(Plane::Front) {
            for (side_id, side) in store.segments(Plane::Side) {
                let key = MergeKey::new(front_id, side_id);
                if self.policy == CachePolicy::Sticky && self.entries.contains_key(&key) {
                    kept.push(key);
                    continue;
                }

                let result = merge_with(&self.params, &front.a, &front.b, &side.a, &side.b)?;
                trace!(%key, merged = result.is_merged(), "computed merge");
                fresh.push(MergeCacheEntry {
                    key,
                    result,
                    generation,
                });
            }
        }

        self.generation = generation;
        for key in kept {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.generation = generation;
            }
        }
        let mut computed = Vec::with_capacity(fresh.len());
        for entry in fresh {
            computed.push(entry.key);
            self.entries.insert(entry.key, entry);
        }

        let stale: Vec<MergeKey> = self
            .entries
            .values()
            .filter(|entry| entry.generation != generation)
            .map(|entry| entry.key)
            .collect();
        let mut evicted: Vec<MergeCacheEntry<T>> = stale
            .into_iter()
            .filter_map(|key| self.entries.remove(&key))
            .collect();
        evicted.sort_by_key(|entry| entry.key);
        computed.sort();

        debug!(
            generation,
            computed = computed.len(),
            evicted = evicted.len(),
            cached = self.entries.len(),
            "merge pass complete"
        );

        Ok(PassReport {
            generation,
            computed,
            evicted,
        })
    }

    pub fn get(&self, key: &MergeKey) -> Option<&MergeCacheEntry<T>> {
        self.entries.get(key)
    }

    /// Merged geometry for `key`, if the pair is cached and overlaps.
    pub fn segment(&self, key: &MergeKey) -> Option<&Segment3<T>> {
        self.entries.get(key).and_then(|entry| entry.result.segment())
    }

    pub fn contains(&self, key: &MergeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergeCacheEntry<T>> + '_ {
        self.entries.values()
    }

    /// All cached pairs that produced a 3D segment.
    pub fn segments(&self) -> impl Iterator<Item = (MergeKey, &Segment3<T>)> + '_ {
        self.entries
            .values()
            .filter_map(|entry| entry.result.segment().map(|segment| (entry.key, segment)))
    }

    /// Cached keys in ascending order.
    pub fn keys(&self) -> Vec<MergeKey> {
        let mut keys: Vec<MergeKey> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. The generation counter keeps counting.
    pub fn clear(&mut self) -> Vec<MergeCacheEntry<T>> {
        let mut drained: Vec<MergeCacheEntry<T>> =
            self.entries.drain().map(|(_, entry)| entry).collect();
        drained.sort_by_key(|entry| entry.key);
        drained
    }
}
