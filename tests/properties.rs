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

//! Randomized checks of the merge and cache invariants.

use orthosketch::geometry::{Axis, Point3};
use orthosketch::reconstruct::{MergeResult, merge};
use orthosketch::sketch::{MergeCache, MergeKey, Plane, SegmentId, SegmentStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 500;

fn random_point<R: Rng>(rng: &mut R) -> Point3 {
    Point3::new(
        rng.random_range(-2.0..2.0),
        rng.random_range(-2.0..2.0),
        rng.random_range(-2.0..2.0),
    )
}

/// Front strokes live in the XY plane, side strokes in the ZY plane.
fn front_stroke<R: Rng>(rng: &mut R) -> (Point3, Point3) {
    let a = random_point(rng).with_coord(Axis::Z, 0.0);
    let b = random_point(rng).with_coord(Axis::Z, 0.0);
    (a, b)
}

fn side_stroke<R: Rng>(rng: &mut R) -> (Point3, Point3) {
    let a = random_point(rng).with_coord(Axis::X, 0.0);
    let b = random_point(rng).with_coord(Axis::X, 0.0);
    (a, b)
}

fn spans_overlap(f: &(Point3, Point3), s: &(Point3, Point3)) -> bool {
    let (f_lo, f_hi) = (f.0.y.min(f.1.y), f.0.y.max(f.1.y));
    let (s_lo, s_hi) = (s.0.y.min(s.1.y), s.0.y.max(s.1.y));
    f_lo <= s_hi && s_lo <= f_hi
}

#[test]
fn test_merge_is_deterministic_and_order_invariant() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let f = front_stroke(&mut rng);
        let s = side_stroke(&mut rng);
        let first = merge(&f.0, &f.1, &s.0, &s.1).unwrap();
        let again = merge(&f.0, &f.1, &s.0, &s.1).unwrap();
        let swapped = merge(&f.0, &f.1, &s.1, &s.0).unwrap();
        assert_eq!(first, again);
        assert_eq!(first, swapped);
    }
}

#[test]
fn test_merged_segment_projects_back_onto_both_strokes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut merged = 0;
    for _ in 0..ROUNDS {
        let f = front_stroke(&mut rng);
        let s = side_stroke(&mut rng);
        let res = merge(&f.0, &f.1, &s.0, &s.1).unwrap();

        let MergeResult::Merged(segment) = res else {
            assert!(!spans_overlap(&f, &s));
            continue;
        };
        merged += 1;
        assert!(spans_overlap(&f, &s));

        for q in [segment.a, segment.b] {
            // Seen from the front (drop z) the point lies on the front stroke,
            // seen from the side (drop x) it lies on the side stroke.
            let t = (q.y - f.0.y) / (f.1.y - f.0.y);
            assert!((-1e-9..=1.0 + 1e-9).contains(&t));
            assert!((f.0.x + (f.1.x - f.0.x) * t - q.x).abs() < 1e-6);

            let u = (q.y - s.0.y) / (s.1.y - s.0.y);
            assert!((-1e-9..=1.0 + 1e-9).contains(&u));
            assert!((s.0.z + (s.1.z - s.0.z) * u - q.z).abs() < 1e-6);
        }
    }
    assert!(merged > ROUNDS / 10);
}

#[test]
fn test_cache_matches_direct_merges_after_random_edits() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = SegmentStore::new();
    let mut cache = MergeCache::default();
    let mut next = 1u64;

    for _ in 0..60 {
        let plane = if rng.random_bool(0.5) { Plane::Front } else { Plane::Side };
        let ids: Vec<SegmentId> = store.ids_for(plane).collect();
        if !ids.is_empty() && rng.random_bool(0.3) {
            let victim = ids[rng.random_range(0..ids.len())];
            store.remove(plane, victim).unwrap();
        } else {
            let (a, b) = match plane {
                Plane::Front => front_stroke(&mut rng),
                Plane::Side => side_stroke(&mut rng),
            };
            store.insert(plane, SegmentId(next), a, b).unwrap();
            next += 1;
        }
        cache.run_pass(&store).unwrap();

        let mut expected = Vec::new();
        for (fid, f) in store.segments(Plane::Front) {
            for (sid, s) in store.segments(Plane::Side) {
                let key = MergeKey::new(fid, sid);
                expected.push(key);
                let direct = merge(&f.a, &f.b, &s.a, &s.b).unwrap();
                assert_eq!(cache.get(&key).unwrap().result, direct);
            }
        }
        expected.sort();
        assert_eq!(cache.keys(), expected);
    }
}
